/// Time a block and log the elapsed milliseconds at debug level.
#[macro_export]
macro_rules! profile(
  ($title: literal, $stmt: stmt) => {{
    let t0 = std::time::Instant::now();
    $stmt
    tracing::debug!(elapsed_ms = t0.elapsed().as_millis() as u64, "{} profile", $title);
  }}
);
