/// Seconds since the UNIX epoch, as a float.
#[cfg(not(target_arch = "wasm32"))]
pub fn now_secs() -> f64 {
    std::time::SystemTime::now()
        .duration_since(std::time::UNIX_EPOCH)
        .unwrap_or_default()
        .as_secs_f64()
}

/// Seconds since page load, as a float. Only deltas are meaningful, which is
/// all the debounce and gesture timing need.
#[cfg(target_arch = "wasm32")]
pub fn now_secs() -> f64 {
    web_sys::window()
        .and_then(|window| window.performance())
        .map(|perf| perf.now() / 1000.0)
        .unwrap_or(0.0)
}

/// Whole seconds since the UNIX epoch, for persisted timestamps.
pub fn timestamp_secs() -> u64 {
    now_secs() as u64
}
