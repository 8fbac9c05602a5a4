/// Logs a completed load under the `SUCCESS` target so it can be filtered
/// separately, e.g. `RUST_LOG=SUCCESS=info`.
#[macro_export]
macro_rules! success {
    ($($arg:tt)*) => {
        log::info!(target: "SUCCESS", $($arg)*);
    };
}
