#![allow(dead_code)]

pub mod fixtures;

/// Route `log` output through the test harness; `RUST_LOG=trace` shows the
/// per-record decode traces.
pub fn init_logging() {
    let _ = env_logger::builder().is_test(true).try_init();
}
