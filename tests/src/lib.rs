//! Shared helpers for the workspace integration tests in `tests/*.rs`.

use std::io::Write;
use std::sync::Once;

static INIT: Once = Once::new();

/// Installs a debug-level test logger once per test binary.
pub fn init_test_logger() {
    INIT.call_once(|| {
        env_logger::Builder::new()
            .filter_level(log::LevelFilter::Debug)
            .is_test(true)
            .format(|buf, record| writeln!(buf, "[{}] {}", record.level(), record.args()))
            .init();
    });
}
