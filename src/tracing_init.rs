//! Tracing setup
//!
//! `wavdump` reports every user-facing error on stdout, so log output stays
//! on stderr and only appears when `RUST_LOG` asks for it. Warnings and
//! errors are the only levels enabled without it, and the binary logs none
//! on its normal error paths.

use tracing_subscriber::{fmt, EnvFilter};

/// Directive used when `RUST_LOG` is unset or invalid
const DEFAULT_DIRECTIVE: &str = "wavdump=warn";

fn env_filter() -> EnvFilter {
    EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(DEFAULT_DIRECTIVE))
}

/// Install a stderr subscriber for the binary; call once at the top of `main`
///
/// `RUST_LOG=wavdump=debug` shows argument rejections, synthesis parameters
/// and the file being written.
pub fn init_tracing() {
    fmt()
        .with_env_filter(env_filter())
        .with_target(true)
        .with_line_number(true)
        .with_writer(std::io::stderr)
        .init();
}

/// Install a subscriber that writes through the test harness, at most once
#[cfg(test)]
pub fn init_test_tracing() {
    use once_cell::sync::OnceCell;

    static INSTALLED: OnceCell<()> = OnceCell::new();
    INSTALLED.get_or_init(|| {
        fmt()
            .with_env_filter(env_filter())
            .with_line_number(true)
            .with_test_writer()
            .init();
    });
}
