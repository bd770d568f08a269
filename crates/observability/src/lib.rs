//! Tracing/logging setup shared by the binary and the tests.

pub mod subscriber;

pub use subscriber::LogFormat;

/// Initialize process-wide tracing with the format named by `LOG_FORMAT`.
///
/// This is safe to call multiple times; subsequent calls become no-ops.
pub fn init() {
    let format = std::env::var("LOG_FORMAT")
        .map(|v| LogFormat::from_name(&v))
        .unwrap_or_default();
    subscriber::init(format);
}
