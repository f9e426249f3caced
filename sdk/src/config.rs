//! Binding layer configuration.

use log::LevelFilter;

/// Configuration for one guest module.
///
/// Controls guest-side logging and the read-only guard applied to `read`
/// invocations.
#[derive(Debug, Clone)]
pub struct BindingConfig {
    /// Most verbose level forwarded to the host console.
    /// Default: `Info`.
    pub max_log_level: LevelFilter,

    /// Wrap the host in a `ReadOnlyHost` during `read` invocations so
    /// mutations fail in the guest instead of reaching the host.
    pub enforce_read_only: bool,

    /// Log the entrypoint, service and method of every invocation.
    pub log_invocations: bool,
}

impl Default for BindingConfig {
    fn default() -> Self {
        Self {
            max_log_level: LevelFilter::Info,
            enforce_read_only: true,
            log_invocations: true,
        }
    }
}
