//! `log` backend that forwards records to the host console.

use log::Record;

/// Render a record as one console line: `[LEVEL target] message`.
pub fn format_record(record: &Record<'_>) -> String {
    format!("[{} {}] {}", record.level(), record.target(), record.args())
}

/// Logger installed by the entrypoints.
#[cfg(target_arch = "wasm32")]
pub struct GuestLogger;

#[cfg(target_arch = "wasm32")]
static LOGGER: GuestLogger = GuestLogger;

#[cfg(target_arch = "wasm32")]
impl log::Log for GuestLogger {
    fn enabled(&self, metadata: &log::Metadata<'_>) -> bool {
        metadata.level() <= log::max_level()
    }

    fn log(&self, record: &Record<'_>) {
        if !self.enabled(record.metadata()) {
            return;
        }
        let line = format_record(record);
        // Console output never changes the invocation's outcome.
        let _ = hostbind_sdk::HostBinding::console_log(&mut crate::host_bridge::WasmHost, &line);
    }

    fn flush(&self) {}
}

/// Install the guest logger. Later calls only update the level.
#[cfg(target_arch = "wasm32")]
pub fn init(config: &hostbind_sdk::BindingConfig) {
    let _ = log::set_logger(&LOGGER);
    log::set_max_level(config.max_log_level);
}

#[cfg(test)]
mod tests {
    use super::*;
    use log::Level;

    #[test]
    fn test_format_record() {
        let line = format_record(
            &Record::builder()
                .level(Level::Warn)
                .target("hostbind::service")
                .args(format_args!("no write method {:?}", "burn"))
                .build(),
        );
        assert_eq!(line, r#"[WARN hostbind::service] no write method "burn""#);
    }
}
