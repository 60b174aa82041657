/// Bounded wait inside a channel dequeue before the driver re-checks for
/// cancellation (milliseconds)
pub const DEFAULT_WAIT_TIMEOUT_MS: u64 = 250;
/// Enricher used when a submission does not name one
pub const DEFAULT_ENRICHER_NAME: &str = "default-enricher";
/// Fallback tracing filter when neither `RUST_LOG` nor the config sets one
pub const DEFAULT_LOG_LEVEL: &str = "info";
