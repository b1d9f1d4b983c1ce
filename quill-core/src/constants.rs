/// Quill system version.
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Name of the template used when a request names none.
pub const DEFAULT_TEMPLATE_NAME: &str = "standard";

/// Template cache time-to-live (seconds). Entries older than this are
/// refetched from the store on the next read.
pub const TEMPLATE_CACHE_TTL_SECS: u64 = 300;

/// Minimum character count enforced by the minimum-length rule.
pub const MIN_DOCUMENT_CHARS: usize = 1000;
