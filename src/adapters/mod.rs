/// Adapters layer - Infrastructure implementations
///
/// Concrete implementations of the outbound ports: files on disk, the
/// console, the CSV ingester, the configured identity and the formatters.
pub mod outbound;
