/// Type alias for Result with anyhow::Error as the error type.
/// Domain failures travel inside it as [`crate::shared::error::HierarchyError`].
pub type Result<T> = std::result::Result<T, anyhow::Error>;
