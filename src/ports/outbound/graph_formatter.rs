use crate::application::read_models::HierarchyReadModel;
use crate::shared::Result;

/// GraphFormatter port for formatting a generated hierarchy
///
/// This port abstracts the output representation (render-ready JSON,
/// Markdown report, etc.).
pub trait GraphFormatter {
    /// Formats the hierarchy read model
    ///
    /// # Errors
    /// Returns an error if the model has no nodes or serialization fails
    fn format(&self, model: &HierarchyReadModel) -> Result<String>;
}
