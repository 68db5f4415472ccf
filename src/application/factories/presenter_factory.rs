use crate::adapters::outbound::filesystem::{FileSystemWriter, StdoutPresenter};
use crate::ports::outbound::OutputPresenter;
use std::path::PathBuf;

/// Where a finished report is presented
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PresenterTarget {
    Stdout,
    File(PathBuf),
}

impl PresenterTarget {
    /// Stdout unless an output path was given
    pub fn from_output_path(path: Option<PathBuf>) -> Self {
        path.map_or(PresenterTarget::Stdout, PresenterTarget::File)
    }
}

/// Factory for creating output presenters
pub struct PresenterFactory;

impl PresenterFactory {
    pub fn create(target: PresenterTarget) -> Box<dyn OutputPresenter> {
        match target {
            PresenterTarget::Stdout => Box::new(StdoutPresenter::new()),
            PresenterTarget::File(path) => Box::new(FileSystemWriter::new(path)),
        }
    }
}
