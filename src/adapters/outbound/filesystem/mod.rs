/// Filesystem adapters for family data, uploads and report output
mod file_reader;
mod file_writer;
mod upload_store;

pub use file_reader::FileSystemReader;
pub use file_writer::{FileSystemWriter, StdoutPresenter};
pub use upload_store::FileSystemUploadRepository;
