pub mod file_exporter;
pub mod http_executor;

pub use file_exporter::{FileExporter, FsFileExporter};
pub use http_executor::{HttpExecutor, RawResponse};
