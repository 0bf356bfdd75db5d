pub mod result_exporter;
pub mod result_presenter;
pub mod solve_service;
pub mod submission_validator;
pub mod upload_service;

pub use result_exporter::ResultExporter;
pub use result_presenter::ResultPresenter;
pub use solve_service::SolveService;
pub use submission_validator::SubmissionValidator;
pub use upload_service::UploadService;
