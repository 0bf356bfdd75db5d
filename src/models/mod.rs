pub mod problem;
pub mod selected_file;
pub mod solution;

pub use problem::{ProblemInput, Sequence};
pub use selected_file::{media_type_for_path, SelectedFile, TEXT_PLAIN};
pub use solution::{format_fixed, format_number, Classification, SolveResponse, SolveResult};
