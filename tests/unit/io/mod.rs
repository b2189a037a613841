pub mod error;
pub mod solution_file;
