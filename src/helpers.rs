pub mod format;
pub mod problem_file;
