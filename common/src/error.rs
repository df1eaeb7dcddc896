use std::path::PathBuf;

use thiserror::Error;

#[derive(Debug, Error)]
pub enum AnalyzeError {
    #[error("Results directory does not exist: {}", .0.display())]
    MissingResultsDir(PathBuf),
    #[error("Results path is not a directory: {}", .0.display())]
    NotADirectory(PathBuf),
}
