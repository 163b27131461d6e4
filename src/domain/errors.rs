// Domain-level errors for dataset access.
#[derive(Debug)]
pub enum DatasetError {
    // No file at the resolved path.
    NotFound,
    // File exists but is not valid JSON.
    Malformed,
    // Any other read failure (permissions, directory in place of a file, ...).
    Unreadable(String),
}

impl DatasetError {
    // Client-facing message; never carries paths or causes.
    pub fn message(&self) -> &'static str {
        match self {
            DatasetError::NotFound => "Data file not found",
            DatasetError::Malformed => "Invalid JSON format in data file",
            DatasetError::Unreadable(_) => "Internal server error",
        }
    }
}
