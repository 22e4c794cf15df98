use thiserror::Error;

#[derive(Error, Debug, Clone, PartialEq)]
pub enum CourseError {
    #[error("invalid title: {message}")]
    InvalidTitle { message: String },

    #[error("invalid student name: {message}")]
    InvalidName { message: String },

    #[error("incorrect id format: {message}")]
    InvalidIdFormat { message: String },

    #[error("no such id: {message}")]
    IdNotFound { message: String },

    #[error("homework already submitted: {message}")]
    DuplicateSubmission { message: String },

    #[error("invalid exam results: {message}")]
    DuplicateExamEntry { message: String },

    #[error("invalid exam score: {message}")]
    InvalidScore { message: String },

    #[error("invalid collection: {message}")]
    InvalidDatabaseTarget { message: String },

    #[error("incorrect presentation input: {message}")]
    NoPresentations { message: String },
}

impl CourseError {
    pub fn message(&self) -> &str {
        match self {
            CourseError::InvalidTitle { message }
            | CourseError::InvalidName { message }
            | CourseError::InvalidIdFormat { message }
            | CourseError::IdNotFound { message }
            | CourseError::DuplicateSubmission { message }
            | CourseError::DuplicateExamEntry { message }
            | CourseError::InvalidScore { message }
            | CourseError::InvalidDatabaseTarget { message }
            | CourseError::NoPresentations { message } => message,
        }
    }
}

pub type Result<T> = std::result::Result<T, CourseError>;
