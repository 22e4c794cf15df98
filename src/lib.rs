pub mod checks;
pub mod config;
pub mod display;
pub mod error;
pub mod loaders;
pub mod model;
pub mod stats;
pub mod validation;

pub use config::Config;
pub use error::{CourseError, Result};
pub use model::{
    Collection, Course, ExamResult, Presentation, PresentationId, Student, StudentId, TOP_STUDENTS,
};
