pub use self::collection::Collection;
pub use self::course::{Course, TOP_STUDENTS};
pub use self::exam::ExamResult;
pub use self::presentation::{Presentation, PresentationId};
pub use self::student::{EXAM_WEIGHT, HOMEWORK_POINTS, HOMEWORK_WEIGHT, Student, StudentId};

mod collection;
mod course;
mod exam;
mod presentation;
mod student;
