use super::StudentId;

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct ExamResult {
    pub student_id: StudentId,
    pub score: f64,
}

impl ExamResult {
    pub fn new(student_id: StudentId, score: f64) -> Self {
        Self { student_id, score }
    }
}
