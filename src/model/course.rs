use super::*;
use crate::error::{CourseError, Result};
use crate::validation;
use std::collections::HashSet;
use tracing::{debug, trace};

pub const TOP_STUDENTS: usize = 10;

/// In-memory record keeping for a single course.
///
/// Ids are handed out by counters that only ever grow, so an id stays unique
/// for the lifetime of the course even after the record owning it is removed.
#[derive(Clone, Debug)]
pub struct Course {
    title: String,
    presentations: Vec<Presentation>,
    students: Vec<Student>,
    exam_max_score: f64,
    last_presentation_id: usize,
    last_student_id: usize,
}

fn remove_first<T>(items: &mut Vec<T>, matches: impl Fn(&T) -> bool) -> Option<T> {
    let pos = items.iter().position(matches)?;
    Some(items.remove(pos))
}

fn not_found(id: usize, collection: Collection) -> CourseError {
    CourseError::IdNotFound {
        message: format!("cannot find id {id} in the course {collection}"),
    }
}

impl Course {
    /// Create a course with a title and at least one presentation. The
    /// presentations get ids 1, 2, 3… in the given order.
    pub fn new<S: AsRef<str>>(title: &str, presentations: &[S]) -> Result<Course> {
        let title = validation::title(title)?.to_owned();
        if presentations.is_empty() {
            return Err(CourseError::NoPresentations {
                message: "a course needs at least one presentation".to_owned(),
            });
        }
        let mut course = Course {
            title,
            presentations: Vec::with_capacity(presentations.len()),
            students: Vec::new(),
            exam_max_score: 0.0,
            last_presentation_id: 0,
            last_student_id: 0,
        };
        for presentation in presentations {
            course.add_presentation(presentation.as_ref())?;
        }
        debug!(
            title = %course.title,
            presentations = course.presentations.len(),
            "course initialized"
        );
        Ok(course)
    }

    pub fn title(&self) -> &str {
        &self.title
    }

    pub fn set_title(&mut self, title: &str) -> Result<&mut Self> {
        self.title = validation::title(title)?.to_owned();
        Ok(self)
    }

    pub fn add_presentation(&mut self, title: &str) -> Result<&mut Self> {
        let title = validation::title(title)?.to_owned();
        self.last_presentation_id += 1;
        let id = PresentationId(self.last_presentation_id);
        trace!(%id, title = %title, "adding presentation");
        self.presentations.push(Presentation::new(id, title));
        Ok(self)
    }

    /// Register a student given as `Firstname Lastname` and return the newly
    /// assigned id.
    pub fn add_student(&mut self, full_name: &str) -> Result<StudentId> {
        let (firstname, lastname) = validation::full_name(full_name)?;
        self.last_student_id += 1;
        let student = Student::new(StudentId(self.last_student_id), firstname, lastname);
        debug!(id = %student.id, student = %student, "student added");
        let id = student.id;
        self.students.push(student);
        Ok(id)
    }

    pub fn get_all_students(&self) -> Vec<Student> {
        self.students.clone()
    }

    pub fn students(&self) -> &[Student] {
        &self.students
    }

    pub fn presentations(&self) -> &[Presentation] {
        &self.presentations
    }

    pub fn student(&self, id: StudentId) -> Result<&Student> {
        Ok(&self.students[self.student_index(id)?])
    }

    pub fn presentation(&self, id: PresentationId) -> Result<&Presentation> {
        Ok(&self.presentations[self.presentation_index(id)?])
    }

    pub fn exam_max_score(&self) -> f64 {
        self.exam_max_score
    }

    fn student_index(&self, StudentId(id): StudentId) -> Result<usize> {
        validation::check_id(id)?;
        self.students
            .iter()
            .position(|s| s.id.0 == id)
            .ok_or_else(|| not_found(id, Collection::Students))
    }

    fn presentation_index(&self, PresentationId(id): PresentationId) -> Result<usize> {
        validation::check_id(id)?;
        self.presentations
            .iter()
            .position(|p| p.id.0 == id)
            .ok_or_else(|| not_found(id, Collection::Presentations))
    }

    /// Record the homework of `student` for `presentation`. Each pair may be
    /// submitted only once and is worth [`HOMEWORK_POINTS`].
    pub fn submit_homework(
        &mut self,
        student: StudentId,
        presentation: PresentationId,
    ) -> Result<&mut Self> {
        let s = self.student_index(student)?;
        let p = self.presentation_index(presentation)?;
        let presentation = &mut self.presentations[p];
        if !presentation.submitters.insert(student) {
            return Err(CourseError::DuplicateSubmission {
                message: format!(
                    "student {student} is already in the list of submitted homeworks for \"{}\"",
                    presentation.title
                ),
            });
        }
        let student = &mut self.students[s];
        student.homework_score += HOMEWORK_POINTS;
        debug!(
            student = %student,
            presentation = %presentation.title,
            homework_score = student.homework_score,
            "homework submitted"
        );
        Ok(self)
    }

    /// Stamp a batch of exam results onto the students. Every entry is
    /// checked before any student is touched, so a rejected batch changes
    /// nothing. A student can only ever receive one exam score.
    pub fn push_exam_results(&mut self, results: &[ExamResult]) -> Result<&mut Self> {
        let mut seen = HashSet::with_capacity(results.len());
        let mut stamps = Vec::with_capacity(results.len());
        for result in results {
            let index = self.student_index(result.student_id)?;
            if self.students[index].submitted_exam || !seen.insert(result.student_id) {
                return Err(CourseError::DuplicateExamEntry {
                    message: format!(
                        "repeating student id {} in exam results",
                        result.student_id
                    ),
                });
            }
            stamps.push((index, validation::score(result.score)?));
        }
        for (index, score) in stamps {
            let student = &mut self.students[index];
            student.submitted_exam = true;
            student.exam_score = score;
            trace!(student = %student, score, "exam result recorded");
            self.exam_max_score = self.exam_max_score.max(score);
        }
        debug!(
            entries = results.len(),
            max_score = self.exam_max_score,
            "exam results pushed"
        );
        Ok(self)
    }

    /// The best students by final score, best first. Students with equal
    /// scores keep their enrolment order. The ranking is rebuilt on every
    /// call and always reflects the current records.
    pub fn top_students(&self, limit: usize) -> Vec<Student> {
        let mut ranking = self.students.clone();
        ranking.sort_by(|a, b| b.final_score().total_cmp(&a.final_score()));
        ranking.truncate(limit);
        ranking
    }

    pub fn get_top_students(&self) -> Vec<Student> {
        self.top_students(TOP_STUDENTS)
    }

    /// Remove a record by id from the collection named by `target`
    /// (`"students"` or `"presentations"`, case insensitive).
    pub fn remove(&mut self, target: &str, id: usize) -> Result<&mut Self> {
        let collection = target.parse::<Collection>()?;
        self.remove_from(collection, id)
    }

    /// Ids of removed records are not handed out again, and removing a
    /// student leaves its id in the submitters of every presentation.
    pub fn remove_from(&mut self, collection: Collection, id: usize) -> Result<&mut Self> {
        validation::check_id(id)?;
        let removed = match collection {
            Collection::Students => {
                remove_first(&mut self.students, |s| s.id.0 == id).map(|s| s.to_string())
            }
            Collection::Presentations => {
                remove_first(&mut self.presentations, |p| p.id.0 == id).map(|p| p.title)
            }
        };
        match removed {
            Some(name) => {
                debug!(%collection, id, name = %name, "record removed");
                Ok(self)
            }
            None => Err(not_found(id, collection)),
        }
    }

    pub fn remove_student(&mut self, StudentId(id): StudentId) -> Result<&mut Self> {
        self.remove_from(Collection::Students, id)
    }

    pub fn remove_presentation(&mut self, PresentationId(id): PresentationId) -> Result<&mut Self> {
        self.remove_from(Collection::Presentations, id)
    }
}
