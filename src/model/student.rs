use crate::error::CourseError;
use crate::validation;
use std::fmt;
use std::str::FromStr;

pub const HOMEWORK_POINTS: u32 = 10;
pub const EXAM_WEIGHT: f64 = 0.75;
pub const HOMEWORK_WEIGHT: f64 = 0.25;

#[derive(Clone, Copy, Debug, Eq, Hash, Ord, PartialEq, PartialOrd)]
pub struct StudentId(pub usize);

impl fmt::Display for StudentId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl FromStr for StudentId {
    type Err = CourseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        validation::parse_id(s).map(StudentId)
    }
}

impl TryFrom<i64> for StudentId {
    type Error = CourseError;

    fn try_from(raw: i64) -> Result<Self, Self::Error> {
        validation::id(raw).map(StudentId)
    }
}

#[derive(Clone, Debug, PartialEq)]
pub struct Student {
    pub id: StudentId,
    pub firstname: String,
    pub lastname: String,
    pub homework_score: u32,
    pub exam_score: f64,
    pub submitted_exam: bool,
}

impl Student {
    pub fn new(id: StudentId, firstname: String, lastname: String) -> Self {
        Self {
            id,
            firstname,
            lastname,
            homework_score: 0,
            exam_score: 0.0,
            submitted_exam: false,
        }
    }

    /// Weighted blend of the exam result and the accumulated homework
    /// points, used for ranking.
    pub fn final_score(&self) -> f64 {
        EXAM_WEIGHT * self.exam_score + HOMEWORK_WEIGHT * f64::from(self.homework_score)
    }

    pub fn homework_count(&self) -> u32 {
        self.homework_score / HOMEWORK_POINTS
    }
}

impl fmt::Display for Student {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} {}", self.firstname, self.lastname)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_final_score() {
        let mut s = Student::new(StudentId(1), "Ivan".into(), "Petrov".into());
        assert_eq!(s.final_score(), 0.0);
        s.homework_score = 20;
        s.exam_score = 80.0;
        assert_eq!(s.final_score(), 65.0);
        assert_eq!(s.homework_count(), 2);
        assert_eq!(s.to_string(), "Ivan Petrov");
    }

    #[test]
    fn test_parse_id() {
        assert_eq!("7".parse::<StudentId>().unwrap(), StudentId(7));
        assert!("0".parse::<StudentId>().is_err());
        assert!(StudentId::try_from(-2).is_err());
        assert_eq!(StudentId::try_from(3).unwrap(), StudentId(3));
    }
}
