use super::StudentId;
use crate::error::CourseError;
use crate::validation;
use std::collections::BTreeSet;
use std::fmt;
use std::str::FromStr;

#[derive(Clone, Copy, Debug, Eq, Hash, Ord, PartialEq, PartialOrd)]
pub struct PresentationId(pub usize);

impl fmt::Display for PresentationId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl FromStr for PresentationId {
    type Err = CourseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        validation::parse_id(s).map(PresentationId)
    }
}

impl TryFrom<i64> for PresentationId {
    type Error = CourseError;

    fn try_from(raw: i64) -> Result<Self, Self::Error> {
        validation::id(raw).map(PresentationId)
    }
}

/// A course session. Its homework is identified by the presentation id.
#[derive(Clone, Debug, PartialEq)]
pub struct Presentation {
    pub id: PresentationId,
    pub title: String,
    /// Students who handed in the homework. Entries are kept when the
    /// student is later removed from the course.
    pub submitters: BTreeSet<StudentId>,
}

impl Presentation {
    pub fn new(id: PresentationId, title: String) -> Self {
        Self {
            id,
            title,
            submitters: BTreeSet::new(),
        }
    }

    pub fn has_submitted(&self, student: StudentId) -> bool {
        self.submitters.contains(&student)
    }
}
