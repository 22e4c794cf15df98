use crate::error::CourseError;
use std::fmt;
use std::str::FromStr;

/// The record lists of a course that support removal by id.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum Collection {
    Students,
    Presentations,
}

impl FromStr for Collection {
    type Err = CourseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "students" => Ok(Collection::Students),
            "presentations" => Ok(Collection::Presentations),
            "" => Err(CourseError::InvalidDatabaseTarget {
                message: "a collection must be specified".to_owned(),
            }),
            _ => Err(CourseError::InvalidDatabaseTarget {
                message: format!(
                    "\"{s}\", only \"students\" and \"presentations\" are valid options"
                ),
            }),
        }
    }
}

impl fmt::Display for Collection {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Collection::Students => write!(f, "students"),
            Collection::Presentations => write!(f, "presentations"),
        }
    }
}

#[test]
fn test_parse_collection() {
    assert_eq!("students".parse::<Collection>().unwrap(), Collection::Students);
    assert_eq!(
        "Presentations".parse::<Collection>().unwrap(),
        Collection::Presentations
    );
    assert!(matches!(
        "invalidTarget".parse::<Collection>(),
        Err(CourseError::InvalidDatabaseTarget { .. })
    ));
    assert!(matches!(
        "".parse::<Collection>(),
        Err(CourseError::InvalidDatabaseTarget { .. })
    ));
}
