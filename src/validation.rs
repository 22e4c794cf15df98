use crate::error::{CourseError, Result};
use regex::Regex;
use std::sync::LazyLock;

static FULL_NAME: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^([A-Z][a-z]*) ([A-Z][a-z]*)$").expect("full name pattern must compile")
});

static CONSECUTIVE_WHITESPACE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"\s\s").expect("whitespace pattern must compile"));

fn invalid_title(message: &str) -> CourseError {
    CourseError::InvalidTitle {
        message: message.to_owned(),
    }
}

/// Check a course or presentation title: at least one character, no leading
/// or trailing whitespace and no consecutive whitespace.
pub fn title(title: &str) -> Result<&str> {
    if title.is_empty() {
        return Err(invalid_title("title must be at least one character"));
    }
    if title.starts_with(char::is_whitespace) || title.ends_with(char::is_whitespace) {
        return Err(invalid_title("title cannot start or end with whitespace"));
    }
    if CONSECUTIVE_WHITESPACE.is_match(title) {
        return Err(invalid_title("title cannot contain consecutive whitespace"));
    }
    Ok(title)
}

/// Split a `Firstname Lastname` string into its two validated parts.
pub fn full_name(full_name: &str) -> Result<(String, String)> {
    FULL_NAME
        .captures(full_name)
        .map(|caps| (caps[1].to_owned(), caps[2].to_owned()))
        .ok_or_else(|| CourseError::InvalidName {
            message: format!(
                "\"{full_name}\" should be made of latin letters in the format \"Firstname Lastname\""
            ),
        })
}

fn invalid_id(raw: impl std::fmt::Display) -> CourseError {
    CourseError::InvalidIdFormat {
        message: format!("\"{raw}\" should be an integer value greater than zero"),
    }
}

pub fn id(raw: i64) -> Result<usize> {
    match usize::try_from(raw) {
        Ok(id) if id > 0 => Ok(id),
        _ => Err(invalid_id(raw)),
    }
}

/// Reject the zero id, which the registry never hands out.
pub fn check_id(id: usize) -> Result<usize> {
    if id == 0 { Err(invalid_id(id)) } else { Ok(id) }
}

pub fn parse_id(s: &str) -> Result<usize> {
    s.trim()
        .parse::<i64>()
        .map_err(|_| invalid_id(s))
        .and_then(id)
}

pub fn score(score: f64) -> Result<f64> {
    if score.is_finite() {
        Ok(score)
    } else {
        Err(CourseError::InvalidScore {
            message: format!("\"{score}\" is not a number"),
        })
    }
}

pub fn parse_score(s: &str) -> Result<f64> {
    s.trim()
        .parse::<f64>()
        .map_err(|_| CourseError::InvalidScore {
            message: format!("\"{s}\" is not a number"),
        })
        .and_then(score)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_title() {
        assert!(title("Modules and Patterns").is_ok());
        assert!(title("Ofcourse, this is a valid title!").is_ok());
        assert!(title("x").is_ok());
        assert!(matches!(title(""), Err(CourseError::InvalidTitle { .. })));
        assert!(matches!(title(" Lead"), Err(CourseError::InvalidTitle { .. })));
        assert!(matches!(title("Trail "), Err(CourseError::InvalidTitle { .. })));
        assert!(matches!(title("Two  spaces"), Err(CourseError::InvalidTitle { .. })));
        assert!(matches!(title("Tab\t here"), Err(CourseError::InvalidTitle { .. })));
    }

    #[test]
    fn test_full_name() {
        assert_eq!(
            full_name("Ivan Petrov").unwrap(),
            ("Ivan".to_owned(), "Petrov".to_owned())
        );
        assert_eq!(full_name("A B").unwrap(), ("A".to_owned(), "B".to_owned()));
        for bad in [
            "ivan Petrov",
            "Ivan petrov",
            "IvanPetrov",
            "Ivan  Petrov",
            "Ivan Petrov Ivanov",
            "IVan Petrov",
            " Ivan Petrov",
            "",
        ] {
            assert!(
                matches!(full_name(bad), Err(CourseError::InvalidName { .. })),
                "{bad:?} should be rejected"
            );
        }
    }

    #[test]
    fn test_ids() {
        assert_eq!(id(1).unwrap(), 1);
        assert!(matches!(id(0), Err(CourseError::InvalidIdFormat { .. })));
        assert!(matches!(id(-4), Err(CourseError::InvalidIdFormat { .. })));
        assert!(check_id(0).is_err());
        assert_eq!(parse_id(" 12 ").unwrap(), 12);
        assert!(parse_id("1.5").is_err());
        assert!(parse_id("abc").is_err());
        assert!(parse_id("-1").is_err());
    }

    #[test]
    fn test_scores() {
        assert_eq!(score(80.0).unwrap(), 80.0);
        assert!(matches!(score(f64::NAN), Err(CourseError::InvalidScore { .. })));
        assert!(score(f64::INFINITY).is_err());
        assert_eq!(parse_score("72.5").unwrap(), 72.5);
        assert!(matches!(parse_score("ten"), Err(CourseError::InvalidScore { .. })));
        assert!(parse_score("NaN").is_err());
    }
}
