use crate::model::TOP_STUDENTS;
use eyre::{Result, WrapErr};
use serde::Deserialize;
use std::fs;
use std::path::{Path, PathBuf};

#[derive(Debug, Deserialize)]
pub struct Config {
    pub course: CourseSection,
    #[serde(default)]
    pub data: DataSection,
    #[serde(default)]
    pub report: ReportSection,
    #[serde(skip)]
    base_dir: PathBuf,
}

#[derive(Debug, Deserialize)]
pub struct CourseSection {
    pub title: String,
    pub presentations: Vec<String>,
}

#[derive(Debug, Default, Deserialize)]
pub struct DataSection {
    pub students: Option<PathBuf>,
    pub homework: Option<PathBuf>,
    pub exam: Option<PathBuf>,
    #[serde(default)]
    pub withdrawn_students: Vec<i64>,
    #[serde(default)]
    pub cancelled_presentations: Vec<i64>,
}

#[derive(Debug, Deserialize)]
pub struct ReportSection {
    #[serde(default = "default_top")]
    pub top: usize,
    pub output: Option<PathBuf>,
}

fn default_top() -> usize {
    TOP_STUDENTS
}

impl Default for ReportSection {
    fn default() -> Self {
        Self {
            top: default_top(),
            output: None,
        }
    }
}

impl Config {
    pub fn load(file_name: &Path) -> Result<Config> {
        let content = fs::read_to_string(file_name)
            .wrap_err_with(|| format!("cannot load configuration file {}", file_name.display()))?;
        let mut config = Self::parse(&content)
            .wrap_err_with(|| format!("cannot parse configuration file {}", file_name.display()))?;
        config.base_dir = file_name
            .parent()
            .map(Path::to_path_buf)
            .unwrap_or_default();
        Ok(config)
    }

    /// Parse a configuration whose relative paths resolve against the
    /// current directory.
    pub fn parse(content: &str) -> Result<Config> {
        Ok(toml::from_str(content)?)
    }

    /// Resolve a data path relative to the directory of the configuration
    /// file.
    pub fn resolve(&self, path: &Path) -> PathBuf {
        self.base_dir.join(path)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_minimal_config() {
        let config = Config::parse(
            r#"
            [course]
            title = "Modules and Patterns"
            presentations = ["Closures", "Modules"]
            "#,
        )
        .unwrap();
        assert_eq!(config.course.title, "Modules and Patterns");
        assert_eq!(config.course.presentations.len(), 2);
        assert!(config.data.students.is_none());
        assert!(config.data.withdrawn_students.is_empty());
        assert_eq!(config.report.top, TOP_STUDENTS);
        assert!(config.report.output.is_none());
        assert_eq!(config.resolve(Path::new("a.csv")), PathBuf::from("a.csv"));
    }

    #[test]
    fn test_full_config() {
        let config = Config::parse(
            r#"
            [course]
            title = "Scopes"
            presentations = ["Closures"]

            [data]
            students = "students.csv"
            exam = "exam.csv"
            withdrawn_students = [2, 4]

            [report]
            top = 3
            output = "ranking.csv"
            "#,
        )
        .unwrap();
        assert_eq!(config.data.students, Some(PathBuf::from("students.csv")));
        assert!(config.data.homework.is_none());
        assert_eq!(config.data.withdrawn_students, vec![2, 4]);
        assert_eq!(config.report.top, 3);
        assert_eq!(config.report.output, Some(PathBuf::from("ranking.csv")));
    }

    #[test]
    fn test_missing_course_section() {
        assert!(Config::parse("[report]\ntop = 5\n").is_err());
    }
}
