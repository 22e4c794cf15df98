use crate::config::Config;
use crate::model::{Course, ExamResult, PresentationId, Student, StudentId};
use crate::validation;
use eyre::{Result, WrapErr};
use serde::{Deserialize, Serialize};
use std::fs::File;
use std::io;
use std::path::Path;
use tracing::{debug, info};

#[derive(Debug, Deserialize)]
struct StudentRecord {
    name: String,
}

#[derive(Debug, Deserialize)]
struct HomeworkRecord {
    student_id: String,
    presentation_id: String,
}

#[derive(Debug, Deserialize)]
struct ExamRecord {
    student_id: String,
    score: String,
}

#[derive(Debug, Serialize)]
struct RankingRecord<'a> {
    rank: usize,
    id: usize,
    firstname: &'a str,
    lastname: &'a str,
    homework: u32,
    exam: f64,
    #[serde(rename = "final")]
    final_score: f64,
}

fn reader<R: io::Read>(input: R) -> csv::Reader<R> {
    csv::ReaderBuilder::new()
        .trim(csv::Trim::All)
        .from_reader(input)
}

fn open(path: &Path) -> Result<File> {
    File::open(path).wrap_err_with(|| format!("cannot open {}", path.display()))
}

/// Read the full names of the roster, one `name` column per row.
pub fn read_students<R: io::Read>(input: R) -> Result<Vec<String>> {
    reader(input)
        .deserialize::<StudentRecord>()
        .enumerate()
        .map(|(row, record)| {
            record
                .map(|r| r.name)
                .wrap_err_with(|| format!("cannot read student at row {}", row + 1))
        })
        .collect()
}

pub fn read_homework<R: io::Read>(input: R) -> Result<Vec<(StudentId, PresentationId)>> {
    reader(input)
        .deserialize::<HomeworkRecord>()
        .enumerate()
        .map(|(row, record)| {
            let parse = || -> Result<_> {
                let record = record?;
                Ok((
                    record.student_id.parse::<StudentId>()?,
                    record.presentation_id.parse::<PresentationId>()?,
                ))
            };
            parse().wrap_err_with(|| format!("cannot read homework at row {}", row + 1))
        })
        .collect()
}

pub fn read_exam_results<R: io::Read>(input: R) -> Result<Vec<ExamResult>> {
    reader(input)
        .deserialize::<ExamRecord>()
        .enumerate()
        .map(|(row, record)| {
            let parse = || -> Result<_> {
                let record = record?;
                Ok(ExamResult::new(
                    record.student_id.parse::<StudentId>()?,
                    validation::parse_score(&record.score)?,
                ))
            };
            parse().wrap_err_with(|| format!("cannot read exam result at row {}", row + 1))
        })
        .collect()
}

/// Export a ranking, best student first.
pub fn write_ranking<W: io::Write>(output: W, ranking: &[Student]) -> Result<()> {
    let mut writer = csv::Writer::from_writer(output);
    for (rank, student) in ranking.iter().enumerate() {
        writer.serialize(RankingRecord {
            rank: rank + 1,
            id: student.id.0,
            firstname: &student.firstname,
            lastname: &student.lastname,
            homework: student.homework_score,
            exam: student.exam_score,
            final_score: student.final_score(),
        })?;
    }
    writer.flush()?;
    Ok(())
}

pub fn save_ranking(path: &Path, ranking: &[Student]) -> Result<()> {
    let file = File::create(path).wrap_err_with(|| format!("cannot create {}", path.display()))?;
    write_ranking(file, ranking).wrap_err("cannot save ranking")?;
    info!(path = %path.display(), students = ranking.len(), "ranking saved");
    Ok(())
}

/// Build a course from its configuration: enrol the roster, record homework
/// and exam results, then apply withdrawals and cancellations. Removed
/// students stay listed among the submitters of their presentations.
pub fn load_course(config: &Config) -> Result<Course> {
    let mut course = Course::new(&config.course.title, config.course.presentations.as_slice())
        .wrap_err("cannot create course")?;
    if let Some(path) = &config.data.students {
        let path = config.resolve(path);
        let names = read_students(open(&path)?)
            .wrap_err_with(|| format!("cannot load students from {}", path.display()))?;
        for name in names {
            course
                .add_student(&name)
                .wrap_err_with(|| format!("cannot enrol {name:?}"))?;
        }
        debug!(students = course.students().len(), "roster loaded");
    }
    if let Some(path) = &config.data.homework {
        let path = config.resolve(path);
        let submissions = read_homework(open(&path)?)
            .wrap_err_with(|| format!("cannot load homework from {}", path.display()))?;
        for (student, presentation) in submissions {
            course.submit_homework(student, presentation).wrap_err_with(|| {
                format!("cannot submit homework of student {student} for presentation {presentation}")
            })?;
        }
    }
    if let Some(path) = &config.data.exam {
        let path = config.resolve(path);
        let results = read_exam_results(open(&path)?)
            .wrap_err_with(|| format!("cannot load exam results from {}", path.display()))?;
        course
            .push_exam_results(&results)
            .wrap_err("cannot push exam results")?;
    }
    for &id in &config.data.withdrawn_students {
        StudentId::try_from(id)
            .and_then(|student| course.remove_student(student).map(|_| ()))
            .wrap_err_with(|| format!("cannot withdraw student {id}"))?;
    }
    for &id in &config.data.cancelled_presentations {
        PresentationId::try_from(id)
            .and_then(|presentation| course.remove_presentation(presentation).map(|_| ()))
            .wrap_err_with(|| format!("cannot cancel presentation {id}"))?;
    }
    Ok(course)
}
