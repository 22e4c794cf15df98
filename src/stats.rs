use crate::model::{Course, PresentationId};

/// Number of students per count of submitted homeworks, trailing zeros
/// removed.
pub fn homework_distribution(c: &Course) -> Vec<usize> {
    let mut counts = vec![0; c.presentations().len() + 1];
    for student in c.students() {
        let n = student.homework_count() as usize;
        if n >= counts.len() {
            counts.resize(n + 1, 0);
        }
        counts[n] += 1;
    }
    let latest = counts.iter().rposition(|&n| n != 0).map_or(0, |n| n + 1);
    counts.truncate(latest);
    counts
}

/// Submissions per presentation, counting enrolled students only.
pub fn submissions_per_presentation(c: &Course) -> Vec<(PresentationId, usize)> {
    c.presentations()
        .iter()
        .map(|p| {
            let n = c.students().iter().filter(|s| p.has_submitted(s.id)).count();
            (p.id, n)
        })
        .collect()
}

/// Students who sat the exam, and the total number of students.
pub fn exam_participation(c: &Course) -> (usize, usize) {
    let sat = c.students().iter().filter(|s| s.submitted_exam).count();
    (sat, c.students().len())
}

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct ScoreSummary {
    pub min: f64,
    pub max: f64,
    pub mean: f64,
}

pub fn score_summary(c: &Course) -> Option<ScoreSummary> {
    let scores = c.students().iter().map(|s| s.final_score()).collect::<Vec<_>>();
    if scores.is_empty() {
        return None;
    }
    Some(ScoreSummary {
        min: scores.iter().copied().fold(f64::INFINITY, f64::min),
        max: scores.iter().copied().fold(f64::NEG_INFINITY, f64::max),
        mean: scores.iter().sum::<f64>() / scores.len() as f64,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::{ExamResult, StudentId};

    fn course() -> Course {
        let mut c = Course::new("Scopes", &["Closures", "Modules", "Classes"]).unwrap();
        for name in ["Ivan Petrov", "Maria Ivanova", "Georgi Georgiev"] {
            c.add_student(name).unwrap();
        }
        c.submit_homework(StudentId(1), PresentationId(1))
            .unwrap()
            .submit_homework(StudentId(1), PresentationId(2))
            .unwrap()
            .submit_homework(StudentId(2), PresentationId(1))
            .unwrap();
        c
    }

    #[test]
    fn test_homework_distribution() {
        assert_eq!(homework_distribution(&course()), vec![1, 1, 1]);
        let empty = Course::new("Scopes", &["Closures"]).unwrap();
        assert!(homework_distribution(&empty).is_empty());
    }

    #[test]
    fn test_submissions_ignore_removed_students() {
        let mut c = course();
        assert_eq!(
            submissions_per_presentation(&c),
            vec![
                (PresentationId(1), 2),
                (PresentationId(2), 1),
                (PresentationId(3), 0)
            ]
        );
        c.remove_student(StudentId(2)).unwrap();
        assert_eq!(submissions_per_presentation(&c)[0], (PresentationId(1), 1));
    }

    #[test]
    fn test_exam_participation_and_summary() {
        let mut c = course();
        c.push_exam_results(&[ExamResult::new(StudentId(3), 40.0)]).unwrap();
        assert_eq!(exam_participation(&c), (1, 3));
        let summary = score_summary(&c).unwrap();
        assert_eq!(summary.min, 2.5);
        assert_eq!(summary.max, 30.0);
        assert_eq!(summary.mean, 12.5);
    }
}
