use crate::model::{Course, PresentationId, StudentId};
use tracing::{info, warn};

/// Submitters recorded on a presentation who are no longer enrolled.
pub fn dangling_submissions(c: &Course) -> Vec<(PresentationId, StudentId)> {
    c.presentations()
        .iter()
        .flat_map(|p| {
            p.submitters
                .iter()
                .filter(move |&&s| c.student(s).is_err())
                .map(move |&s| (p.id, s))
        })
        .collect()
}

pub fn check_consistency(c: &Course) {
    for (p, s) in dangling_submissions(c) {
        warn!("presentation {p} still lists homework from removed student {s}");
    }
    if c.students().iter().any(|s| s.submitted_exam) {
        for s in c.students().iter().filter(|s| !s.submitted_exam) {
            info!("student {s} ({}) has no exam result", s.id);
        }
    }
}

#[test]
fn test_dangling_submissions() {
    let mut c = Course::new("Scopes", &["Closures", "Modules"]).unwrap();
    let a = c.add_student("Ivan Petrov").unwrap();
    let b = c.add_student("Maria Ivanova").unwrap();
    c.submit_homework(a, PresentationId(2)).unwrap();
    c.submit_homework(b, PresentationId(2)).unwrap();
    assert!(dangling_submissions(&c).is_empty());
    c.remove_student(a).unwrap();
    assert_eq!(dangling_submissions(&c), vec![(PresentationId(2), a)]);
}
