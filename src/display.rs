use crate::model::{Course, Student};
use crate::stats;

pub fn display_details(c: &Course) {
    println!("{}", c.title());
    println!();
    for p in c.presentations() {
        let mut students = c
            .students()
            .iter()
            .filter(|s| p.has_submitted(s.id))
            .collect::<Vec<_>>();
        students.sort_by_key(|s| (s.lastname.clone(), s.firstname.clone()));
        println!("{} (#{}):", p.title, p.id);
        if students.is_empty() {
            println!("  (no homework submitted)");
        }
        for s in students {
            println!("  - {s}");
        }
        println!();
    }
}

pub fn display_stats(c: &Course) {
    let (sat, total) = stats::exam_participation(c);
    println!(
        "Students exam/no exam/total: {}/{}/{}",
        sat,
        total - sat,
        total
    );
    let counts = stats::homework_distribution(c);
    let cumul = counts.iter().scan(0, |s, &r| {
        *s += r;
        Some(*s)
    });
    println!("Homework submitted:");
    for (n, (students, cumulative)) in counts.iter().zip(cumul).enumerate() {
        if *students != 0 {
            println!(
                "  - {} homework(s): {} (cumulative {} - {:.2}%)",
                n,
                students,
                cumulative,
                100.0 * cumulative as f32 / total as f32
            );
        }
    }
    if let Some(summary) = stats::score_summary(c) {
        println!(
            "Final scores min/mean/max: {:.2}/{:.2}/{:.2} (best exam: {:.2})",
            summary.min,
            summary.mean,
            summary.max,
            c.exam_max_score()
        );
    }
}

pub fn display_ranking(ranking: &[Student]) {
    if ranking.is_empty() {
        return;
    }
    println!("Top students:");
    for (rank, s) in ranking.iter().enumerate() {
        println!(
            "  {:>2}. {} (#{}): {:.2} (exam {:.2}, homework {})",
            rank + 1,
            s,
            s.id,
            s.final_score(),
            s.exam_score,
            s.homework_score
        );
    }
}
