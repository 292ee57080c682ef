//! 端末向けのマッチ結果・引き継ぎ表示

use profpilot_common::{generate_href, partition_matches, ProfessorRecord, Resolution};
use std::fmt::Write;

/// マッチ結果を「Top Matches」「Additional Matches」に分けて整形
///
/// 番号は受信順の通し番号（1始まり）で、`--select` に渡す値と一致する。
pub fn render_matches(matches: &[ProfessorRecord], student_input: &str, with_links: bool) -> String {
    let mut out = String::new();
    let _ = writeln!(out, "Your Matches ({} professors found)", matches.len());

    let (top, additional) = partition_matches(matches);

    if !top.is_empty() {
        let _ = writeln!(out, "\nTop Matches");
        for (i, professor) in top.iter().enumerate() {
            render_card(&mut out, i + 1, professor, student_input, with_links);
        }
    }

    if !additional.is_empty() {
        let _ = writeln!(out, "\nAdditional Matches");
        for (i, professor) in additional.iter().enumerate() {
            render_card(&mut out, top.len() + i + 1, professor, student_input, with_links);
        }
    }

    out
}

fn render_card(
    out: &mut String,
    number: usize,
    professor: &ProfessorRecord,
    student_input: &str,
    with_links: bool,
) {
    let score = professor
        .score_label()
        .map(|s| format!("  Match Score: {}", s))
        .unwrap_or_default();
    let _ = writeln!(out, "  [{}] {}{}", number, professor.name, score);
    if let Some(department) = &professor.department {
        let _ = writeln!(out, "      {}", department);
    }
    if let Some(bio) = professor.bio_text() {
        let _ = writeln!(out, "      {}", bio);
    }
    if with_links {
        if let Ok(href) = generate_href(professor, student_input) {
            let _ = writeln!(out, "      -> {}", href);
        }
    }
}

/// 解決済みの引き継ぎを表示用に整形
pub fn render_resolution(resolution: &Resolution) -> String {
    let handoff = &resolution.handoff;
    let mut out = String::new();
    let _ = writeln!(out, "Source: {}", resolution.source.as_str());
    let _ = writeln!(out, "Professor: {}", handoff.professor.name);
    if let Some(title) = &handoff.professor.title {
        let _ = writeln!(out, "  {}", title);
    }
    let _ = writeln!(out, "  Department: {}", handoff.professor.department_or_empty());
    if let Some(score) = handoff.professor.score_label() {
        let _ = writeln!(out, "  Match Score: {}", score);
    }
    let _ = writeln!(
        out,
        "Student input: {}",
        if handoff.student_input.is_empty() { "-" } else { &handoff.student_input }
    );
    out
}
