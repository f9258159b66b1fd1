//! Recovers a recommendation from a prose reply when the model ignored the
//! JSON instruction.
//!
//! Looks for labelled fields ("Recommended Stream: Science", "Board
//! Recommendations:" followed by bullet lines, numbered degree lists with
//! `name: description` or `name - description`). Secondary fields that cannot
//! be found are taken from `defaults`; a missing headline field discards the
//! reply.

use crate::recommendation::models::{
    AdvancedRecommendation, EntryRecommendation, NamedSuggestion, Recommendation,
};

const MAX_DEGREES: usize = 3;
const MAX_CAREERS: usize = 3;
const MAX_TIPS: usize = 4;

const DEGREE_LABELS: &[&str] = &["recommended undergraduate degrees", "recommended degrees"];
const CAREER_LABELS: &[&str] = &["suitable career paths", "career paths"];
const EXAM_LABELS: &[&str] = &["entrance exams"];
const TIP_LABELS: &[&str] = &["preparation tips"];

const DEFAULT_DEGREE_DESCRIPTION: &str = "Strong match for your skills and interests";
const DEFAULT_CAREER_DESCRIPTION: &str = "Good match for your personality and interests";

/// Extracts a bundle of the same tier as `defaults`.
pub fn extract_recommendation(text: &str, defaults: Recommendation) -> Option<Recommendation> {
    match defaults {
        Recommendation::Entry(d) => extract_entry(text, d).map(Recommendation::Entry),
        Recommendation::Advanced(d) => extract_advanced(text, d).map(Recommendation::Advanced),
    }
}

pub fn extract_entry(text: &str, defaults: EntryRecommendation) -> Option<EntryRecommendation> {
    let recommended_stream = inline_value(text, &["recommended stream"])?;

    let board_recommendations = after_label(text, &["board recommendations"])
        .map(|rest| list_items(rest, &[]))
        .filter(|items| !items.is_empty())
        .unwrap_or(defaults.board_recommendations);

    Some(EntryRecommendation {
        recommended_stream,
        alternate_stream: inline_value(text, &["alternative stream", "alternate stream"])
            .unwrap_or(defaults.alternate_stream),
        core_subjects: inline_value(text, &["core subjects"]).unwrap_or(defaults.core_subjects),
        optional_subjects: inline_value(text, &["optional subjects"])
            .unwrap_or(defaults.optional_subjects),
        board_recommendations,
    })
}

pub fn extract_advanced(
    text: &str,
    defaults: AdvancedRecommendation,
) -> Option<AdvancedRecommendation> {
    let section_stops: Vec<&str> = CAREER_LABELS
        .iter()
        .chain(EXAM_LABELS)
        .chain(TIP_LABELS)
        .copied()
        .collect();

    let recommended_degrees: Vec<NamedSuggestion> = after_label(text, DEGREE_LABELS)
        .map(|rest| named_items(rest, &section_stops, DEFAULT_DEGREE_DESCRIPTION))
        .unwrap_or_default()
        .into_iter()
        .take(MAX_DEGREES)
        .collect();
    if recommended_degrees.is_empty() {
        return None;
    }

    let career_stops: Vec<&str> = EXAM_LABELS.iter().chain(TIP_LABELS).copied().collect();
    let career_paths: Vec<NamedSuggestion> = after_label(text, CAREER_LABELS)
        .map(|rest| named_items(rest, &career_stops, DEFAULT_CAREER_DESCRIPTION))
        .filter(|items| !items.is_empty())
        .unwrap_or(defaults.career_paths)
        .into_iter()
        .take(MAX_CAREERS)
        .collect();

    let preparation_tips: Vec<String> = after_label(text, TIP_LABELS)
        .map(|rest| list_items(rest, &[]))
        .filter(|items| !items.is_empty())
        .unwrap_or(defaults.preparation_tips)
        .into_iter()
        .take(MAX_TIPS)
        .collect();

    Some(AdvancedRecommendation {
        recommended_degrees,
        career_paths,
        entrance_exams: inline_value(text, EXAM_LABELS).unwrap_or(defaults.entrance_exams),
        preparation_tips,
    })
}

// ────────────────────────────────────────────────────────────────────────────
// Text scanning
// ────────────────────────────────────────────────────────────────────────────

/// Text following the first matching label (case-insensitive), with any
/// colon, bold markers and leading whitespace skipped.
fn after_label<'a>(text: &'a str, labels: &[&str]) -> Option<&'a str> {
    // ASCII lowercasing keeps byte offsets aligned with `text`.
    let lowered = text.to_ascii_lowercase();
    let end = labels
        .iter()
        .find_map(|label| lowered.find(label).map(|idx| idx + label.len()))?;
    Some(text[end..].trim_start_matches(|c: char| c == ':' || c == '*' || c.is_whitespace()))
}

/// Single-line value after a label, stopping at the next colon or newline.
fn inline_value(text: &str, labels: &[&str]) -> Option<String> {
    let rest = after_label(text, labels)?;
    let value = rest
        .split(|c: char| c == '\n' || c == ':')
        .next()
        .unwrap_or_default()
        .trim()
        .trim_matches('*')
        .trim();
    (!value.is_empty()).then(|| value.to_string())
}

/// Lines of a section, ending at a blank line or a line naming a stop label.
fn section_lines<'a>(rest: &'a str, stop_labels: &[&str]) -> Vec<&'a str> {
    let mut lines = Vec::new();
    for line in rest.lines() {
        let trimmed = line.trim();
        if trimmed.is_empty() {
            if lines.is_empty() {
                continue;
            }
            break;
        }
        let lowered = trimmed.to_ascii_lowercase();
        if stop_labels.iter().any(|label| lowered.contains(label)) {
            break;
        }
        lines.push(trimmed);
    }
    lines
}

/// Strips bullet (`-`, `•`, `*`) and numbering (`1.`, `2)`) markers.
fn strip_marker(line: &str) -> &str {
    let line = line
        .trim()
        .trim_start_matches(|c: char| c == '-' || c == '•' || c == '*')
        .trim_start();
    let digits = line
        .find(|c: char| !c.is_ascii_digit())
        .unwrap_or(line.len());
    let line = if digits > 0 && line[digits..].starts_with(|c: char| c == '.' || c == ')') {
        &line[digits + 1..]
    } else {
        line
    };
    line.trim().trim_matches('*').trim()
}

fn list_items(rest: &str, stop_labels: &[&str]) -> Vec<String> {
    section_lines(rest, stop_labels)
        .into_iter()
        .map(strip_marker)
        .filter(|item| !item.is_empty())
        .map(str::to_string)
        .collect()
}

fn named_items(rest: &str, stop_labels: &[&str], default_description: &str) -> Vec<NamedSuggestion> {
    section_lines(rest, stop_labels)
        .into_iter()
        .map(strip_marker)
        .filter_map(|item| {
            let (name, description) = item
                .split_once(':')
                .or_else(|| item.split_once(" - "))
                .map(|(n, d)| (n, d.trim()))
                .unwrap_or((item, default_description));
            let name = name.trim().trim_matches('*').trim();
            (!name.is_empty()).then(|| NamedSuggestion::new(name, description.trim_matches('*').trim()))
        })
        .collect()
}
