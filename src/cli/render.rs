//! Human renderer for CLI outputs.
//!
//! This module is pure formatting; handlers gather any extra data
//! needed. `--json` output bypasses it entirely.

use time::Date;
use time::macros::format_description;

use crate::core::{CounterKey, Letter, LetterStatus};

pub(crate) fn format_date(date: Date) -> String {
    let format = format_description!("[year]-[month]-[day]");
    date.format(format).unwrap_or_else(|_| date.to_string())
}

pub(crate) fn render_issued(letter: &Letter) -> String {
    let mut out = String::new();
    out.push_str(&format!("✓ Issued {}\n", letter.display()));
    out.push_str(&format!("  Subject: {}\n", letter.subject()));
    if let Some(party) = letter.party() {
        out.push_str(&format!("  Party: {party}\n"));
    }
    out.push_str(&format!(
        "  Date: {}\n",
        format_date(letter.letter_date())
    ));
    out.push_str(&format!("  Id: {}", letter.id()));
    out
}

pub(crate) fn render_letter_row(letter: &Letter) -> String {
    let status = match letter.status() {
        LetterStatus::Active => "active",
        LetterStatus::Void => "VOID",
    };
    let party = letter.party().unwrap_or("-");
    format!(
        "{:<16} {}  {:<18} [{}] {} · {}",
        letter.display(),
        format_date(letter.letter_date()),
        letter.classification().label(),
        status,
        letter.subject(),
        party
    )
}

pub(crate) fn render_list(shown: &[&Letter], total: usize, active: usize, void: usize) -> String {
    let mut out = String::new();
    if shown.is_empty() {
        out.push_str("No letters match.\n");
    } else {
        for letter in shown {
            out.push_str(&render_letter_row(letter));
            out.push('\n');
        }
    }
    out.push_str(&format!(
        "Total: {total} • Active: {active} • Void: {void} • Shown: {}",
        shown.len()
    ));
    out
}

pub(crate) fn render_counters(entries: &[(CounterKey, u64)]) -> String {
    if entries.is_empty() {
        return "No counters yet. They appear after the first issuance.".into();
    }
    let mut out = String::new();
    for (key, last) in entries {
        out.push_str(&format!(
            "{:<18} {}/{}/{:04}  (last #{last})\n",
            key.classification().label(),
            key.classification().prefix(),
            key.year(),
            last
        ));
    }
    out.pop();
    out
}

pub(crate) fn render_status(total: usize, active: usize, void: usize, series: usize) -> String {
    format!(
        "Letters: {total} ({active} active, {void} void) • Series: {series}"
    )
}
