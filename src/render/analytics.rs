//! Aggregate statistics across every saved form.

use super::dashboard::Totals;
use super::local_date;
use crate::form::FormCollection;

pub const EMPTY_TITLE: &str = "No forms created yet";
pub const EMPTY_HINT: &str = "Create some forms to see analytics";
/// Status shown for every form; there is no real status tracking.
pub const STATUS_BADGE: &str = "Active";

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Summary {
    pub total_submissions: u64,
    pub avg_submissions_per_form: u64,
    pub avg_fields_per_form: u64,
}

impl Summary {
    pub fn of(forms: &FormCollection) -> Self {
        let totals = Totals::of(forms);
        Summary {
            total_submissions: totals.submissions,
            avg_submissions_per_form: rounded_ratio(totals.submissions, totals.forms),
            avg_fields_per_form: rounded_ratio(totals.fields, totals.forms),
        }
    }

    /// The three headline cards, in display order.
    pub fn cards(&self) -> [SummaryCard; 3] {
        [
            SummaryCard {
                title: "Total Submissions",
                value: self.total_submissions,
                note: "across all forms",
            },
            SummaryCard {
                title: "Average per Form",
                value: self.avg_submissions_per_form,
                note: "submissions/form",
            },
            SummaryCard {
                title: "Average Fields",
                value: self.avg_fields_per_form,
                note: "fields per form",
            },
        ]
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SummaryCard {
    pub title: &'static str,
    pub value: u64,
    pub note: &'static str,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BreakdownBar {
    pub name: String,
    pub submissions: u32,
    pub percentage: u64,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TableRow {
    pub name: String,
    pub field_count: usize,
    pub submissions: u32,
    pub created: String,
    pub status: &'static str,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum AnalyticsModel {
    Empty,
    Report {
        summary: Summary,
        /// Sorted by submissions, highest first; ties keep collection order.
        breakdown: Vec<BreakdownBar>,
        table: Vec<TableRow>,
    },
}

pub fn derive(forms: &FormCollection) -> AnalyticsModel {
    if forms.is_empty() {
        return AnalyticsModel::Empty;
    }

    let summary = Summary::of(forms);

    let mut breakdown: Vec<BreakdownBar> = forms
        .iter()
        .map(|form| BreakdownBar {
            name: form.name.clone(),
            submissions: form.submissions,
            percentage: percentage(u64::from(form.submissions), summary.total_submissions),
        })
        .collect();
    breakdown.sort_by(|a, b| b.submissions.cmp(&a.submissions));

    let table = forms
        .iter()
        .map(|form| TableRow {
            name: form.name.clone(),
            field_count: form.fields.len(),
            submissions: form.submissions,
            created: local_date(&form.created_at),
            status: STATUS_BADGE,
        })
        .collect();

    AnalyticsModel::Report {
        summary,
        breakdown,
        table,
    }
}

/// Share of `part` in `total` as a rounded percentage; 0 when `total` is 0.
pub fn percentage(part: u64, total: u64) -> u64 {
    rounded_ratio(part * 100, total)
}

fn rounded_ratio(numerator: u64, denominator: u64) -> u64 {
    if denominator == 0 {
        return 0;
    }
    (numerator as f64 / denominator as f64).round() as u64
}
