use std::collections::HashMap;
use std::fmt::Write;

use chrono::NaiveDate;

use crate::criteria::{CategoryValue, FilterCriteria};
use crate::models::{SortDirection, SortKey, StudentRecord};
use crate::predicates::SearchOutcome;
use crate::sorting;

pub fn build_report(
    criteria: &FilterCriteria,
    outcome: &SearchOutcome,
    generated_on: NaiveDate,
) -> String {
    let mut output = String::new();

    let _ = writeln!(output, "# Cohort Search Verification Report");
    let _ = writeln!(output, "Generated {generated_on}");
    let _ = writeln!(output);
    let _ = writeln!(output, "## Filters");

    let active = criteria.active_categories();
    if active.is_empty() {
        let _ = writeln!(
            output,
            "No active filters; the search was not performed and the expected count is 0."
        );
        return output;
    }
    for category in &active {
        let line = match criteria.value(*category) {
            Some(CategoryValue::Options(values)) => {
                format!("{}: {}", category.label(), values.join(", "))
            }
            Some(CategoryValue::Text(range)) => format!(
                "{}: {}",
                category.label(),
                range.split_whitespace().collect::<Vec<_>>().join(" through ")
            ),
            _ => category.label().to_owned(),
        };
        let _ = writeln!(output, "- {line}");
    }

    let _ = writeln!(output);
    let _ = writeln!(output, "## Expected Members");

    let members = outcome.members();
    if members.is_empty() {
        let _ = writeln!(output, "No students match the active filters.");
        return output;
    }

    let _ = writeln!(output, "{} students match.", members.len());
    let by_sid: HashMap<&str, &StudentRecord> = members
        .iter()
        .map(|r| (r.sid.as_str(), *r))
        .collect();
    for sid in sorting::expected_sids(members, SortKey::LastName, SortDirection::Ascending) {
        if let Some(record) = by_sid.get(sid.as_str()) {
            let _ = writeln!(
                output,
                "- {} ({}, {})",
                sid, record.last_name, record.first_name
            );
        }
    }

    output
}
