use std::cmp::Ordering;

use crate::models::{SortDirection, SortKey, StudentRecord};

/// The sequence of SIDs the list view must show for a matched population
/// under one sort key.
///
/// Every key resolves ties the same way: last name lowered, then first name
/// lowered, then SID, always ascending. Descending inverts the primary
/// comparison only.
pub fn expected_sids(
    members: &[&StudentRecord],
    key: SortKey,
    direction: SortDirection,
) -> Vec<String> {
    let mut ordered = members.to_vec();
    ordered.sort_by(|a, b| primary(a, b, key, direction).then_with(|| tie_break(a, b)));
    ordered.into_iter().map(|r| r.sid.clone()).collect()
}

fn primary(a: &StudentRecord, b: &StudentRecord, key: SortKey, direction: SortDirection) -> Ordering {
    let apply = |ordering: Ordering| match direction {
        SortDirection::Ascending => ordering,
        SortDirection::Descending => ordering.reverse(),
    };
    match key {
        SortKey::FirstName => apply(
            a.first_name_sortable
                .to_lowercase()
                .cmp(&b.first_name_sortable.to_lowercase()),
        ),
        SortKey::LastName | SortKey::Name => apply(name_pair(a).cmp(&name_pair(b))),
        SortKey::Sid => apply(a.sid.cmp(&b.sid)),
        SortKey::Gpa => apply(cmp_f64(a.gpa.unwrap_or(0.0), b.gpa.unwrap_or(0.0))),
        SortKey::Level => apply(level_rank(a).cmp(&level_rank(b))),
        SortKey::Major => apply(first_major(a).cmp(&first_major(b))),
        // Students with no team always trail those with one, whatever the
        // direction.
        SortKey::Team => a
            .squad_names
            .is_empty()
            .cmp(&b.squad_names.is_empty())
            .then(apply(first_team(a).cmp(&first_team(b)))),
        SortKey::UnitsCompleted => apply(cmp_f64(
            a.units_completed.unwrap_or(0.0),
            b.units_completed.unwrap_or(0.0),
        )),
        SortKey::TermUnits => apply(cmp_f64(
            a.term_units.unwrap_or(0.0),
            b.term_units.unwrap_or(0.0),
        )),
        SortKey::GradTerm => apply(term_value(a).cmp(&term_value(b))),
        SortKey::AlertCount => apply(a.alert_count.cmp(&b.alert_count)),
    }
}

fn tie_break(a: &StudentRecord, b: &StudentRecord) -> Ordering {
    name_pair(a)
        .cmp(&name_pair(b))
        .then_with(|| a.sid.cmp(&b.sid))
}

fn name_pair(r: &StudentRecord) -> (String, String) {
    (
        r.last_name_sortable.to_lowercase(),
        r.first_name_sortable.to_lowercase(),
    )
}

fn cmp_f64(a: f64, b: f64) -> Ordering {
    a.partial_cmp(&b).unwrap_or(Ordering::Equal)
}

// Records with no level sort after every defined level group.
fn level_rank(r: &StudentRecord) -> u8 {
    r.level.map_or(u8::MAX, |level| level as u8)
}

// Primary value for the major sort: alphabetically first raw major, with
// non-word characters stripped and case folded.
fn first_major(r: &StudentRecord) -> String {
    r.majors.iter().min().map(|m| normalize(m)).unwrap_or_default()
}

// Teams drop their " (AA)" suffix before normalization.
fn first_team(r: &StudentRecord) -> String {
    r.squad_names
        .iter()
        .min()
        .map(|t| normalize(&t.replace(" (AA)", "")))
        .unwrap_or_default()
}

fn normalize(value: &str) -> String {
    value
        .chars()
        .filter(|c| c.is_ascii_alphanumeric() || *c == '_')
        .collect::<String>()
        .to_lowercase()
}

fn term_value(r: &StudentRecord) -> u32 {
    r.expected_grad_term
        .as_deref()
        .and_then(|term| term.parse().ok())
        .unwrap_or(0)
}
