use std::collections::HashSet;

use serde::Deserialize;
use tracing::{debug, warn};

use crate::criteria::{FilterCategory, FilterCriteria};
use crate::error::OracleError;
use crate::ethnicity;
use crate::models::StudentRecord;

/// Options currently offered by the live system. Majors and squads drift over
/// time, so criteria are pruned against this catalog before a search.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct OptionCatalog {
    pub majors: Vec<String>,
    pub teams: Vec<String>,
}

/// Result of driving one search: either the search was skipped because no
/// category remained active, or it ran and produced the matched members.
#[derive(Debug)]
pub enum SearchOutcome<'a> {
    NotPerformed,
    Performed { members: Vec<&'a StudentRecord> },
}

impl<'a> SearchOutcome<'a> {
    pub fn members(&self) -> &[&'a StudentRecord] {
        match self {
            SearchOutcome::NotPerformed => &[],
            SearchOutcome::Performed { members } => members,
        }
    }

    pub fn member_count(&self) -> usize {
        self.members().len()
    }
}

fn selected(list: &Option<Vec<String>>) -> Option<&[String]> {
    list.as_deref().filter(|v| !v.is_empty())
}

struct GpaRange {
    low: f64,
    high: f64,
    inclusive_high: bool,
}

// Range labels look like "3.00 - 3.49" or "Below 2.0". The top bucket is the
// one whose high token reads exactly "4.00"; only that bucket includes its
// high bound.
fn parse_gpa_range(label: &str) -> GpaRange {
    if label.contains("Below") {
        return GpaRange {
            low: 0.0,
            high: 2.0,
            inclusive_high: false,
        };
    }
    let compact = label.replace(' ', "");
    let mut bounds = compact.splitn(2, '-');
    let low = bounds.next().unwrap_or("").parse().unwrap_or(0.0);
    let high_token = bounds.next().unwrap_or("");
    GpaRange {
        low,
        high: round_tenth(high_token.parse().unwrap_or(0.0)),
        inclusive_high: high_token == "4.00",
    }
}

fn round_tenth(value: f64) -> f64 {
    (value * 10.0).round() / 10.0
}

fn round_ten(value: f64) -> f64 {
    (value / 10.0).round() * 10.0
}

// A GPA of exactly zero or no GPA at all matches no bucket.
fn matches_gpa(ranges: &[String], record: &StudentRecord) -> bool {
    let Some(gpa) = record.gpa else {
        return false;
    };
    if gpa == 0.0 {
        return false;
    }
    ranges.iter().any(|label| {
        let range = parse_gpa_range(label);
        gpa >= range.low
            && if range.inclusive_high {
                gpa <= range.high
            } else {
                gpa < range.high
            }
    })
}

fn matches_units(ranges: &[String], record: &StudentRecord) -> bool {
    ranges.iter().any(|label| {
        if label.contains('+') {
            record.units_completed.is_some_and(|units| units >= 120.0)
        } else {
            let mut bounds = label.splitn(2, " - ");
            let low: f64 = bounds.next().unwrap_or("").parse().unwrap_or(0.0);
            let high: f64 = bounds.next().unwrap_or("").parse().unwrap_or(0.0);
            let units = record.units_completed.unwrap_or(0.0);
            units >= low && units < round_ten(high)
        }
    })
}

// Level labels carry unit-range annotation, e.g. "Junior (60-89 Units)", so
// the match is containment rather than equality.
fn matches_level(labels: &[String], record: &StudentRecord) -> bool {
    record
        .level
        .is_some_and(|level| labels.iter().any(|label| label.contains(level.label())))
}

fn matches_last_name(range: &str, record: &StudentRecord) -> bool {
    let mut bounds = range.split_whitespace();
    let (Some(low), Some(high)) = (bounds.next(), bounds.next()) else {
        return false;
    };
    let Some(initial) = record.last_name_sortable.chars().next() else {
        return false;
    };
    let initial = initial.to_lowercase().to_string();
    initial >= low.to_lowercase() && initial <= high.to_lowercase()
}

// Maps criteria labels to the raw code set. Any label other than Male/Female
// means the fixture itself is corrupt, which invalidates the scenario.
fn coe_gender_codes(labels: &[String]) -> Result<HashSet<&'static str>, OracleError> {
    let mut codes = HashSet::new();
    for label in labels {
        match label.as_str() {
            "Male" => codes.extend(["M", "m"]),
            "Female" => codes.extend(["F", "f"]),
            other => {
                return Err(OracleError::UnrecognizedCoeGender {
                    label: other.to_owned(),
                })
            }
        }
    }
    Ok(codes)
}

fn matches_plans(plans: &[String], record: &StudentRecord, advisor_uid: &str) -> bool {
    let wildcard = plans.iter().any(|p| p == "*");
    record.advisor_plans.iter().any(|assignment| {
        assignment.advisor_uid == advisor_uid
            && (wildcard || plans.contains(&assignment.plan_code))
    })
}

fn matches_ethnicity(labels: &[String], record: &StudentRecord) -> bool {
    record
        .ethnicity_code
        .as_deref()
        .and_then(ethnicity::translate)
        .is_some_and(|translated| labels.iter().any(|label| label.as_str() == translated))
}

// Each selected status unions in its own flag; a status string the UI does
// not define selects nothing.
fn matches_prep(statuses: &[String], record: &StudentRecord) -> bool {
    statuses.iter().any(|status| match status.as_str() {
        "PREP" => record.prep,
        "PREP eligible" => record.prep_eligible,
        "T-PREP" => record.t_prep,
        "T-PREP eligible" => record.t_prep_eligible,
        _ => false,
    })
}

fn intersects(values: &[String], selection: &[String]) -> bool {
    values.iter().any(|v| selection.contains(v))
}

/// The subset of the roster matching one category of the criteria.
///
/// `None` means the category is unset and contributes the universal set.
/// The roster is never mutated; records are returned by reference.
pub fn category_subset<'a>(
    category: FilterCategory,
    criteria: &FilterCriteria,
    roster: &'a [StudentRecord],
    advisor_uid: &str,
) -> Result<Option<Vec<&'a StudentRecord>>, OracleError> {
    fn filtered<'a>(
        roster: &'a [StudentRecord],
        pred: impl Fn(&StudentRecord) -> bool,
    ) -> Vec<&'a StudentRecord> {
        roster.iter().filter(|r| pred(r)).collect()
    }

    let subset = match category {
        FilterCategory::GpaRanges => selected(&criteria.gpa_ranges)
            .map(|ranges| filtered(roster, |r| matches_gpa(ranges, r))),
        FilterCategory::Levels => selected(&criteria.levels)
            .map(|labels| filtered(roster, |r| matches_level(labels, r))),
        FilterCategory::UnitRanges => selected(&criteria.unit_ranges)
            .map(|ranges| filtered(roster, |r| matches_units(ranges, r))),
        FilterCategory::Majors => selected(&criteria.majors)
            .map(|majors| filtered(roster, |r| intersects(&r.majors, majors))),
        FilterCategory::LastNameRange => criteria
            .last_name_range
            .as_deref()
            .filter(|range| !range.is_empty())
            .map(|range| filtered(roster, |r| matches_last_name(range, r))),
        FilterCategory::TransferStudent => criteria
            .transfer_student
            .then(|| filtered(roster, |r| r.transfer_student)),
        FilterCategory::GradTerms => selected(&criteria.grad_terms).map(|terms| {
            filtered(roster, |r| {
                r.expected_grad_term
                    .as_ref()
                    .is_some_and(|term| terms.contains(term))
            })
        }),
        FilterCategory::Genders => selected(&criteria.genders).map(|genders| {
            filtered(roster, |r| {
                r.gender.as_ref().is_some_and(|g| genders.contains(g))
            })
        }),
        FilterCategory::MyStudentPlans => selected(&criteria.my_student_plans)
            .map(|plans| filtered(roster, |r| matches_plans(plans, r, advisor_uid))),
        FilterCategory::Advisors => selected(&criteria.advisors).map(|advisors| {
            filtered(roster, |r| {
                r.coe_advisor_uid
                    .as_ref()
                    .is_some_and(|uid| advisors.contains(uid))
            })
        }),
        FilterCategory::Ethnicities => selected(&criteria.ethnicities)
            .map(|labels| filtered(roster, |r| matches_ethnicity(labels, r))),
        FilterCategory::CoeGenders => match selected(&criteria.coe_genders) {
            Some(labels) => {
                let codes = coe_gender_codes(labels)?;
                Some(filtered(roster, |r| {
                    r.coe_gender
                        .as_deref()
                        .is_some_and(|code| codes.contains(code))
                }))
            }
            None => None,
        },
        FilterCategory::UnderrepresentedMinority => criteria
            .underrepresented_minority
            .then(|| filtered(roster, |r| r.underrepresented_minority)),
        FilterCategory::Preps => selected(&criteria.preps)
            .map(|statuses| filtered(roster, |r| matches_prep(statuses, r))),
        FilterCategory::InactiveCoe => criteria
            .inactive_coe
            .then(|| filtered(roster, |r| r.inactive_coe)),
        FilterCategory::ProbationCoe => criteria
            .probation_coe
            .then(|| filtered(roster, |r| r.probation_coe)),
        // The flag on the record is phrased as activity, the filter as
        // inactivity.
        FilterCategory::InactiveAsc => criteria
            .inactive_asc
            .then(|| filtered(roster, |r| !r.active_asc)),
        FilterCategory::IntensiveAsc => criteria
            .intensive_asc
            .then(|| filtered(roster, |r| r.intensive_asc)),
        FilterCategory::Teams => selected(&criteria.teams)
            .map(|teams| filtered(roster, |r| intersects(&r.squad_names, teams))),
    };
    Ok(subset)
}

/// Conjunctive intersection of per-category subsets, by SID.
///
/// Any empty subset collapses the whole result: a stale option that matches
/// nothing must propagate to "no results", never be skipped. With no subsets
/// at all, every record matches. Roster order is preserved.
pub fn intersect_subsets<'a>(
    roster: &'a [StudentRecord],
    subsets: &[HashSet<&str>],
) -> Vec<&'a StudentRecord> {
    if subsets.iter().any(|subset| subset.is_empty()) {
        return Vec::new();
    }
    roster
        .iter()
        .filter(|r| subsets.iter().all(|subset| subset.contains(r.sid.as_str())))
        .collect()
}

/// Evaluates every populated category and intersects the results.
pub fn match_population<'a>(
    criteria: &FilterCriteria,
    roster: &'a [StudentRecord],
    advisor_uid: &str,
) -> Result<Vec<&'a StudentRecord>, OracleError> {
    let mut subsets = Vec::new();
    for category in FilterCategory::ALL {
        if let Some(matched) = category_subset(category, criteria, roster, advisor_uid)? {
            subsets.push(matched.into_iter().map(|r| r.sid.as_str()).collect());
        }
    }
    Ok(intersect_subsets(roster, &subsets))
}

/// Drops selected majors and teams the live system no longer offers.
/// The caller re-queries with the pruned criteria; guessing replacements is
/// not the oracle's job.
pub fn prune_unavailable(criteria: &mut FilterCriteria, catalog: &OptionCatalog) {
    if let Some(majors) = criteria.majors.as_mut() {
        let missing: Vec<&String> = majors
            .iter()
            .filter(|m| !catalog.majors.contains(m))
            .collect();
        if !missing.is_empty() {
            debug!("majors {missing:?} are not present, removing from search criteria");
            majors.retain(|m| catalog.majors.contains(m));
        }
    }
    if let Some(teams) = criteria.teams.as_mut() {
        let missing: Vec<&String> = teams
            .iter()
            .filter(|t| !catalog.teams.contains(t))
            .collect();
        if !missing.is_empty() {
            debug!("teams {missing:?} are not present, removing from search criteria");
            teams.retain(|t| catalog.teams.contains(t));
        }
    }
}

/// Runs one search. Criteria with no active category skip the search
/// entirely and report a zero count; that is the documented soft path, not
/// an error.
pub fn run_search<'a>(
    criteria: &FilterCriteria,
    roster: &'a [StudentRecord],
    advisor_uid: &str,
) -> Result<SearchOutcome<'a>, OracleError> {
    if criteria.is_empty() {
        warn!("none of the search criteria are active; skipping the search");
        return Ok(SearchOutcome::NotPerformed);
    }
    let members = match_population(criteria, roster, advisor_uid)?;
    if members.is_empty() {
        warn!("no results found for the active filters");
    }
    Ok(SearchOutcome::Performed { members })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{AdvisorPlan, Level};
    use proptest::prelude::*;

    fn student(sid: &str, last: &str, first: &str) -> StudentRecord {
        StudentRecord {
            sid: sid.to_owned(),
            first_name: first.to_owned(),
            last_name: last.to_owned(),
            first_name_sortable: first.to_lowercase(),
            last_name_sortable: last.to_lowercase(),
            ..StudentRecord::default()
        }
    }

    fn sids(records: &[&StudentRecord]) -> Vec<String> {
        records.iter().map(|r| r.sid.clone()).collect()
    }

    fn gpa_criteria(ranges: &[&str]) -> FilterCriteria {
        FilterCriteria {
            gpa_ranges: Some(ranges.iter().map(|s| (*s).to_owned()).collect()),
            ..FilterCriteria::default()
        }
    }

    #[test]
    fn gpa_two_point_zero_sits_on_the_bucket_boundary() {
        let mut on_boundary = student("1", "Ade", "Bo");
        on_boundary.gpa = Some(2.0);
        let roster = [on_boundary];

        let below = match_population(&gpa_criteria(&["Below 2.0"]), &roster, "").unwrap();
        assert!(below.is_empty());

        let above = match_population(&gpa_criteria(&["2.00 - 2.49"]), &roster, "").unwrap();
        assert_eq!(sids(&above), ["1"]);
    }

    #[test]
    fn top_gpa_bucket_is_inclusive_at_both_ends() {
        let mut perfect = student("1", "Ade", "Bo");
        perfect.gpa = Some(4.0);
        let mut near = student("2", "Beck", "Cy");
        near.gpa = Some(3.49);
        let roster = [perfect, near];

        let top = match_population(&gpa_criteria(&["3.50 - 4.00"]), &roster, "").unwrap();
        assert_eq!(sids(&top), ["1"]);

        let lower = match_population(&gpa_criteria(&["3.00 - 3.49"]), &roster, "").unwrap();
        // 3.49 < round(3.49) = 3.5, so the near-miss lands in the lower bucket.
        assert_eq!(sids(&lower), ["2"]);
    }

    #[test]
    fn zero_or_missing_gpa_never_matches() {
        let mut zero = student("1", "Ade", "Bo");
        zero.gpa = Some(0.0);
        let none = student("2", "Beck", "Cy");
        let roster = [zero, none];

        let matched = match_population(&gpa_criteria(&["Below 2.0"]), &roster, "").unwrap();
        assert!(matched.is_empty());
    }

    #[test]
    fn multiple_gpa_ranges_union() {
        let mut low = student("1", "Ade", "Bo");
        low.gpa = Some(1.5);
        let mut high = student("2", "Beck", "Cy");
        high.gpa = Some(3.8);
        let mut middle = student("3", "Cole", "Di");
        middle.gpa = Some(2.7);
        let roster = [low, high, middle];

        let matched =
            match_population(&gpa_criteria(&["Below 2.0", "3.50 - 4.00"]), &roster, "").unwrap();
        assert_eq!(sids(&matched), ["1", "2"]);
    }

    #[test]
    fn units_120_plus_bucket_boundary() {
        let mut under = student("1", "Ade", "Bo");
        under.units_completed = Some(119.99);
        let mut over = student("2", "Beck", "Cy");
        over.units_completed = Some(120.0);
        let roster = [under, over];

        let criteria = FilterCriteria {
            unit_ranges: Some(vec!["120 +".to_owned()]),
            ..FilterCriteria::default()
        };
        let matched = match_population(&criteria, &roster, "").unwrap();
        assert_eq!(sids(&matched), ["2"]);
    }

    #[test]
    fn units_range_high_bound_rounds_to_nearest_ten() {
        let mut inside = student("1", "Ade", "Bo");
        inside.units_completed = Some(89.5);
        let mut outside = student("2", "Beck", "Cy");
        outside.units_completed = Some(90.0);
        let roster = [inside, outside];

        let criteria = FilterCriteria {
            unit_ranges: Some(vec!["60 - 89".to_owned()]),
            ..FilterCriteria::default()
        };
        let matched = match_population(&criteria, &roster, "").unwrap();
        assert_eq!(sids(&matched), ["1"]);
    }

    #[test]
    fn level_labels_match_by_containment() {
        let mut junior = student("1", "Ade", "Bo");
        junior.level = Some(Level::Junior);
        let mut senior = student("2", "Beck", "Cy");
        senior.level = Some(Level::Senior);
        let roster = [junior, senior];

        let criteria = FilterCriteria {
            levels: Some(vec!["Junior (60-89 Units)".to_owned()]),
            ..FilterCriteria::default()
        };
        let matched = match_population(&criteria, &roster, "").unwrap();
        assert_eq!(sids(&matched), ["1"]);
    }

    #[test]
    fn major_matches_when_any_selected_major_is_held() {
        let mut double = student("1", "Ade", "Bo");
        double.majors = vec!["Bioengineering BS".to_owned(), "Nuclear Engineering BS".to_owned()];
        let mut other = student("2", "Beck", "Cy");
        other.majors = vec!["History BA".to_owned()];
        let roster = [double, other];

        let criteria = FilterCriteria {
            majors: Some(vec!["Nuclear Engineering BS".to_owned()]),
            ..FilterCriteria::default()
        };
        let matched = match_population(&criteria, &roster, "").unwrap();
        assert_eq!(sids(&matched), ["1"]);
    }

    #[test]
    fn last_name_range_is_inclusive_of_both_initials() {
        let roster = [
            student("1", "Abbot", "Al"),
            student("2", "Booth", "Bea"),
            student("3", "Yu", "Cal"),
            student("4", "Zim", "Dee"),
        ];
        let criteria = FilterCriteria {
            last_name_range: Some("B Y".to_owned()),
            ..FilterCriteria::default()
        };
        let matched = match_population(&criteria, &roster, "").unwrap();
        assert_eq!(sids(&matched), ["2", "3"]);
    }

    #[test]
    fn my_students_requires_the_acting_advisor() {
        let mut mine = student("1", "Ade", "Bo");
        mine.advisor_plans = vec![AdvisorPlan {
            advisor_uid: "777".to_owned(),
            plan_code: "25000U".to_owned(),
        }];
        let mut someone_elses = student("2", "Beck", "Cy");
        someone_elses.advisor_plans = vec![AdvisorPlan {
            advisor_uid: "888".to_owned(),
            plan_code: "25000U".to_owned(),
        }];
        let roster = [mine, someone_elses];

        let criteria = FilterCriteria {
            my_student_plans: Some(vec!["25000U".to_owned()]),
            ..FilterCriteria::default()
        };
        let matched = match_population(&criteria, &roster, "777").unwrap();
        assert_eq!(sids(&matched), ["1"]);
    }

    #[test]
    fn my_students_wildcard_matches_any_plan() {
        let mut mine = student("1", "Ade", "Bo");
        mine.advisor_plans = vec![AdvisorPlan {
            advisor_uid: "777".to_owned(),
            plan_code: "25345G".to_owned(),
        }];
        let roster = [mine];

        let criteria = FilterCriteria {
            my_student_plans: Some(vec!["*".to_owned()]),
            ..FilterCriteria::default()
        };
        let matched = match_population(&criteria, &roster, "777").unwrap();
        assert_eq!(sids(&matched), ["1"]);
        assert!(match_population(&criteria, &roster, "888").unwrap().is_empty());
    }

    #[test]
    fn coe_gender_normalizes_case_of_raw_codes() {
        let mut upper = student("1", "Ade", "Bo");
        upper.coe_gender = Some("M".to_owned());
        let mut lower = student("2", "Beck", "Cy");
        lower.coe_gender = Some("m".to_owned());
        let mut female = student("3", "Cole", "Di");
        female.coe_gender = Some("F".to_owned());
        let roster = [upper, lower, female];

        let criteria = FilterCriteria {
            coe_genders: Some(vec!["Male".to_owned()]),
            ..FilterCriteria::default()
        };
        let matched = match_population(&criteria, &roster, "").unwrap();
        assert_eq!(sids(&matched), ["1", "2"]);
    }

    #[test]
    fn unrecognized_coe_gender_label_aborts_the_search() {
        let roster = [student("1", "Ade", "Bo")];
        let criteria = FilterCriteria {
            coe_genders: Some(vec!["Nonbinary".to_owned()]),
            ..FilterCriteria::default()
        };
        let err = match_population(&criteria, &roster, "").unwrap_err();
        assert!(matches!(err, OracleError::UnrecognizedCoeGender { .. }));
    }

    #[test]
    fn prep_statuses_union_independently() {
        let mut prep = student("1", "Ade", "Bo");
        prep.prep = true;
        let mut t_prep_eligible = student("2", "Beck", "Cy");
        t_prep_eligible.t_prep_eligible = true;
        let mut neither = student("3", "Cole", "Di");
        neither.prep_eligible = true;
        let roster = [prep, t_prep_eligible, neither];

        let criteria = FilterCriteria {
            preps: Some(vec!["PREP".to_owned(), "T-PREP eligible".to_owned()]),
            ..FilterCriteria::default()
        };
        let matched = match_population(&criteria, &roster, "").unwrap();
        assert_eq!(sids(&matched), ["1", "2"]);
    }

    #[test]
    fn unknown_prep_status_selects_nothing_and_empties_the_result() {
        let mut prep = student("1", "Ade", "Bo");
        prep.prep = true;
        let roster = [prep];

        let criteria = FilterCriteria {
            preps: Some(vec!["SUPER-PREP".to_owned()]),
            ..FilterCriteria::default()
        };
        let matched = match_population(&criteria, &roster, "").unwrap();
        assert!(matched.is_empty());
    }

    #[test]
    fn inactive_asc_is_the_negation_of_the_activity_flag() {
        let mut active = student("1", "Ade", "Bo");
        active.active_asc = true;
        let inactive = student("2", "Beck", "Cy");
        let roster = [active, inactive];

        let criteria = FilterCriteria {
            inactive_asc: true,
            ..FilterCriteria::default()
        };
        let matched = match_population(&criteria, &roster, "").unwrap();
        assert_eq!(sids(&matched), ["2"]);
    }

    #[test]
    fn ethnicity_matches_via_translated_label() {
        let mut chicano = student("1", "Ade", "Bo");
        chicano.ethnicity_code = Some("E".to_owned());
        let mut unknown_code = student("2", "Beck", "Cy");
        unknown_code.ethnicity_code = Some("Q".to_owned());
        let roster = [chicano, unknown_code];

        let criteria = FilterCriteria {
            ethnicities: Some(vec!["Mexican / Mexican-American / Chicano".to_owned()]),
            ..FilterCriteria::default()
        };
        let matched = match_population(&criteria, &roster, "").unwrap();
        assert_eq!(sids(&matched), ["1"]);
    }

    #[test]
    fn unset_criteria_match_the_whole_roster() {
        let roster = [
            student("1", "Ade", "Bo"),
            student("2", "Beck", "Cy"),
            student("3", "Cole", "Di"),
        ];
        let matched = match_population(&FilterCriteria::default(), &roster, "").unwrap();
        assert_eq!(sids(&matched), ["1", "2", "3"]);
    }

    #[test]
    fn one_empty_subset_empties_the_whole_result() {
        let mut transfer = student("1", "Ade", "Bo");
        transfer.transfer_student = true;
        let roster = [transfer];

        let criteria = FilterCriteria {
            transfer_student: true,
            majors: Some(vec!["Retired Major BS".to_owned()]),
            ..FilterCriteria::default()
        };
        let matched = match_population(&criteria, &roster, "").unwrap();
        assert!(matched.is_empty());
    }

    #[test]
    fn pruning_drops_options_missing_from_the_catalog() {
        let mut criteria = FilterCriteria {
            majors: Some(vec!["History BA".to_owned(), "Alchemy BS".to_owned()]),
            teams: Some(vec!["Men's Rugby".to_owned()]),
            ..FilterCriteria::default()
        };
        let catalog = OptionCatalog {
            majors: vec!["History BA".to_owned()],
            teams: vec![],
        };
        prune_unavailable(&mut criteria, &catalog);
        assert_eq!(criteria.majors, Some(vec!["History BA".to_owned()]));
        assert_eq!(criteria.teams, Some(vec![]));
    }

    #[test]
    fn empty_criteria_skip_the_search() {
        let roster = [student("1", "Ade", "Bo")];
        let outcome = run_search(&FilterCriteria::default(), &roster, "").unwrap();
        assert!(matches!(outcome, SearchOutcome::NotPerformed));
        assert_eq!(outcome.member_count(), 0);
    }

    #[test]
    fn pruned_to_empty_criteria_report_zero_without_searching() {
        let mut criteria = FilterCriteria {
            teams: Some(vec!["Defunct Squad".to_owned()]),
            ..FilterCriteria::default()
        };
        prune_unavailable(&mut criteria, &OptionCatalog::default());
        let roster = [student("1", "Ade", "Bo")];
        let outcome = run_search(&criteria, &roster, "").unwrap();
        assert_eq!(outcome.member_count(), 0);
        assert!(matches!(outcome, SearchOutcome::NotPerformed));
    }

    proptest! {
        #[test]
        fn intersection_is_order_independent(
            memberships in proptest::collection::vec(
                proptest::collection::vec(any::<bool>(), 6),
                0..5,
            ),
        ) {
            let roster: Vec<StudentRecord> = (0..6)
                .map(|i| student(&i.to_string(), "Last", "First"))
                .collect();
            let subsets: Vec<HashSet<&str>> = memberships
                .iter()
                .map(|included| {
                    roster
                        .iter()
                        .zip(included)
                        .filter(|(_, keep)| **keep)
                        .map(|(r, _)| r.sid.as_str())
                        .collect()
                })
                .collect();

            let forward = sids(&intersect_subsets(&roster, &subsets));
            let mut reversed_subsets = subsets.clone();
            reversed_subsets.reverse();
            let reversed = sids(&intersect_subsets(&roster, &reversed_subsets));
            let mut rotated_subsets = subsets.clone();
            rotated_subsets.rotate_left(subsets.len() / 2);
            let rotated = sids(&intersect_subsets(&roster, &rotated_subsets));

            prop_assert_eq!(&forward, &reversed);
            prop_assert_eq!(&forward, &rotated);
        }

        #[test]
        fn range_label_parsing_is_total(label in ".{0,32}") {
            let mut record = student("1", "Ade", "Bo");
            record.gpa = Some(3.0);
            record.units_completed = Some(75.0);
            let _ = matches_gpa(&[label.clone()], &record);
            let _ = matches_units(&[label], &record);
        }
    }
}
