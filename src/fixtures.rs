use std::path::Path;

use anyhow::{anyhow, Context};
use serde::Deserialize;

use crate::criteria::FilterCriteria;
use crate::models::{AdvisorPlan, Level, StudentRecord};
use crate::predicates::OptionCatalog;

/// Loads a roster fixture. JSON carries the records verbatim; CSV is the flat
/// export format where list fields are `|`-separated and advisor plans are
/// `uid:plan` pairs.
pub fn load_roster(path: &Path) -> anyhow::Result<Vec<StudentRecord>> {
    if path.extension().is_some_and(|ext| ext == "csv") {
        load_roster_csv(path)
    } else {
        let data = std::fs::read_to_string(path)
            .with_context(|| format!("failed to read roster {}", path.display()))?;
        serde_json::from_str(&data)
            .with_context(|| format!("invalid roster JSON in {}", path.display()))
    }
}

pub fn load_criteria(path: &Path) -> anyhow::Result<FilterCriteria> {
    let data = std::fs::read_to_string(path)
        .with_context(|| format!("failed to read criteria {}", path.display()))?;
    serde_json::from_str(&data)
        .with_context(|| format!("invalid criteria JSON in {}", path.display()))
}

pub fn load_catalog(path: &Path) -> anyhow::Result<OptionCatalog> {
    let data = std::fs::read_to_string(path)
        .with_context(|| format!("failed to read option catalog {}", path.display()))?;
    serde_json::from_str(&data)
        .with_context(|| format!("invalid option catalog JSON in {}", path.display()))
}

/// Reads SIDs scraped from the UI, one per line.
pub fn load_sid_list(path: &Path) -> anyhow::Result<Vec<String>> {
    let data = std::fs::read_to_string(path)
        .with_context(|| format!("failed to read SID list {}", path.display()))?;
    Ok(data
        .lines()
        .map(str::trim)
        .filter(|line| !line.is_empty())
        .map(str::to_owned)
        .collect())
}

fn load_roster_csv(path: &Path) -> anyhow::Result<Vec<StudentRecord>> {
    #[derive(Deserialize)]
    struct RosterRow {
        sid: String,
        first_name: String,
        last_name: String,
        first_name_sortable: Option<String>,
        last_name_sortable: Option<String>,
        gpa: Option<f64>,
        level: Option<String>,
        units_completed: Option<f64>,
        term_units: Option<f64>,
        majors: Option<String>,
        transfer_student: Option<bool>,
        expected_grad_term: Option<String>,
        gender: Option<String>,
        advisor_plans: Option<String>,
        alert_count: Option<u32>,
        coe_advisor_uid: Option<String>,
        ethnicity_code: Option<String>,
        underrepresented_minority: Option<bool>,
        coe_gender: Option<String>,
        inactive_coe: Option<bool>,
        probation_coe: Option<bool>,
        prep: Option<bool>,
        prep_eligible: Option<bool>,
        t_prep: Option<bool>,
        t_prep_eligible: Option<bool>,
        active_asc: Option<bool>,
        intensive_asc: Option<bool>,
        squad_names: Option<String>,
    }

    let mut reader = csv::Reader::from_path(path)
        .with_context(|| format!("failed to open roster CSV {}", path.display()))?;
    let mut roster = Vec::new();

    for result in reader.deserialize::<RosterRow>() {
        let row = result.context("malformed roster CSV row")?;
        let level = row
            .level
            .as_deref()
            .filter(|l| !l.is_empty())
            .map(|l| Level::parse(l).ok_or_else(|| anyhow!("unknown level '{l}'")))
            .transpose()?;
        roster.push(StudentRecord {
            level,
            first_name_sortable: row
                .first_name_sortable
                .unwrap_or_else(|| row.first_name.to_lowercase()),
            last_name_sortable: row
                .last_name_sortable
                .unwrap_or_else(|| row.last_name.to_lowercase()),
            sid: row.sid,
            first_name: row.first_name,
            last_name: row.last_name,
            gpa: row.gpa,
            units_completed: row.units_completed,
            term_units: row.term_units,
            majors: split_list(row.majors.as_deref()),
            transfer_student: row.transfer_student.unwrap_or_default(),
            expected_grad_term: row.expected_grad_term.filter(|t| !t.is_empty()),
            gender: row.gender.filter(|g| !g.is_empty()),
            advisor_plans: split_plans(row.advisor_plans.as_deref())?,
            alert_count: row.alert_count.unwrap_or_default(),
            coe_advisor_uid: row.coe_advisor_uid.filter(|a| !a.is_empty()),
            ethnicity_code: row.ethnicity_code.filter(|e| !e.is_empty()),
            underrepresented_minority: row.underrepresented_minority.unwrap_or_default(),
            coe_gender: row.coe_gender.filter(|g| !g.is_empty()),
            inactive_coe: row.inactive_coe.unwrap_or_default(),
            probation_coe: row.probation_coe.unwrap_or_default(),
            prep: row.prep.unwrap_or_default(),
            prep_eligible: row.prep_eligible.unwrap_or_default(),
            t_prep: row.t_prep.unwrap_or_default(),
            t_prep_eligible: row.t_prep_eligible.unwrap_or_default(),
            active_asc: row.active_asc.unwrap_or_default(),
            intensive_asc: row.intensive_asc.unwrap_or_default(),
            squad_names: split_list(row.squad_names.as_deref()),
        });
    }

    Ok(roster)
}

fn split_list(value: Option<&str>) -> Vec<String> {
    value
        .unwrap_or_default()
        .split('|')
        .map(str::trim)
        .filter(|item| !item.is_empty())
        .map(str::to_owned)
        .collect()
}

fn split_plans(value: Option<&str>) -> anyhow::Result<Vec<AdvisorPlan>> {
    value
        .unwrap_or_default()
        .split('|')
        .map(str::trim)
        .filter(|pair| !pair.is_empty())
        .map(|pair| {
            let (advisor_uid, plan_code) = pair
                .split_once(':')
                .ok_or_else(|| anyhow!("advisor plan '{pair}' is not in uid:plan form"))?;
            Ok(AdvisorPlan {
                advisor_uid: advisor_uid.to_owned(),
                plan_code: plan_code.to_owned(),
            })
        })
        .collect()
}
