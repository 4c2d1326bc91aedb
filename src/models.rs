use clap::ValueEnum;
use serde::{Deserialize, Serialize};

/// Academic levels in their fixed display order. The ordinal order drives the
/// level sort, not the alphabetic order of the labels.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Serialize, Deserialize)]
pub enum Level {
    Freshman,
    Sophomore,
    Junior,
    Senior,
    Graduate,
}

impl Level {
    pub fn parse(label: &str) -> Option<Level> {
        match label {
            "Freshman" => Some(Level::Freshman),
            "Sophomore" => Some(Level::Sophomore),
            "Junior" => Some(Level::Junior),
            "Senior" => Some(Level::Senior),
            "Graduate" => Some(Level::Graduate),
            _ => None,
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            Level::Freshman => "Freshman",
            Level::Sophomore => "Sophomore",
            Level::Junior => "Junior",
            Level::Senior => "Senior",
            Level::Graduate => "Graduate",
        }
    }
}

/// One advisor-to-student assignment under a specific academic plan.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AdvisorPlan {
    pub advisor_uid: String,
    pub plan_code: String,
}

/// A student row from the searchable fixture data. Sortable name variants are
/// pre-normalized upstream and may differ from the display names.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct StudentRecord {
    pub sid: String,
    pub first_name: String,
    pub last_name: String,
    pub first_name_sortable: String,
    pub last_name_sortable: String,
    pub gpa: Option<f64>,
    pub level: Option<Level>,
    pub units_completed: Option<f64>,
    #[serde(default)]
    pub term_units: Option<f64>,
    #[serde(default)]
    pub majors: Vec<String>,
    #[serde(default)]
    pub transfer_student: bool,
    #[serde(default)]
    pub expected_grad_term: Option<String>,
    #[serde(default)]
    pub gender: Option<String>,
    #[serde(default)]
    pub advisor_plans: Vec<AdvisorPlan>,
    #[serde(default)]
    pub alert_count: u32,

    // CoE
    #[serde(default)]
    pub coe_advisor_uid: Option<String>,
    #[serde(default)]
    pub ethnicity_code: Option<String>,
    #[serde(default)]
    pub underrepresented_minority: bool,
    #[serde(default)]
    pub coe_gender: Option<String>,
    #[serde(default)]
    pub inactive_coe: bool,
    #[serde(default)]
    pub probation_coe: bool,
    #[serde(default)]
    pub prep: bool,
    #[serde(default)]
    pub prep_eligible: bool,
    #[serde(default)]
    pub t_prep: bool,
    #[serde(default)]
    pub t_prep_eligible: bool,

    // ASC
    #[serde(default)]
    pub active_asc: bool,
    #[serde(default)]
    pub intensive_asc: bool,
    #[serde(default)]
    pub squad_names: Vec<String>,
}

/// Advising units. Each department exposes a different subset of filter
/// categories; scoping happens once, when criteria are built.
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum, Serialize, Deserialize)]
pub enum Department {
    Asc,
    Coe,
    Physics,
    Admin,
}

/// Sort keys offered by the cohort list views.
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum SortKey {
    FirstName,
    LastName,
    Name,
    Sid,
    Gpa,
    Level,
    Major,
    Team,
    UnitsCompleted,
    TermUnits,
    GradTerm,
    AlertCount,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum SortDirection {
    Ascending,
    Descending,
}
