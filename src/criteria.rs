use serde::{Deserialize, Serialize};

use crate::error::OracleError;
use crate::models::Department;

/// The closed set of filter categories. This replaces the live system's
/// dynamic field enumeration with an explicit table so the category set is
/// statically checkable.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum FilterCategory {
    // Global
    GpaRanges,
    Levels,
    UnitRanges,
    Majors,
    LastNameRange,
    TransferStudent,
    GradTerms,
    Genders,
    MyStudentPlans,
    // CoE
    Advisors,
    Ethnicities,
    CoeGenders,
    UnderrepresentedMinority,
    Preps,
    InactiveCoe,
    ProbationCoe,
    // ASC
    InactiveAsc,
    IntensiveAsc,
    Teams,
}

impl FilterCategory {
    pub const ALL: [FilterCategory; 19] = [
        FilterCategory::GpaRanges,
        FilterCategory::Levels,
        FilterCategory::UnitRanges,
        FilterCategory::Majors,
        FilterCategory::LastNameRange,
        FilterCategory::TransferStudent,
        FilterCategory::GradTerms,
        FilterCategory::Genders,
        FilterCategory::MyStudentPlans,
        FilterCategory::Advisors,
        FilterCategory::Ethnicities,
        FilterCategory::CoeGenders,
        FilterCategory::UnderrepresentedMinority,
        FilterCategory::Preps,
        FilterCategory::InactiveCoe,
        FilterCategory::ProbationCoe,
        FilterCategory::InactiveAsc,
        FilterCategory::IntensiveAsc,
        FilterCategory::Teams,
    ];

    /// The label shown on the filter row in the UI.
    pub fn label(self) -> &'static str {
        match self {
            FilterCategory::GpaRanges => "GPA",
            FilterCategory::Levels => "Level",
            FilterCategory::UnitRanges => "Units Completed",
            FilterCategory::Majors => "Major",
            FilterCategory::LastNameRange => "Last Name",
            FilterCategory::TransferStudent => "Transfer Student",
            FilterCategory::GradTerms => "Expected Graduation Term",
            FilterCategory::Genders => "Gender",
            FilterCategory::MyStudentPlans => "My Students",
            FilterCategory::Advisors => "Advisor (COE)",
            FilterCategory::Ethnicities => "Ethnicity (COE)",
            FilterCategory::CoeGenders => "Gender (COE)",
            FilterCategory::UnderrepresentedMinority => "Underrepresented Minority",
            FilterCategory::Preps => "PREP",
            FilterCategory::InactiveCoe => "Inactive (COE)",
            FilterCategory::ProbationCoe => "Probation",
            FilterCategory::InactiveAsc => "Inactive (ASC)",
            FilterCategory::IntensiveAsc => "Intensive",
            FilterCategory::Teams => "Team",
        }
    }

    fn is_coe_only(self) -> bool {
        matches!(
            self,
            FilterCategory::Advisors
                | FilterCategory::Ethnicities
                | FilterCategory::CoeGenders
                | FilterCategory::UnderrepresentedMinority
                | FilterCategory::Preps
                | FilterCategory::InactiveCoe
                | FilterCategory::ProbationCoe
        )
    }

    fn is_asc_only(self) -> bool {
        matches!(
            self,
            FilterCategory::InactiveAsc | FilterCategory::IntensiveAsc | FilterCategory::Teams
        )
    }

    /// Whether a department's advisors can reach this category at all.
    pub fn available_in(self, dept: Department) -> bool {
        match dept {
            Department::Admin => true,
            Department::Asc => !self.is_coe_only(),
            Department::Coe => !self.is_asc_only(),
            Department::Physics => !self.is_coe_only() && !self.is_asc_only(),
        }
    }
}

/// A single category's value, in the shape that category accepts.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CategoryValue {
    /// Selected options for a multi-select category.
    Options(Vec<String>),
    /// The two-initial text input of the last-name range.
    Text(String),
    /// An on/off category with no sub-options.
    Toggle(bool),
}

/// What to search for: one optional value per filter category.
///
/// An unset category matches the whole population. A category set to an empty
/// option list is how callers signal "cleared"; it is equivalent to unset
/// when intersecting.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct FilterCriteria {
    pub gpa_ranges: Option<Vec<String>>,
    pub levels: Option<Vec<String>>,
    pub unit_ranges: Option<Vec<String>>,
    pub majors: Option<Vec<String>>,
    pub last_name_range: Option<String>,
    pub transfer_student: bool,
    pub grad_terms: Option<Vec<String>>,
    pub genders: Option<Vec<String>>,
    pub my_student_plans: Option<Vec<String>>,
    pub advisors: Option<Vec<String>>,
    pub ethnicities: Option<Vec<String>>,
    pub coe_genders: Option<Vec<String>>,
    pub underrepresented_minority: bool,
    pub preps: Option<Vec<String>>,
    pub inactive_coe: bool,
    pub probation_coe: bool,
    pub inactive_asc: bool,
    pub intensive_asc: bool,
    pub teams: Option<Vec<String>>,
}

impl FilterCriteria {
    /// Scopes raw criteria to a department. Categories the department does
    /// not expose are nulled here, exactly once; the evaluator never branches
    /// on department again.
    pub fn build(raw: FilterCriteria, dept: Department) -> FilterCriteria {
        let mut scoped = raw;
        for category in FilterCategory::ALL {
            if !category.available_in(dept) {
                scoped.clear(category);
            }
        }
        scoped
    }

    /// The category's active value, or `None` if the category is unset,
    /// cleared, or toggled off.
    pub fn value(&self, category: FilterCategory) -> Option<CategoryValue> {
        fn options(list: &Option<Vec<String>>) -> Option<CategoryValue> {
            list.as_deref()
                .filter(|v| !v.is_empty())
                .map(|v| CategoryValue::Options(v.to_vec()))
        }
        fn toggle(flag: bool) -> Option<CategoryValue> {
            flag.then_some(CategoryValue::Toggle(true))
        }

        match category {
            FilterCategory::GpaRanges => options(&self.gpa_ranges),
            FilterCategory::Levels => options(&self.levels),
            FilterCategory::UnitRanges => options(&self.unit_ranges),
            FilterCategory::Majors => options(&self.majors),
            FilterCategory::LastNameRange => self
                .last_name_range
                .as_deref()
                .filter(|s| !s.is_empty())
                .map(|s| CategoryValue::Text(s.to_owned())),
            FilterCategory::TransferStudent => toggle(self.transfer_student),
            FilterCategory::GradTerms => options(&self.grad_terms),
            FilterCategory::Genders => options(&self.genders),
            FilterCategory::MyStudentPlans => options(&self.my_student_plans),
            FilterCategory::Advisors => options(&self.advisors),
            FilterCategory::Ethnicities => options(&self.ethnicities),
            FilterCategory::CoeGenders => options(&self.coe_genders),
            FilterCategory::UnderrepresentedMinority => toggle(self.underrepresented_minority),
            FilterCategory::Preps => options(&self.preps),
            FilterCategory::InactiveCoe => toggle(self.inactive_coe),
            FilterCategory::ProbationCoe => toggle(self.probation_coe),
            FilterCategory::InactiveAsc => toggle(self.inactive_asc),
            FilterCategory::IntensiveAsc => toggle(self.intensive_asc),
            FilterCategory::Teams => options(&self.teams),
        }
    }

    /// Replaces one category's value, as a filter-row edit does.
    pub fn set_value(
        &mut self,
        category: FilterCategory,
        value: CategoryValue,
    ) -> Result<(), OracleError> {
        use CategoryValue::{Options, Text, Toggle};
        match (category, value) {
            (FilterCategory::GpaRanges, Options(v)) => self.gpa_ranges = Some(v),
            (FilterCategory::Levels, Options(v)) => self.levels = Some(v),
            (FilterCategory::UnitRanges, Options(v)) => self.unit_ranges = Some(v),
            (FilterCategory::Majors, Options(v)) => self.majors = Some(v),
            (FilterCategory::LastNameRange, Text(s)) => self.last_name_range = Some(s),
            (FilterCategory::TransferStudent, Toggle(b)) => self.transfer_student = b,
            (FilterCategory::GradTerms, Options(v)) => self.grad_terms = Some(v),
            (FilterCategory::Genders, Options(v)) => self.genders = Some(v),
            (FilterCategory::MyStudentPlans, Options(v)) => self.my_student_plans = Some(v),
            (FilterCategory::Advisors, Options(v)) => self.advisors = Some(v),
            (FilterCategory::Ethnicities, Options(v)) => self.ethnicities = Some(v),
            (FilterCategory::CoeGenders, Options(v)) => self.coe_genders = Some(v),
            (FilterCategory::UnderrepresentedMinority, Toggle(b)) => {
                self.underrepresented_minority = b
            }
            (FilterCategory::Preps, Options(v)) => self.preps = Some(v),
            (FilterCategory::InactiveCoe, Toggle(b)) => self.inactive_coe = b,
            (FilterCategory::ProbationCoe, Toggle(b)) => self.probation_coe = b,
            (FilterCategory::InactiveAsc, Toggle(b)) => self.inactive_asc = b,
            (FilterCategory::IntensiveAsc, Toggle(b)) => self.intensive_asc = b,
            (FilterCategory::Teams, Options(v)) => self.teams = Some(v),
            (category, _) => {
                return Err(OracleError::FilterValueKind {
                    category: category.label(),
                })
            }
        }
        Ok(())
    }

    /// Unsets one category, as removing a filter row does.
    pub fn clear(&mut self, category: FilterCategory) {
        match category {
            FilterCategory::GpaRanges => self.gpa_ranges = None,
            FilterCategory::Levels => self.levels = None,
            FilterCategory::UnitRanges => self.unit_ranges = None,
            FilterCategory::Majors => self.majors = None,
            FilterCategory::LastNameRange => self.last_name_range = None,
            FilterCategory::TransferStudent => self.transfer_student = false,
            FilterCategory::GradTerms => self.grad_terms = None,
            FilterCategory::Genders => self.genders = None,
            FilterCategory::MyStudentPlans => self.my_student_plans = None,
            FilterCategory::Advisors => self.advisors = None,
            FilterCategory::Ethnicities => self.ethnicities = None,
            FilterCategory::CoeGenders => self.coe_genders = None,
            FilterCategory::UnderrepresentedMinority => self.underrepresented_minority = false,
            FilterCategory::Preps => self.preps = None,
            FilterCategory::InactiveCoe => self.inactive_coe = false,
            FilterCategory::ProbationCoe => self.probation_coe = false,
            FilterCategory::InactiveAsc => self.inactive_asc = false,
            FilterCategory::IntensiveAsc => self.intensive_asc = false,
            FilterCategory::Teams => self.teams = None,
        }
    }

    /// Categories that will actually constrain a search.
    pub fn active_categories(&self) -> Vec<FilterCategory> {
        FilterCategory::ALL
            .into_iter()
            .filter(|c| self.value(*c).is_some())
            .collect()
    }

    pub fn is_empty(&self) -> bool {
        self.active_categories().is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn fully_populated() -> FilterCriteria {
        let mut raw = FilterCriteria::default();
        for category in FilterCategory::ALL {
            let value = match category {
                FilterCategory::LastNameRange => CategoryValue::Text("A M".to_owned()),
                FilterCategory::TransferStudent
                | FilterCategory::UnderrepresentedMinority
                | FilterCategory::InactiveCoe
                | FilterCategory::ProbationCoe
                | FilterCategory::InactiveAsc
                | FilterCategory::IntensiveAsc => CategoryValue::Toggle(true),
                _ => CategoryValue::Options(vec!["x".to_owned()]),
            };
            raw.set_value(category, value).unwrap();
        }
        raw
    }

    #[test]
    fn asc_profile_nulls_every_coe_category() {
        let scoped = FilterCriteria::build(fully_populated(), Department::Asc);
        for category in FilterCategory::ALL {
            if category.is_coe_only() {
                assert!(scoped.value(category).is_none(), "{:?}", category);
            } else {
                assert!(scoped.value(category).is_some(), "{:?}", category);
            }
        }
    }

    #[test]
    fn coe_profile_nulls_every_asc_category() {
        let scoped = FilterCriteria::build(fully_populated(), Department::Coe);
        for category in FilterCategory::ALL {
            if category.is_asc_only() {
                assert!(scoped.value(category).is_none(), "{:?}", category);
            } else {
                assert!(scoped.value(category).is_some(), "{:?}", category);
            }
        }
    }

    #[test]
    fn physics_profile_keeps_only_global_categories() {
        let scoped = FilterCriteria::build(fully_populated(), Department::Physics);
        assert_eq!(scoped.active_categories().len(), 9);
    }

    #[test]
    fn admin_profile_keeps_everything() {
        let scoped = FilterCriteria::build(fully_populated(), Department::Admin);
        assert_eq!(scoped.active_categories().len(), FilterCategory::ALL.len());
    }

    #[test]
    fn cleared_list_counts_as_unset() {
        let mut criteria = FilterCriteria::default();
        criteria.majors = Some(vec![]);
        assert!(criteria.is_empty());
    }

    #[test]
    fn value_kind_mismatch_is_rejected() {
        let mut criteria = FilterCriteria::default();
        let err = criteria
            .set_value(FilterCategory::GpaRanges, CategoryValue::Toggle(true))
            .unwrap_err();
        assert!(matches!(err, OracleError::FilterValueKind { .. }));
    }
}
