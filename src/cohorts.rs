use uuid::Uuid;

use crate::criteria::{CategoryValue, FilterCategory, FilterCriteria};
use crate::error::OracleError;
use crate::models::{SortDirection, SortKey, StudentRecord};
use crate::predicates::run_search;
use crate::sorting;

/// Names longer than this are truncated at creation, matching the live
/// system's column limit.
pub const MAX_NAME_LEN: usize = 255;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CohortKind {
    /// A saved filter search, re-evaluated when its filters change.
    Filtered,
    /// A hand-picked static list of students.
    Curated,
}

/// A named, owned, persisted search or curated list, with its cached match
/// count and member SIDs (kept in last-name order, the list view default).
#[derive(Debug, Clone)]
pub struct Cohort {
    pub id: Uuid,
    pub name: String,
    pub owner_uid: String,
    pub kind: CohortKind,
    pub criteria: FilterCriteria,
    pub member_count: usize,
    pub member_sids: Vec<String>,
    deleted: bool,
}

/// Tracks the cohorts and curated groups created during a verification run.
///
/// Name uniqueness is case-sensitive, scoped per owner, and spans both kinds;
/// only non-deleted entities count, so deleting a cohort frees its name.
#[derive(Debug, Default)]
pub struct CohortRegistry {
    cohorts: Vec<Cohort>,
}

impl CohortRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn create_filtered(
        &mut self,
        name: &str,
        owner_uid: &str,
        criteria: FilterCriteria,
        roster: &[StudentRecord],
        advisor_uid: &str,
    ) -> Result<Uuid, OracleError> {
        let name = self.claim_name(name, owner_uid)?;
        let mut cohort = Cohort {
            id: Uuid::new_v4(),
            name,
            owner_uid: owner_uid.to_owned(),
            kind: CohortKind::Filtered,
            criteria,
            member_count: 0,
            member_sids: Vec::new(),
            deleted: false,
        };
        refresh_members(&mut cohort, roster, advisor_uid)?;
        let id = cohort.id;
        self.cohorts.push(cohort);
        Ok(id)
    }

    pub fn create_curated(
        &mut self,
        name: &str,
        owner_uid: &str,
        member_sids: Vec<String>,
    ) -> Result<Uuid, OracleError> {
        let name = self.claim_name(name, owner_uid)?;
        let id = Uuid::new_v4();
        self.cohorts.push(Cohort {
            id,
            name,
            owner_uid: owner_uid.to_owned(),
            kind: CohortKind::Curated,
            criteria: FilterCriteria::default(),
            member_count: member_sids.len(),
            member_sids,
            deleted: false,
        });
        Ok(id)
    }

    pub fn get(&self, id: Uuid) -> Option<&Cohort> {
        self.cohorts.iter().find(|c| c.id == id && !c.deleted)
    }

    /// Renames a cohort in place; its identity never changes.
    pub fn rename(&mut self, id: Uuid, new_name: &str) -> Result<(), OracleError> {
        let truncated = truncate_name(new_name);
        let owner_uid = self
            .get(id)
            .ok_or(OracleError::UnknownCohort { id })?
            .owner_uid
            .clone();
        if self.name_taken(&owner_uid, &truncated, Some(id)) {
            return Err(OracleError::DuplicateCohortName { name: truncated });
        }
        self.cohort_mut(id)?.name = truncated;
        Ok(())
    }

    pub fn delete(&mut self, id: Uuid) -> Result<(), OracleError> {
        self.cohort_mut(id)?.deleted = true;
        Ok(())
    }

    /// Replaces one category's value and re-evaluates the cached members.
    pub fn edit_filter(
        &mut self,
        id: Uuid,
        category: FilterCategory,
        value: CategoryValue,
        roster: &[StudentRecord],
        advisor_uid: &str,
    ) -> Result<(), OracleError> {
        let cohort = self.cohort_mut(id)?;
        cohort.criteria.set_value(category, value)?;
        refresh_members(cohort, roster, advisor_uid)
    }

    /// Removes one filter row and re-evaluates the cached members.
    pub fn remove_filter(
        &mut self,
        id: Uuid,
        category: FilterCategory,
        roster: &[StudentRecord],
        advisor_uid: &str,
    ) -> Result<(), OracleError> {
        let cohort = self.cohort_mut(id)?;
        cohort.criteria.clear(category);
        refresh_members(cohort, roster, advisor_uid)
    }

    pub fn add_to_curated(
        &mut self,
        id: Uuid,
        sids: &[String],
    ) -> Result<(), OracleError> {
        let cohort = self.curated_mut(id)?;
        for sid in sids {
            if !cohort.member_sids.contains(sid) {
                cohort.member_sids.push(sid.clone());
            }
        }
        cohort.member_count = cohort.member_sids.len();
        Ok(())
    }

    pub fn remove_from_curated(&mut self, id: Uuid, sid: &str) -> Result<(), OracleError> {
        let cohort = self.curated_mut(id)?;
        cohort.member_sids.retain(|s| s != sid);
        cohort.member_count = cohort.member_sids.len();
        Ok(())
    }

    pub fn owned_by<'a>(&'a self, owner_uid: &'a str) -> impl Iterator<Item = &'a Cohort> {
        self.cohorts
            .iter()
            .filter(move |c| !c.deleted && c.owner_uid == owner_uid)
    }

    fn claim_name(&self, name: &str, owner_uid: &str) -> Result<String, OracleError> {
        let truncated = truncate_name(name);
        if self.name_taken(owner_uid, &truncated, None) {
            return Err(OracleError::DuplicateCohortName { name: truncated });
        }
        Ok(truncated)
    }

    fn name_taken(&self, owner_uid: &str, name: &str, excluding: Option<Uuid>) -> bool {
        self.cohorts.iter().any(|c| {
            !c.deleted && c.owner_uid == owner_uid && c.name == name && Some(c.id) != excluding
        })
    }

    fn cohort_mut(&mut self, id: Uuid) -> Result<&mut Cohort, OracleError> {
        self.cohorts
            .iter_mut()
            .find(|c| c.id == id && !c.deleted)
            .ok_or(OracleError::UnknownCohort { id })
    }

    fn curated_mut(&mut self, id: Uuid) -> Result<&mut Cohort, OracleError> {
        let cohort = self.cohort_mut(id)?;
        if cohort.kind != CohortKind::Curated {
            return Err(OracleError::NotCurated {
                name: cohort.name.clone(),
            });
        }
        Ok(cohort)
    }
}

fn truncate_name(name: &str) -> String {
    name.chars().take(MAX_NAME_LEN).collect()
}

fn refresh_members(
    cohort: &mut Cohort,
    roster: &[StudentRecord],
    advisor_uid: &str,
) -> Result<(), OracleError> {
    let outcome = run_search(&cohort.criteria, roster, advisor_uid)?;
    cohort.member_sids = sorting::expected_sids(
        outcome.members(),
        SortKey::LastName,
        SortDirection::Ascending,
    );
    cohort.member_count = cohort.member_sids.len();
    Ok(())
}
