use uuid::Uuid;

/// Failure modes of the search oracle and the cohort registry.
///
/// Most category evaluations are total and cannot fail; the variants here are
/// the few places where bad input invalidates the whole computation rather
/// than a single record.
#[derive(Debug, thiserror::Error)]
pub enum OracleError {
    /// A COE gender criteria label other than Male/Female. The fixture data
    /// is corrupt and the scenario cannot produce a trustworthy result.
    #[error("unrecognized COE gender '{label}' in search criteria")]
    UnrecognizedCoeGender { label: String },

    /// The value kind (option list vs. toggle) does not fit the category.
    #[error("filter category '{category}' does not accept this value kind")]
    FilterValueKind { category: &'static str },

    /// Cohort and curated group names are unique per owner among non-deleted
    /// entities.
    #[error("'{name}' is already in use by another cohort or group")]
    DuplicateCohortName { name: String },

    #[error("no cohort with id {id}")]
    UnknownCohort { id: Uuid },

    /// Membership edits only apply to curated groups; filtered cohorts derive
    /// their members from their criteria.
    #[error("cohort '{name}' is not a curated group")]
    NotCurated { name: String },
}
