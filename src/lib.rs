//! Reference oracle for an academic-advising application's cohort search.
//!
//! Given an immutable roster of student records and a declarative filter
//! specification, the oracle computes the exact set of matching records and
//! the exact order the UI must display them under any supported sort key.
//! Every call is a pure function of its arguments: no I/O, no mutation of
//! inputs, no shared state between invocations.

pub mod cohorts;
pub mod criteria;
pub mod error;
pub mod ethnicity;
pub mod fixtures;
pub mod models;
pub mod predicates;
pub mod report;
pub mod sorting;

pub use cohorts::{Cohort, CohortKind, CohortRegistry};
pub use criteria::{CategoryValue, FilterCategory, FilterCriteria};
pub use error::OracleError;
pub use models::{Department, Level, SortDirection, SortKey, StudentRecord};
pub use predicates::{match_population, run_search, SearchOutcome};
