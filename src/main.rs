use std::path::PathBuf;

use anyhow::{bail, Context};
use chrono::Utc;
use clap::{Parser, Subcommand};
use tracing_subscriber::EnvFilter;

use cohort_search_oracle::criteria::FilterCriteria;
use cohort_search_oracle::models::{Department, SortDirection, SortKey, StudentRecord};
use cohort_search_oracle::predicates::{self, SearchOutcome};
use cohort_search_oracle::{fixtures, report, sorting};

#[derive(Parser)]
#[command(name = "cohort-search-oracle")]
#[command(about = "Reference oracle for the advising app's cohort search", long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Compute the students a filter specification should match
    Search {
        #[arg(long)]
        roster: PathBuf,
        #[arg(long)]
        criteria: PathBuf,
        /// UID of the advisor running the search
        #[arg(long)]
        advisor: String,
        #[arg(long, value_enum)]
        dept: Department,
        /// Currently available majors and teams, for criteria pruning
        #[arg(long)]
        catalog: Option<PathBuf>,
        #[arg(long, value_enum, default_value = "last-name")]
        sort: SortKey,
        #[arg(long, value_enum, default_value = "ascending")]
        direction: SortDirection,
    },
    /// Order an entire roster under a sort key
    Sort {
        #[arg(long)]
        roster: PathBuf,
        #[arg(long, value_enum)]
        sort: SortKey,
        #[arg(long, value_enum, default_value = "ascending")]
        direction: SortDirection,
    },
    /// Compare the oracle's expectation against SIDs scraped from the UI
    Verify {
        #[arg(long)]
        roster: PathBuf,
        #[arg(long)]
        criteria: PathBuf,
        #[arg(long)]
        advisor: String,
        #[arg(long, value_enum)]
        dept: Department,
        #[arg(long)]
        catalog: Option<PathBuf>,
        #[arg(long, value_enum, default_value = "last-name")]
        sort: SortKey,
        #[arg(long, value_enum, default_value = "ascending")]
        direction: SortDirection,
        /// File of SIDs visible in the UI, one per line
        #[arg(long)]
        actual: PathBuf,
    },
    /// Generate a markdown report of the expected search results
    Report {
        #[arg(long)]
        roster: PathBuf,
        #[arg(long)]
        criteria: PathBuf,
        #[arg(long)]
        advisor: String,
        #[arg(long, value_enum)]
        dept: Department,
        #[arg(long)]
        catalog: Option<PathBuf>,
        #[arg(long, default_value = "report.md")]
        out: PathBuf,
    },
}

fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .init();
    let cli = Cli::parse();

    match cli.command {
        Commands::Search {
            roster,
            criteria,
            advisor,
            dept,
            catalog,
            sort,
            direction,
        } => {
            let (roster, criteria) = prepare(&roster, &criteria, dept, catalog.as_deref())?;
            let outcome = predicates::run_search(&criteria, &roster, &advisor)?;
            match outcome {
                SearchOutcome::NotPerformed => {
                    println!("No search performed; expected count is 0.");
                }
                SearchOutcome::Performed { ref members } => {
                    println!("{} students match.", members.len());
                    for sid in sorting::expected_sids(members, sort, direction) {
                        println!("{sid}");
                    }
                }
            }
        }
        Commands::Sort {
            roster,
            sort,
            direction,
        } => {
            let roster = fixtures::load_roster(&roster)?;
            let members: Vec<&StudentRecord> = roster.iter().collect();
            for sid in sorting::expected_sids(&members, sort, direction) {
                println!("{sid}");
            }
        }
        Commands::Verify {
            roster,
            criteria,
            advisor,
            dept,
            catalog,
            sort,
            direction,
            actual,
        } => {
            let (roster, criteria) = prepare(&roster, &criteria, dept, catalog.as_deref())?;
            let outcome = predicates::run_search(&criteria, &roster, &advisor)?;
            let expected = sorting::expected_sids(outcome.members(), sort, direction);
            let actual = fixtures::load_sid_list(&actual)?;

            let missing: Vec<&String> =
                expected.iter().filter(|s| !actual.contains(*s)).collect();
            let unexpected: Vec<&String> =
                actual.iter().filter(|s| !expected.contains(*s)).collect();
            if !missing.is_empty() || !unexpected.is_empty() {
                println!("Expected but not present: {missing:?}");
                println!("Present but not expected: {unexpected:?}");
                bail!("the UI membership does not match the oracle");
            }
            if expected != actual {
                println!("Expected {expected:?}");
                println!("but got  {actual:?}");
                bail!("the UI ordering does not match the oracle");
            }
            println!("UI results match the oracle ({} students).", expected.len());
        }
        Commands::Report {
            roster,
            criteria,
            advisor,
            dept,
            catalog,
            out,
        } => {
            let (roster, criteria) = prepare(&roster, &criteria, dept, catalog.as_deref())?;
            let outcome = predicates::run_search(&criteria, &roster, &advisor)?;
            let report = report::build_report(&criteria, &outcome, Utc::now().date_naive());
            std::fs::write(&out, report)
                .with_context(|| format!("failed to write {}", out.display()))?;
            println!("Report written to {}.", out.display());
        }
    }

    Ok(())
}

fn prepare(
    roster_path: &std::path::Path,
    criteria_path: &std::path::Path,
    dept: Department,
    catalog_path: Option<&std::path::Path>,
) -> anyhow::Result<(Vec<StudentRecord>, FilterCriteria)> {
    let roster = fixtures::load_roster(roster_path)?;
    let raw = fixtures::load_criteria(criteria_path)?;
    let mut criteria = FilterCriteria::build(raw, dept);
    if let Some(path) = catalog_path {
        let catalog = fixtures::load_catalog(path)?;
        predicates::prune_unavailable(&mut criteria, &catalog);
    }
    Ok((roster, criteria))
}
