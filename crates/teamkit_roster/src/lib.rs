//! `teamkit_roster` v1:
//! Student roster ingestion, team partitioning and assignment output.
//!
//! Modules:
//! - `conf`      : defaults, labels and output header
//! - `spec`      : student/team models, options, outcomes and errors
//! - `coerce`    : raw cell to text normalization
//! - `reader`    : roster sheet ingestion
//! - `partition` : shuffle and fixed-size chunking
//! - `stats`     : team size statistics
//! - `report`    : roster, statistics and run reports
//! - `writer`    : `Teams` sheet rendering
//! - `observer`  : run progress side-channel
//! - `run`       : end-to-end `generate_teams`
pub mod coerce;
pub mod conf;
pub mod observer;
pub mod partition;
pub mod reader;
pub mod report;
pub mod run;
pub mod spec;
pub mod stats;
pub mod writer;

pub use coerce::{convert_cell_to_string, convert_cell_value_to_string, convert_number_to_string};
pub use conf::{
    C_SHEET_NAME_TEAMS, C_TEAM_NAME_PREFIX, N_TEAM_SIZE_DEFAULT, TUP_TEAM_SHEET_HEADER,
    derive_team_name,
};
pub use observer::{LogRunObserver, NoopRunObserver, RunObserver};
pub use partition::{
    flatten_team_assignments, shuffle_students, split_into_teams, split_into_teams_default,
};
pub use reader::{read_roster, read_roster_from_xlsx};
pub use report::{EnumTeamStatistics, ReportRoster, ReportRun, ReportTeamStatistics};
pub use run::generate_teams;
pub use spec::{
    EnumRunOutcome, SpecPartitionOptions, SpecRosterColumns, SpecRunOptions, SpecStudent,
    SpecStudentAssignment, SpecTeam, TeamGenError,
};
pub use stats::summarize_teams;
pub use writer::{derive_team_dataframe, write_teams_to_xlsx};

pub use teamkit_io_xlsx::{SpecXlsxReport, XlsxIoError};
