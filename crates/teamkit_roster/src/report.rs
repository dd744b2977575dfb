//! Roster, statistics and run report models.

use std::collections::BTreeMap;
use std::fmt;
use std::path::PathBuf;

use crate::spec::SpecStudent;

/// Result of reading one roster sheet.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ReportRoster {
    /// Accepted students in source row order.
    pub students: Vec<SpecStudent>,
    /// Data rows inspected (header excluded).
    pub cnt_rows_scanned: u64,
    /// Data rows dropped for a blank id or name, or for being absent.
    pub cnt_rows_skipped: u64,
    /// Non-fatal findings such as duplicate ids.
    pub warnings: Vec<String>,
}

impl ReportRoster {
    /// Number of accepted students.
    pub fn student_count(&self) -> usize {
        self.students.len()
    }

    /// Whether no row qualified.
    pub fn is_empty(&self) -> bool {
        self.students.is_empty()
    }

    /// Human-readable one-line summary.
    pub fn format(&self, prefix: &str) -> String {
        format!(
            "{prefix} students={} scanned={} skipped={} warnings={}",
            self.student_count(),
            self.cnt_rows_scanned,
            self.cnt_rows_skipped,
            self.warnings.len()
        )
    }
}

impl fmt::Display for ReportRoster {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.format("[ROSTER]"))
    }
}

/// Descriptive statistics over a non-empty list of teams.
#[derive(Debug, Clone, PartialEq)]
pub struct ReportTeamStatistics {
    /// Number of teams.
    pub cnt_teams: usize,
    /// Sum of team sizes.
    pub cnt_students: usize,
    /// Smallest team size.
    pub n_size_min: usize,
    /// Largest team size.
    pub n_size_max: usize,
    /// Arithmetic mean team size.
    pub n_size_mean: f64,
}

impl ReportTeamStatistics {
    /// Machine-readable counters.
    pub fn to_dict(&self) -> BTreeMap<String, f64> {
        let mut dict_stats = BTreeMap::new();
        dict_stats.insert("cnt_teams".to_string(), self.cnt_teams as f64);
        dict_stats.insert("cnt_students".to_string(), self.cnt_students as f64);
        dict_stats.insert("n_size_min".to_string(), self.n_size_min as f64);
        dict_stats.insert("n_size_max".to_string(), self.n_size_max as f64);
        dict_stats.insert("n_size_mean".to_string(), self.n_size_mean);
        dict_stats
    }
}

impl fmt::Display for ReportTeamStatistics {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "Team Statistics:\n\
             - Total Teams: {}\n\
             - Total Students: {}\n\
             - Min Team Size: {}\n\
             - Max Team Size: {}\n\
             - Average Team Size: {:.2}",
            self.cnt_teams, self.cnt_students, self.n_size_min, self.n_size_max, self.n_size_mean
        )
    }
}

/// Statistics outcome; `NoTeams` is the sentinel for an empty team list.
#[derive(Debug, Clone, PartialEq)]
pub enum EnumTeamStatistics {
    /// No team was produced.
    NoTeams,
    /// Statistics over at least one team.
    Summary(ReportTeamStatistics),
}

impl fmt::Display for EnumTeamStatistics {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::NoTeams => write!(f, "No teams created"),
            Self::Summary(report) => write!(f, "{report}"),
        }
    }
}

/// Result of one completed read, partition and write run.
#[derive(Debug, Clone, PartialEq)]
pub struct ReportRun {
    /// Students found in the source sheet.
    pub cnt_students: usize,
    /// Teams created and written.
    pub cnt_teams: usize,
    /// Written workbook.
    pub path_file_out: PathBuf,
    /// Team size statistics.
    pub statistics: EnumTeamStatistics,
    /// Non-fatal warnings from reading and writing.
    pub warnings: Vec<String>,
}

impl fmt::Display for ReportRun {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "[RUN] students={} teams={} out={} warnings={}",
            self.cnt_students,
            self.cnt_teams,
            self.path_file_out.display(),
            self.warnings.len()
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn statistics_render_multiline_layout() {
        let report = ReportTeamStatistics {
            cnt_teams: 3,
            cnt_students: 25,
            n_size_min: 5,
            n_size_max: 10,
            n_size_mean: 25.0 / 3.0,
        };
        assert_eq!(
            report.to_string(),
            "Team Statistics:\n- Total Teams: 3\n- Total Students: 25\n- Min Team Size: 5\n- Max Team Size: 10\n- Average Team Size: 8.33"
        );
        assert_eq!(report.to_dict()["cnt_students"], 25.0);
        assert_eq!(EnumTeamStatistics::NoTeams.to_string(), "No teams created");
    }

    #[test]
    fn roster_summary_line() {
        let report = ReportRoster {
            students: vec![SpecStudent::new("S1", "Ada")],
            cnt_rows_scanned: 3,
            cnt_rows_skipped: 2,
            warnings: vec![],
        };
        assert_eq!(
            report.to_string(),
            "[ROSTER] students=1 scanned=3 skipped=2 warnings=0"
        );
    }
}
