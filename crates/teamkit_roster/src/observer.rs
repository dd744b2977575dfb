//! Run observer side-channel.
//!
//! `generate_teams` reports progress through a [`RunObserver`] instead of
//! logging directly, so callers pick where diagnostics go.

use std::path::Path;

use teamkit_io_xlsx::SpecXlsxReport;

use crate::report::ReportRoster;
use crate::spec::SpecTeam;

/// Receiver of run progress events. Every method defaults to a no-op.
pub trait RunObserver {
    /// Called once the roster sheet has been read.
    fn on_roster_read(&self, _roster: &ReportRoster) {}

    /// Called after partitioning with the effective team size.
    fn on_teams_created(&self, _teams: &[SpecTeam], _team_size: usize) {}

    /// Called after the output workbook has been saved.
    fn on_teams_written(&self, _path: &Path, _cnt_teams: usize, _report: &SpecXlsxReport) {}
}

/// Discards every event.
#[derive(Debug, Clone, Copy, Default)]
pub struct NoopRunObserver;

impl RunObserver for NoopRunObserver {}

/// Forwards events to the `log` facade.
#[derive(Debug, Clone, Copy, Default)]
pub struct LogRunObserver;

impl RunObserver for LogRunObserver {
    fn on_roster_read(&self, roster: &ReportRoster) {
        log::info!("{roster}");
        for c_warning in &roster.warnings {
            log::warn!("{c_warning}");
        }
    }

    fn on_teams_created(&self, teams: &[SpecTeam], team_size: usize) {
        let cnt_students: usize = teams.iter().map(SpecTeam::len).sum();
        log::info!(
            "Created {} teams from {} students (team size: {})",
            teams.len(),
            cnt_students,
            team_size
        );
        for team in teams {
            log::debug!("{}: {} students", team.name, team.len());
        }
    }

    fn on_teams_written(&self, path: &Path, cnt_teams: usize, report: &SpecXlsxReport) {
        log::info!("Wrote {} teams to {}", cnt_teams, path.display());
        for c_warning in &report.warnings {
            log::warn!("{c_warning}");
        }
    }
}
