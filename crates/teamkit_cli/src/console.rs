//! Progress lines for the terminal, layered over log forwarding.

use std::cell::RefCell;
use std::io::Write;
use std::path::Path;

use teamkit_roster::{
    LogRunObserver, ReportRoster, ReportRun, RunObserver, SpecTeam, SpecXlsxReport,
};

pub struct ConsoleRunObserver<W: Write> {
    writer: RefCell<W>,
    observer_log: LogRunObserver,
}

impl<W: Write> ConsoleRunObserver<W> {
    pub fn new(writer: W) -> Self {
        Self {
            writer: RefCell::new(writer),
            observer_log: LogRunObserver,
        }
    }

    #[cfg(test)]
    pub fn into_inner(self) -> W {
        self.writer.into_inner()
    }

    fn print(&self, text: &str) {
        // Ignored: stdout may be closed.
        let _ = writeln!(self.writer.borrow_mut(), "{text}");
    }
}

impl<W: Write> RunObserver for ConsoleRunObserver<W> {
    fn on_roster_read(&self, roster: &ReportRoster) {
        self.observer_log.on_roster_read(roster);
        if !roster.is_empty() {
            self.print(&format!(
                "Found {} students in the Excel file",
                roster.student_count()
            ));
            self.print("Creating teams...");
        }
    }

    fn on_teams_created(&self, teams: &[SpecTeam], team_size: usize) {
        self.observer_log.on_teams_created(teams, team_size);
        self.print("Writing teams to Excel file...");
    }

    fn on_teams_written(&self, path: &Path, cnt_teams: usize, report: &SpecXlsxReport) {
        self.observer_log.on_teams_written(path, cnt_teams, report);
    }
}

/// Final success lines for a completed run.
pub fn format_run_summary(report: &ReportRun, if_stats: bool) -> String {
    let mut l_lines = vec![
        "✓ Successfully created team assignments!".to_string(),
        format!("✓ Output file: {}", report.path_file_out.display()),
        format!("✓ Created {} teams", report.cnt_teams),
    ];
    if if_stats {
        l_lines.push(String::new());
        l_lines.push(report.statistics.to_string());
    }
    l_lines.join("\n")
}
