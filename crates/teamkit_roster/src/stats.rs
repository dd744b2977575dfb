//! Descriptive statistics over partitioned teams.

use crate::report::{EnumTeamStatistics, ReportTeamStatistics};
use crate::spec::SpecTeam;

/// Summarize team sizes; an empty list yields [`EnumTeamStatistics::NoTeams`].
pub fn summarize_teams(teams: &[SpecTeam]) -> EnumTeamStatistics {
    let l_sizes: Vec<usize> = teams.iter().map(SpecTeam::len).collect();
    let (Some(n_size_min), Some(n_size_max)) =
        (l_sizes.iter().copied().min(), l_sizes.iter().copied().max())
    else {
        return EnumTeamStatistics::NoTeams;
    };

    let cnt_students: usize = l_sizes.iter().sum();
    EnumTeamStatistics::Summary(ReportTeamStatistics {
        cnt_teams: l_sizes.len(),
        cnt_students,
        n_size_min,
        n_size_max,
        n_size_mean: cnt_students as f64 / l_sizes.len() as f64,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::spec::SpecStudent;

    fn create_team(idx_team: usize, n_members: usize) -> SpecTeam {
        SpecTeam {
            idx_team,
            name: format!("Team_{idx_team}"),
            members: (0..n_members)
                .map(|idx| SpecStudent::new(format!("S{idx_team}_{idx}"), "N"))
                .collect(),
        }
    }

    #[test]
    fn empty_team_list_is_sentinel() {
        assert_eq!(summarize_teams(&[]), EnumTeamStatistics::NoTeams);
    }

    #[test]
    fn summary_over_uneven_teams() {
        let teams = vec![create_team(0, 10), create_team(1, 10), create_team(2, 5)];
        let EnumTeamStatistics::Summary(report) = summarize_teams(&teams) else {
            panic!("expected summary");
        };
        assert_eq!(report.cnt_teams, 3);
        assert_eq!(report.cnt_students, 25);
        assert_eq!(report.n_size_min, 5);
        assert_eq!(report.n_size_max, 10);
        assert!(report.to_string().ends_with("Average Team Size: 8.33"));
    }

    #[test]
    fn single_team() {
        let EnumTeamStatistics::Summary(report) = summarize_teams(&[create_team(0, 1)]) else {
            panic!("expected summary");
        };
        assert_eq!((report.n_size_min, report.n_size_max), (1, 1));
        assert_eq!(report.n_size_mean, 1.0);
    }
}
