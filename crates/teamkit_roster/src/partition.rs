//! Uniform chunked-random team partitioning.

use rand::SeedableRng;
use rand::rngs::StdRng;
use rand::seq::SliceRandom;

use crate::conf::derive_team_name;
use crate::spec::{SpecPartitionOptions, SpecStudent, SpecStudentAssignment, SpecTeam};

/// Return a uniformly shuffled copy of `students`.
///
/// With `seed` set the permutation is reproducible; otherwise the thread RNG
/// is used.
pub fn shuffle_students(students: &[SpecStudent], seed: Option<u64>) -> Vec<SpecStudent> {
    let mut l_students = students.to_vec();
    match seed {
        Some(n_seed) => l_students.shuffle(&mut StdRng::seed_from_u64(n_seed)),
        None => l_students.shuffle(&mut rand::rng()),
    }
    l_students
}

/// Split `students` into consecutive teams of `options.resolve_team_size()`.
///
/// The last team holds the remainder and is never empty; an empty roster
/// yields no teams. Input students are not modified: labels live on the
/// returned [`SpecTeam`] values.
pub fn split_into_teams(students: &[SpecStudent], options: &SpecPartitionOptions) -> Vec<SpecTeam> {
    if students.is_empty() {
        return vec![];
    }

    let n_team_size = options.resolve_team_size();
    let l_students = if options.if_shuffle {
        shuffle_students(students, options.seed)
    } else {
        students.to_vec()
    };

    l_students
        .chunks(n_team_size)
        .enumerate()
        .map(|(idx_team, l_members)| SpecTeam {
            idx_team,
            name: derive_team_name(idx_team),
            members: l_members.to_vec(),
        })
        .collect()
}

/// [`split_into_teams`] with the default team size and shuffling enabled.
pub fn split_into_teams_default(students: &[SpecStudent]) -> Vec<SpecTeam> {
    split_into_teams(students, &SpecPartitionOptions::default())
}

/// Flatten teams into labelled records, team order then member order.
pub fn flatten_team_assignments(teams: &[SpecTeam]) -> Vec<SpecStudentAssignment> {
    teams.iter().flat_map(SpecTeam::assignments).collect()
}

#[cfg(test)]
mod tests {
    use std::collections::HashSet;

    use super::*;

    fn create_students(n: usize) -> Vec<SpecStudent> {
        (0..n)
            .map(|idx| SpecStudent::new(format!("S{idx}"), format!("Student {idx}")))
            .collect()
    }

    fn create_options(team_size: i64, if_shuffle: bool) -> SpecPartitionOptions {
        SpecPartitionOptions {
            team_size,
            if_shuffle,
            seed: None,
        }
    }

    #[test]
    fn twenty_five_students_in_teams_of_ten() {
        let students = create_students(25);
        let teams = split_into_teams(&students, &create_options(10, false));

        let l_sizes: Vec<usize> = teams.iter().map(SpecTeam::len).collect();
        let l_names: Vec<&str> = teams.iter().map(|t| t.name.as_str()).collect();
        assert_eq!(l_sizes, vec![10, 10, 5]);
        assert_eq!(l_names, vec!["Team_0", "Team_1", "Team_2"]);
        assert_eq!(teams[1].members[0].id, "S10");
        assert_eq!(teams[2].idx_team, 2);
    }

    #[test]
    fn empty_roster_yields_no_teams() {
        assert!(split_into_teams(&[], &create_options(4, true)).is_empty());
    }

    #[test]
    fn team_count_and_sizes_hold_for_many_shapes() {
        for n_students in 0..40usize {
            for team_size in 1..12i64 {
                let students = create_students(n_students);
                let teams = split_into_teams(&students, &create_options(team_size, true));
                let n = team_size as usize;

                assert_eq!(teams.len(), n_students.div_ceil(n));
                assert!(teams.iter().all(|t| (1..=n).contains(&t.len())));
                assert_eq!(teams.iter().map(SpecTeam::len).sum::<usize>(), n_students);

                let set_ids: HashSet<&str> = teams
                    .iter()
                    .flat_map(|t| t.members.iter().map(|s| s.id.as_str()))
                    .collect();
                assert_eq!(set_ids.len(), n_students);
            }
        }
    }

    #[test]
    fn non_positive_team_size_behaves_like_ten() {
        let students = create_students(23);
        let teams_default = split_into_teams(&students, &create_options(10, false));
        for team_size in [0, -5] {
            let teams = split_into_teams(&students, &create_options(team_size, false));
            assert_eq!(teams, teams_default);
        }
    }

    #[test]
    fn unshuffled_keeps_roster_order() {
        let students = create_students(7);
        let teams = split_into_teams(&students, &create_options(3, false));
        let l_ids: Vec<String> = flatten_team_assignments(&teams)
            .into_iter()
            .map(|a| a.student.id)
            .collect();
        let l_expected: Vec<String> = students.iter().map(|s| s.id.clone()).collect();
        assert_eq!(l_ids, l_expected);
    }

    #[test]
    fn seeded_shuffle_is_reproducible_permutation() {
        let students = create_students(30);
        let shuffled_a = shuffle_students(&students, Some(7));
        let shuffled_b = shuffle_students(&students, Some(7));
        assert_eq!(shuffled_a, shuffled_b);

        let set_ids: HashSet<&str> = shuffled_a.iter().map(|s| s.id.as_str()).collect();
        assert_eq!(set_ids.len(), 30);
        assert_ne!(shuffled_a, students);
    }

    #[test]
    fn assignments_carry_team_label() {
        let students = create_students(5);
        let teams = split_into_teams(
            &students,
            &SpecPartitionOptions {
                team_size: 2,
                if_shuffle: true,
                seed: Some(1),
            },
        );
        let l_assignments = flatten_team_assignments(&teams);
        assert_eq!(l_assignments.len(), 5);
        assert_eq!(l_assignments[4].team_name, "Team_2");
        assert!(l_assignments[..2].iter().all(|a| a.team_name == "Team_0"));
        assert_eq!(students[0].id, "S0");
    }

    #[test]
    fn default_split_uses_ten() {
        let teams = split_into_teams_default(&create_students(11));
        assert_eq!(teams.len(), 2);
        assert_eq!(teams[1].len(), 1);
    }
}
