use std::collections::HashSet;
use std::path::{Path, PathBuf};

use rust_xlsxwriter::Workbook;
use teamkit_roster::{
    EnumRunOutcome, EnumTeamStatistics, NoopRunObserver, SpecPartitionOptions,
    SpecRosterColumns, SpecRunOptions, TeamGenError, generate_teams, read_roster_from_xlsx,
};
use tempfile::TempDir;

fn create_roster_xlsx(dir: &Path, n_students: usize) -> PathBuf {
    let path = dir.join("students.xlsx");
    let mut workbook = Workbook::new();
    let sheet = workbook.add_worksheet();
    sheet.set_name("Students").expect("sheet name");
    for (n_col, c_header) in ["ID", "Name", "RegId", "Dept"].iter().enumerate() {
        sheet
            .write_string(0, n_col as u16, *c_header)
            .expect("header");
    }
    for idx in 0..n_students {
        let n_row = (idx + 1) as u32;
        sheet.write_number(n_row, 0, (1000 + idx) as f64).expect("id");
        sheet
            .write_string(n_row, 1, format!("Student {idx}"))
            .expect("name");
        sheet
            .write_string(n_row, 2, format!("REG-{idx}"))
            .expect("reg");
        sheet
            .write_string(n_row, 3, if idx % 2 == 0 { "CS" } else { "EE" })
            .expect("dept");
    }
    workbook.save(&path).expect("save roster");
    path
}

fn create_options(path_in: PathBuf, path_out: PathBuf, team_size: i64) -> SpecRunOptions {
    let mut options = SpecRunOptions::new(path_in, path_out);
    options.partition = SpecPartitionOptions {
        team_size,
        if_shuffle: false,
        seed: None,
    };
    options
}

#[test]
fn twenty_five_students_give_teams_of_ten_ten_five() {
    let tmp = TempDir::new().expect("tempdir");
    let path_in = create_roster_xlsx(tmp.path(), 25);
    let path_out = tmp.path().join("teams.xlsx");

    let outcome = generate_teams(&create_options(path_in, path_out, 10), &NoopRunObserver)
        .expect("run");
    let EnumRunOutcome::Completed(report) = outcome else {
        panic!("expected completed run");
    };
    assert_eq!(report.cnt_teams, 3);

    let EnumTeamStatistics::Summary(stats) = report.statistics else {
        panic!("expected statistics");
    };
    assert_eq!((stats.n_size_min, stats.n_size_max), (5, 10));
    assert_eq!(stats.cnt_students, 25);
}

#[test]
fn written_sheet_reads_back_as_same_students() {
    let tmp = TempDir::new().expect("tempdir");
    let path_in = create_roster_xlsx(tmp.path(), 13);
    let path_out = tmp.path().join("teams.xlsx");

    let mut options = SpecRunOptions::new(&path_in, &path_out);
    options.partition.team_size = 4;
    options.partition.seed = Some(42);
    generate_teams(&options, &NoopRunObserver).expect("run");

    let roster_in =
        read_roster_from_xlsx(&path_in, None, &SpecRosterColumns::default()).expect("read in");
    let roster_out = read_roster_from_xlsx(&path_out, Some("Teams"), &SpecRosterColumns::default())
        .expect("read out");

    let set_in: HashSet<(String, String, String, String)> = roster_in
        .students
        .into_iter()
        .map(|s| (s.id, s.name, s.registration_number, s.department))
        .collect();
    let set_out: HashSet<(String, String, String, String)> = roster_out
        .students
        .into_iter()
        .map(|s| (s.id, s.name, s.registration_number, s.department))
        .collect();
    assert_eq!(set_in.len(), 13);
    assert_eq!(set_in, set_out);
    assert!(set_in.contains(&(
        "1000".to_string(),
        "Student 0".to_string(),
        "REG-0".to_string(),
        "CS".to_string()
    )));
}

#[test]
fn named_sheet_after_first_is_the_one_read() {
    let tmp = TempDir::new().expect("tempdir");
    let path_in = tmp.path().join("multi.xlsx");
    let mut workbook = Workbook::new();
    let sheet_notes = workbook.add_worksheet();
    sheet_notes.set_name("Notes").expect("sheet name");
    sheet_notes.write_string(0, 0, "ID").expect("header");
    sheet_notes.write_string(0, 1, "Name").expect("header");
    sheet_notes.write_string(1, 0, "N1").expect("id");
    sheet_notes.write_string(1, 1, "Not A Student").expect("name");
    let sheet_students = workbook.add_worksheet();
    sheet_students.set_name("Students").expect("sheet name");
    sheet_students.write_string(0, 0, "ID").expect("header");
    sheet_students.write_string(0, 1, "Name").expect("header");
    for idx in 0..3u32 {
        sheet_students
            .write_string(idx + 1, 0, format!("S{idx}"))
            .expect("id");
        sheet_students
            .write_string(idx + 1, 1, format!("Student {idx}"))
            .expect("name");
    }
    workbook.save(&path_in).expect("save roster");

    let path_out = tmp.path().join("teams.xlsx");
    let mut options = create_options(path_in, path_out.clone(), 10);
    options.sheet_name = Some("Students".to_string());
    let EnumRunOutcome::Completed(report) =
        generate_teams(&options, &NoopRunObserver).expect("run")
    else {
        panic!("expected completed run");
    };
    assert_eq!(report.cnt_students, 3);

    let roster_out =
        read_roster_from_xlsx(&path_out, None, &SpecRosterColumns::default()).expect("read out");
    let l_ids: Vec<&str> = roster_out.students.iter().map(|s| s.id.as_str()).collect();
    assert_eq!(l_ids, vec!["S0", "S1", "S2"]);
}

#[test]
fn team_labels_follow_chunk_order() {
    let tmp = TempDir::new().expect("tempdir");
    let path_in = create_roster_xlsx(tmp.path(), 5);
    let path_out = tmp.path().join("teams.xlsx");
    generate_teams(&create_options(path_in, path_out.clone(), 2), &NoopRunObserver)
        .expect("run");

    let columns = SpecRosterColumns {
        col_id: 0,
        col_name: 4,
        col_registration_number: None,
        col_department: None,
    };
    let roster = read_roster_from_xlsx(&path_out, None, &columns).expect("read out");
    let l_labels: Vec<&str> = roster.students.iter().map(|s| s.name.as_str()).collect();
    assert_eq!(
        l_labels,
        vec!["Team_0", "Team_0", "Team_1", "Team_1", "Team_2"]
    );
}

#[test]
fn empty_roster_is_not_an_error_and_writes_nothing() {
    let tmp = TempDir::new().expect("tempdir");
    let path_in = create_roster_xlsx(tmp.path(), 0);
    let path_out = tmp.path().join("teams.xlsx");

    let outcome = generate_teams(&create_options(path_in, path_out.clone(), 10), &NoopRunObserver)
        .expect("run");
    assert_eq!(outcome, EnumRunOutcome::NoStudents);
    assert!(!path_out.exists());
}

#[test]
fn unknown_sheet_is_sheet_not_found() {
    let tmp = TempDir::new().expect("tempdir");
    let path_in = create_roster_xlsx(tmp.path(), 3);
    let mut options = create_options(path_in, tmp.path().join("teams.xlsx"), 10);
    options.sheet_name = Some("Missing".to_string());

    let err = generate_teams(&options, &NoopRunObserver).expect_err("must fail");
    assert!(matches!(
        err,
        TeamGenError::SheetNotFound { ref sheet_name, .. } if sheet_name == "Missing"
    ));
}

#[test]
fn unreadable_source_is_read_error() {
    let tmp = TempDir::new().expect("tempdir");
    let path_in = tmp.path().join("students.xlsx");
    std::fs::write(&path_in, b"not a workbook").expect("write junk");

    let err = generate_teams(
        &create_options(path_in.clone(), tmp.path().join("teams.xlsx"), 10),
        &NoopRunObserver,
    )
    .expect_err("must fail");
    assert!(matches!(err, TeamGenError::ReadIo { ref path, .. } if *path == path_in));

    let err = generate_teams(
        &create_options(
            tmp.path().join("absent.xlsx"),
            tmp.path().join("teams.xlsx"),
            10,
        ),
        &NoopRunObserver,
    )
    .expect_err("must fail");
    assert!(matches!(err, TeamGenError::ReadIo { .. }));
}

#[test]
fn unwritable_destination_is_write_error() {
    let tmp = TempDir::new().expect("tempdir");
    let path_in = create_roster_xlsx(tmp.path(), 3);
    let path_out = tmp.path().join("no_such_dir").join("teams.xlsx");

    let err = generate_teams(&create_options(path_in, path_out, 10), &NoopRunObserver)
        .expect_err("must fail");
    assert!(matches!(err, TeamGenError::Write { .. }));
}
