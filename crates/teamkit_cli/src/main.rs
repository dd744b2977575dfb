mod cli;
mod console;
mod interactive;

use std::io;

use clap::Parser;
use teamkit_roster::{EnumRunOutcome, generate_teams};

fn main() {
    let args = cli::CliArgs::parse();

    env_logger::Builder::new()
        .filter_level(args.derive_log_filter())
        .parse_default_env()
        .init();

    let options = if args.if_interactive() {
        let mut stdin = io::stdin().lock();
        let mut stdout = io::stdout();
        interactive::prompt_run_options(&mut stdin, &mut stdout).map(|mut options| {
            args.apply_partition_flags(&mut options.partition);
            options
        })
    } else {
        args.to_run_options()
    };
    let options = match options {
        Ok(o) => o,
        Err(e) => {
            eprintln!("Error: {}", e);
            std::process::exit(1);
        }
    };

    log::info!("Input file: {}", options.path_file_in.display());
    log::info!("Output file: {}", options.path_file_out.display());
    log::info!(
        "Sheet name: {}",
        options.sheet_name.as_deref().unwrap_or("First sheet")
    );
    log::info!("Team size: {}", options.partition.resolve_team_size());

    println!("Reading students from Excel file...");
    let observer = console::ConsoleRunObserver::new(io::stdout());
    match generate_teams(&options, &observer) {
        Ok(EnumRunOutcome::NoStudents) => {
            println!("No students found in the Excel file!");
        }
        Ok(EnumRunOutcome::Completed(report)) => {
            log::debug!("{report}");
            println!("{}", console::format_run_summary(&report, args.stats));
        }
        Err(e) => {
            log::error!("Team generation failed: {e:?}");
            eprintln!("Error: {}", e);
            std::process::exit(1);
        }
    }
}
