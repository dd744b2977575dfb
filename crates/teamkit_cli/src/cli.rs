use clap::{ArgAction, Parser};
use log::LevelFilter;
use std::path::PathBuf;
use teamkit_roster::{N_TEAM_SIZE_DEFAULT, SpecPartitionOptions, SpecRunOptions};

#[derive(Parser, Debug, Clone)]
#[command(name = "teamkit")]
#[command(about = "Split a student roster workbook into random fixed-size teams")]
#[command(version)]
pub struct CliArgs {
    /// Roster workbook to read (.xlsx)
    #[arg(value_name = "INPUT")]
    pub input: Option<PathBuf>,

    /// Workbook to write the team assignments to
    #[arg(value_name = "OUTPUT")]
    pub output: Option<PathBuf>,

    /// Sheet to read; the first sheet when omitted
    #[arg(value_name = "SHEET")]
    pub sheet_positional: Option<String>,

    /// Students per team (default: 10; zero or negative also means 10)
    #[arg(value_name = "TEAM_SIZE", allow_negative_numbers = true)]
    pub team_size_positional: Option<i64>,

    /// Sheet to read; takes precedence over the positional SHEET
    #[arg(long, value_name = "NAME")]
    pub sheet: Option<String>,

    /// Students per team; takes precedence over the positional TEAM_SIZE
    #[arg(long, value_name = "N", allow_negative_numbers = true)]
    pub team_size: Option<i64>,

    /// Keep roster order instead of shuffling
    #[arg(long)]
    pub no_shuffle: bool,

    /// Seed for a reproducible shuffle
    #[arg(long, value_name = "SEED")]
    pub seed: Option<u64>,

    /// Print team size statistics after writing
    #[arg(long)]
    pub stats: bool,

    /// Increase log verbosity (-v info, -vv debug)
    #[arg(short, long, action = ArgAction::Count)]
    pub verbose: u8,
}

impl CliArgs {
    /// Interactive mode is used when INPUT or OUTPUT is missing
    pub fn if_interactive(&self) -> bool {
        self.input.is_none() || self.output.is_none()
    }

    /// Build run options from the command line alone
    pub fn to_run_options(&self) -> Result<SpecRunOptions, String> {
        let (Some(path_file_in), Some(path_file_out)) = (&self.input, &self.output) else {
            return Err("Both INPUT and OUTPUT paths are required".to_string());
        };

        let mut options = SpecRunOptions::new(path_file_in, path_file_out);
        options.sheet_name = self
            .sheet
            .clone()
            .or_else(|| self.sheet_positional.clone())
            .filter(|c_name| !c_name.trim().is_empty());
        options.partition.team_size = self
            .team_size
            .or(self.team_size_positional)
            .unwrap_or(N_TEAM_SIZE_DEFAULT as i64);
        self.apply_partition_flags(&mut options.partition);
        Ok(options)
    }

    /// Apply `--no-shuffle` and `--seed`; also used after interactive prompts
    pub fn apply_partition_flags(&self, partition: &mut SpecPartitionOptions) {
        partition.if_shuffle = !self.no_shuffle;
        partition.seed = self.seed;
    }

    /// Log level implied by `-v`; `RUST_LOG` may still override it
    pub fn derive_log_filter(&self) -> LevelFilter {
        match self.verbose {
            0 => LevelFilter::Warn,
            1 => LevelFilter::Info,
            _ => LevelFilter::Debug,
        }
    }
}
