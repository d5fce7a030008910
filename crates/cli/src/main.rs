use anyhow::Result;
use clap::{Parser, Subcommand};
use rubric_core::report::DEFAULT_REPORT_FILE;
use tracing::{metadata::LevelFilter, Level};
use tracing_subscriber::{fmt, prelude::*, util::SubscriberInitExt};
use web_rubric::commands::{grade_command, inspect_command, rubric_command, RubricFormat};

/// Static rubric grader for zipped student web projects.
///
/// This CLI is a thin wrapper around `rubric-core` (exposed in code as `rubric_core`).
/// All substantive logic lives in the library so it can be tested thoroughly
/// and reused from other frontends.
#[derive(Parser, Debug)]
#[command(
    name = "web-rubric",
    version,
    about = "Grade zipped web projects against a fixed pass/fail rubric",
    long_about = None
)]
struct Cli {
    /// Log per-file scanner activity.
    #[arg(short, long, global = true, default_value_t = false)]
    verbose: bool,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Grade every archive in a directory and write a CSV report.
    ///
    /// Archives that cannot be opened get an empty summary/info row; the run
    /// continues with the next archive.
    Grade {
        /// Directory containing the submission archives.
        #[arg(long, alias = "in_dir")]
        in_dir: String,

        /// Report file to write.
        #[arg(long, default_value = DEFAULT_REPORT_FILE)]
        out: String,

        /// Optional rubric config (.yaml, .yml or .json). Defaults to the built-in rubric.
        #[arg(long)]
        rubric: Option<String>,

        /// Emit a JSON run summary instead of human-readable text.
        #[arg(long, default_value_t = false)]
        json: bool,
    },

    /// Evaluate one archive and show its statistics, checks, and richness.
    Inspect {
        /// Path to the archive.
        #[arg(long)]
        archive: String,

        /// Optional rubric config (.yaml, .yml or .json).
        #[arg(long)]
        rubric: Option<String>,

        /// Emit JSON instead of human-readable text.
        #[arg(long, default_value_t = false)]
        json: bool,
    },

    /// Print the built-in rubric configuration.
    Rubric {
        #[arg(long, value_enum, default_value_t = RubricFormat::Yaml)]
        format: RubricFormat,
    },
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    init_logging(cli.verbose);

    match cli.command {
        Command::Grade { in_dir, out, rubric, json } => {
            grade_command(&in_dir, &out, rubric.as_deref(), json)?
        }
        Command::Inspect { archive, rubric, json } => {
            inspect_command(&archive, rubric.as_deref(), json)?
        }
        Command::Rubric { format } => rubric_command(format)?,
    }

    Ok(())
}

/// Log to stderr so stdout stays clean for JSON output.
fn init_logging(verbose: bool) {
    let fmt = fmt::layer()
        .with_writer(std::io::stderr)
        .without_time()
        .with_file(false)
        .with_line_number(false);
    let level = if verbose { Level::DEBUG } else { Level::INFO };
    tracing_subscriber::registry().with(fmt).with(LevelFilter::from_level(level)).init();
}
