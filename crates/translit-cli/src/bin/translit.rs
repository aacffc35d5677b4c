use std::path::{Path, PathBuf};

use clap::{Parser, Subcommand};

use translit_cli::commands::run_ops::{self, RunOptions};
use translit_cli::commands::data_ops;

#[derive(Parser)]
#[command(name = "translit", about = "Slavic Cyrillic/Latin transliteration")]
struct Cli {
    /// Write a JSONL trace into this directory (requires --features trace)
    #[arg(long, global = true)]
    log_dir: Option<String>,
    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand)]
enum Command {
    /// Transliterate a text file
    Run {
        /// Language id; prompts with a numbered menu when omitted
        #[arg(short, long)]
        language: Option<String>,
        /// Source text file (default: io.input from settings)
        #[arg(short, long)]
        input: Option<String>,
        /// Destination file (default: io.output from settings)
        #[arg(short, long)]
        output: Option<String>,
        /// Directory with row files (default: data.dir from settings, else builtin)
        #[arg(long)]
        data_dir: Option<String>,
        /// Settings TOML file (default: embedded settings)
        #[arg(long)]
        settings: Option<String>,
    },
    /// List the configured languages
    Languages {
        /// Directory with row files (default: builtin)
        #[arg(long)]
        data_dir: Option<String>,
        /// Output as JSON instead of text
        #[arg(long)]
        json: bool,
    },
    /// Build a configuration from a row-file directory and report counts
    Validate {
        /// Directory with row files
        dir: String,
    },
    /// Write the builtin row files into a directory
    DataExport {
        /// Output directory
        dir: String,
    },
    /// Export default settings as TOML
    SettingsExport,
    /// Validate a custom settings TOML file
    SettingsValidate {
        /// Path to the TOML file
        file: String,
    },
}

fn main() {
    let cli = Cli::parse();
    // held until main returns so queued trace lines are written
    let _trace = cli
        .log_dir
        .as_deref()
        .and_then(|dir| translit_engine::trace_init::init_tracing(Path::new(dir)));

    match cli.command {
        Command::Run {
            language,
            input,
            output,
            data_dir,
            settings,
        } => run_ops::run_cmd(RunOptions {
            language,
            input: input.map(PathBuf::from),
            output: output.map(PathBuf::from),
            data_dir: data_dir.map(PathBuf::from),
            settings: settings.map(PathBuf::from),
        }),
        Command::Languages { data_dir, json } => data_ops::languages_cmd(data_dir.as_deref(), json),
        Command::Validate { dir } => data_ops::validate_cmd(&dir),
        Command::DataExport { dir } => data_ops::data_export(&dir),
        Command::SettingsExport => data_ops::settings_export(),
        Command::SettingsValidate { file } => data_ops::settings_validate(&file),
    }
}
