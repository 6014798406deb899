//! tcp - Tree Copy
//!
//! Copy every file of a directory tree into an output directory, skipping
//! well-known clutter, optionally flattening the hierarchy. Powered by treecopy.

use clap::{Parser, ValueEnum};
use indicatif::{ProgressBar, ProgressStyle};
use serde_json::{Value, json};
use std::path::{Path, PathBuf};
use std::time::Duration;
use thiserror::Error;
use treecopy::{
    CopyOptions, CopyOutcome, DEFAULT_IGNORED_DIRS, DEFAULT_IGNORED_PATTERNS,
    Error as TreecopyError, ErrorCode, copy_files,
};

/// tcp - Copy a directory tree with exclusions and optional flattening
///
/// Copies every file below SOURCE into the output directory. Directories
/// named .git, node_modules, __pycache__ and .next are skipped, as are files
/// ending in .pyc, .log, .DS_Store, .sql, .mjs and .json.
///
/// Usage:
///   tcp SOURCE
///   tcp SOURCE --output-dir DIR --flatten --separator -
#[derive(Parser, Debug)]
#[command(name = "tcp", version, about, long_about = None)]
struct Args {
    /// Source directory to copy from
    source: PathBuf,

    /// Output directory
    #[arg(short = 'o', long, value_name = "DIR", default_value = "result")]
    output_dir: PathBuf,

    /// Flatten directory structure into the output directory
    #[arg(long)]
    flatten: bool,

    /// Separator joining path segments in flattened file names
    #[arg(long, default_value = "_", allow_hyphen_values = true)]
    separator: String,

    /// Additional directory name to skip (repeatable)
    #[arg(long = "ignore-dir", value_name = "NAME")]
    ignore_dirs: Vec<String>,

    /// Additional file pattern to skip, matched as a suffix after removing `*` (repeatable)
    #[arg(long = "ignore-pattern", value_name = "PATTERN")]
    ignore_patterns: Vec<String>,

    /// Do not apply the built-in directory and pattern exclusions
    #[arg(long)]
    no_default_ignores: bool,

    /// Do not preserve file timestamps
    #[arg(long)]
    no_times: bool,

    /// Do not preserve file permissions
    #[arg(long)]
    no_perms: bool,

    /// Call fsync on each file before it is renamed into place
    #[arg(long)]
    sync: bool,

    /// Output format
    #[arg(long, value_enum, default_value = "human")]
    output: OutputMode,

    /// Disable progress spinner
    #[arg(short = 'q', long)]
    quiet: bool,

    /// Verbose output
    #[arg(short = 'v', long)]
    verbose: bool,
}

#[derive(Debug, Clone, Copy, ValueEnum, PartialEq, Eq)]
enum OutputMode {
    Human,
    Json,
}

impl OutputMode {
    fn as_str(self) -> &'static str {
        match self {
            Self::Human => "human",
            Self::Json => "json",
        }
    }
}

/// Exit status when the copy finished but some files failed.
const EXIT_PARTIAL: i32 = 3;

type CliResult<T> = std::result::Result<T, CliError>;

#[derive(Debug, Error)]
enum CliError {
    /// The library error already names the path that failed
    #[error(transparent)]
    Copy(#[from] TreecopyError),

    #[error("Failed to serialize JSON output: {source}")]
    JsonSerialize { source: serde_json::Error },
}

impl CliError {
    fn code(&self) -> ErrorCode {
        match self {
            Self::Copy(source) => source.code(),
            Self::JsonSerialize { .. } => ErrorCode::Internal,
        }
    }
}

fn exit_code_for(code: ErrorCode) -> i32 {
    match code {
        ErrorCode::InvalidInput => 2,
        _ => 1,
    }
}

#[derive(Debug, Clone)]
struct EffectiveConfig {
    source: PathBuf,
    output_dir: PathBuf,
    options: CopyOptions,
    output_mode: OutputMode,
}

impl EffectiveConfig {
    fn to_json_value(&self) -> CliResult<Value> {
        let options = serde_json::to_value(&self.options)
            .map_err(|source| CliError::JsonSerialize { source })?;
        Ok(json!({
            "source": display_path(&self.source),
            "output_dir": display_path(&self.output_dir),
            "options": options,
            "output_mode": self.output_mode.as_str(),
        }))
    }

    fn print_human_stderr(&self) {
        let filter = self.options.filter();
        let dirs: Vec<&str> = filter.dirs().collect();
        let patterns: Vec<&str> = filter.patterns().iter().map(|p| p.as_str()).collect();

        eprintln!("Effective configuration:");
        eprintln!("  source: {}", self.source.display());
        eprintln!("  output_dir: {}", self.output_dir.display());
        eprintln!("  ignored_dirs: {}", dirs.join(", "));
        eprintln!("  ignored_patterns: {}", patterns.join(", "));
        eprintln!("  flatten: {}", self.options.flatten);
        if self.options.flatten {
            eprintln!("  separator: {:?}", self.options.separator);
        }
        eprintln!("  preserve_timestamps: {}", self.options.preserve_timestamps);
        eprintln!("  preserve_permissions: {}", self.options.preserve_permissions);
        eprintln!("  fsync: {}", self.options.fsync);
    }
}

fn main() {
    match run() {
        Ok(outcome) if outcome.is_complete() => {}
        Ok(_) => std::process::exit(EXIT_PARTIAL),
        Err(error) => {
            eprintln!("error[{}]: {}", error.code(), error);
            std::process::exit(exit_code_for(error.code()));
        }
    }
}

fn run() -> CliResult<CopyOutcome> {
    let args = Args::parse();

    let config = EffectiveConfig {
        source: args.source.clone(),
        output_dir: args.output_dir.clone(),
        options: build_options(&args),
        output_mode: args.output,
    };

    if config.output_mode == OutputMode::Human && args.verbose {
        config.print_human_stderr();
    }

    let pb = if config.output_mode == OutputMode::Human && !args.quiet && !args.verbose {
        let pb = ProgressBar::new_spinner();
        let style = ProgressStyle::default_spinner().template("{spinner:.green} {msg}");
        if let Ok(style) = style {
            pb.set_style(style);
            pb.enable_steady_tick(Duration::from_millis(100));
            pb.set_message(format!("Copying {}...", config.source.display()));
            Some(pb)
        } else {
            None
        }
    } else {
        None
    };

    let copy_result = copy_files(&config.source, &config.output_dir, &config.options);

    if let Some(pb) = pb {
        pb.finish_and_clear();
    }

    match copy_result {
        Ok(outcome) => {
            match config.output_mode {
                OutputMode::Human => print_report(&outcome, &config),
                OutputMode::Json => emit_json_report(&outcome, &config)?,
            }
            Ok(outcome)
        }
        Err(source) => {
            let error = CliError::from(source);
            if config.output_mode == OutputMode::Json {
                emit_json_error(&error, &config)?;
            }
            Err(error)
        }
    }
}

fn build_options(args: &Args) -> CopyOptions {
    let mut options = CopyOptions::default();

    if !args.no_default_ignores {
        options = options
            .with_ignored_dirs(DEFAULT_IGNORED_DIRS.iter().copied())
            .with_ignored_patterns(DEFAULT_IGNORED_PATTERNS.iter().copied());
    }
    options = options
        .with_ignored_dirs(args.ignore_dirs.iter().cloned())
        .with_ignored_patterns(args.ignore_patterns.iter().cloned());

    if args.flatten {
        options = options.with_flatten(args.separator.clone());
    } else {
        options.separator = args.separator.clone();
    }
    if args.no_times {
        options = options.without_timestamps();
    }
    if args.no_perms {
        options = options.without_permissions();
    }
    if args.sync {
        options = options.with_fsync();
    }

    if args.verbose && args.output == OutputMode::Human {
        options = options
            .with_warn_handler(|msg| {
                eprintln!("warning: {}", msg);
            })
            .with_verbose_handler(|msg| {
                eprintln!("{}", msg);
            });
    }

    options
}

fn print_report(outcome: &CopyOutcome, config: &EffectiveConfig) {
    println!("\nSuccessfully copied files:");
    for path in &outcome.succeeded {
        println!("✓ {}", path.display());
    }

    if !outcome.failed.is_empty() {
        println!("\nFailed to copy:");
        for failure in &outcome.failed {
            println!("✗ {failure}");
        }
    }

    println!("\nTotal files copied: {}", outcome.succeeded.len());
    println!("Total files failed: {}", outcome.failed.len());
    println!(
        "\nFiles have been copied to: {}/",
        config.output_dir.display()
    );
    if config.options.flatten {
        println!("Directory structure was flattened");
    }
}

fn emit_json_report(outcome: &CopyOutcome, config: &EffectiveConfig) -> CliResult<()> {
    let copied: Vec<Value> = outcome
        .succeeded
        .iter()
        .map(|path| Value::String(display_path(path)))
        .collect();
    let failed: Vec<Value> = outcome
        .failed
        .iter()
        .map(|failure| {
            json!({
                "path": display_path(&failure.path),
                "error_code": failure.code.as_str(),
                "error_message": failure.message,
            })
        })
        .collect();

    let payload = json!({
        "schema_version": "1.0",
        "mode": "execute",
        "effective_config": config.to_json_value()?,
        "copied": copied,
        "failed": failed,
        "totals": {
            "copied": outcome.succeeded.len(),
            "failed": outcome.failed.len(),
            "bytes_copied": outcome.bytes_copied,
        },
        "flattened": config.options.flatten,
    });
    print_json_value(&payload)
}

fn emit_json_error(error: &CliError, config: &EffectiveConfig) -> CliResult<()> {
    let payload = json!({
        "schema_version": "1.0",
        "mode": "execute",
        "effective_config": config.to_json_value()?,
        "error": {
            "error_code": error.code().as_str(),
            "error_message": error.to_string(),
        },
    });
    print_json_value(&payload)
}

fn print_json_value(value: &Value) -> CliResult<()> {
    let serialized =
        serde_json::to_string(value).map_err(|source| CliError::JsonSerialize { source })?;
    println!("{serialized}");
    Ok(())
}

fn display_path(path: &Path) -> String {
    path.display().to_string()
}
