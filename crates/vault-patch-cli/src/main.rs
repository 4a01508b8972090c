use anyhow::{Context, Result, bail};
use clap::Parser;
use relative_path::RelativePathBuf;
use std::io::{Read, Write};
use std::path::{Path, PathBuf};
use std::process::ExitCode;
use tracing_subscriber::EnvFilter;
use vault_patch_config::{Config, ConfigError, DEFAULT_LOG_FILTER};
use vault_patch_engine::{
    EditOutcome, NoteEditSummary, VaultError, WriteMode, decode_operations, edit_note,
};

#[derive(Debug, Parser)]
#[command(name = "vault-patch")]
#[command(about = "Apply an ordered batch of text edits to a note", long_about = None)]
#[command(version)]
struct Cli {
    /// Note to edit, relative to the notes directory
    #[arg(value_name = "NOTE")]
    note: String,

    /// JSON array of operations; reads stdin when omitted or "-"
    #[arg(long, value_name = "FILE")]
    ops: Option<PathBuf>,

    /// Notes directory, overriding `notes_path` from the config file
    #[arg(long, value_name = "DIR")]
    notes_dir: Option<PathBuf>,

    /// Print the edited text instead of writing it
    #[arg(long)]
    dry_run: bool,
}

fn main() -> ExitCode {
    let cli = Cli::parse();

    let (config, ignored_error) = match usable_config(Config::load(), cli.notes_dir.is_some()) {
        Ok(loaded) => loaded,
        Err(e) => {
            eprintln!("error: {e}");
            return ExitCode::FAILURE;
        }
    };
    init_logging(
        config
            .as_ref()
            .map_or(DEFAULT_LOG_FILTER, |config| config.log_filter()),
    );
    if let Some(e) = ignored_error {
        tracing::warn!(error = %e, "ignoring config file, --notes-dir given");
    }

    let stdin = std::io::stdin();
    let stdout = std::io::stdout();
    match run(&cli, config.as_ref(), stdin.lock(), &mut stdout.lock()) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("error: {e:#}");
            ExitCode::FAILURE
        }
    }
}

/// A broken config file only matters when it is needed for the notes root.
/// With `--notes-dir` the error is handed back to be logged instead.
fn usable_config(
    loaded: Result<Option<Config>, ConfigError>,
    has_notes_dir: bool,
) -> Result<(Option<Config>, Option<ConfigError>), ConfigError> {
    match loaded {
        Ok(config) => Ok((config, None)),
        Err(e) if has_notes_dir => Ok((None, Some(e))),
        Err(e) => Err(e),
    }
}

/// `RUST_LOG` wins over the configured filter
fn init_logging(default_filter: &str) {
    let env_filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_filter));

    tracing_subscriber::fmt()
        .with_env_filter(env_filter)
        .with_writer(std::io::stderr)
        .init();
}

fn run(cli: &Cli, config: Option<&Config>, stdin: impl Read, out: &mut impl Write) -> Result<()> {
    let notes_root = notes_root(cli.notes_dir.as_deref(), config)?;
    let json = read_operations(cli.ops.as_deref(), stdin)?;
    let operations = decode_operations(&json)?;
    let mode = if cli.dry_run {
        WriteMode::DryRun
    } else {
        WriteMode::Persist
    };

    let note = RelativePathBuf::from(cli.note.as_str());
    let summary = match edit_note(&notes_root, &note, &operations, mode) {
        Ok(summary) => summary,
        // Engine errors already name the operation; keep them verbatim
        Err(VaultError::Edit(e)) => return Err(e.into()),
        Err(e) => return Err(e).with_context(|| format!("failed to edit {note}")),
    };

    report(&summary, mode, out)
}

fn notes_root(flag: Option<&Path>, config: Option<&Config>) -> Result<PathBuf> {
    match (flag, config) {
        (Some(dir), _) => Ok(dir.to_path_buf()),
        (None, Some(config)) => Ok(config.notes_path.clone()),
        (None, None) => bail!(
            "no notes directory: pass --notes-dir or set notes_path in {}",
            Config::config_path().display()
        ),
    }
}

fn read_operations(source: Option<&Path>, mut stdin: impl Read) -> Result<String> {
    match source {
        Some(path) if path != Path::new("-") => std::fs::read_to_string(path)
            .with_context(|| format!("failed to read operations from {}", path.display())),
        _ => {
            let mut json = String::new();
            stdin
                .read_to_string(&mut json)
                .context("failed to read operations from stdin")?;
            Ok(json)
        }
    }
}

fn report(summary: &NoteEditSummary, mode: WriteMode, out: &mut impl Write) -> Result<()> {
    match (&summary.outcome, mode) {
        (EditOutcome::Unchanged { .. }, _) => {
            writeln!(out, "no changes to {}", summary.path)?;
        }
        (EditOutcome::Changed(report), WriteMode::DryRun) => {
            write!(out, "{}", report.text)?;
        }
        (EditOutcome::Changed(report), WriteMode::Persist) => {
            writeln!(out, "updated {}", summary.path)?;
            for (position, note) in report.notes.iter().enumerate() {
                writeln!(out, "  {}. {note}", position + 1)?;
            }
        }
    }
    Ok(())
}
