use battlesheet::{CreatureRecord, GameSystem, SheetComposer, SheetConfig, SheetError};
use battlesheet_source::load_records;
use clap::{Args, Parser, Subcommand};
use log::{error, info, warn};
use std::path::{Path, PathBuf};
use std::process::ExitCode;

#[cfg(feature = "rayon-executor")]
use rayon::prelude::*;

// Rendering allocates many short-lived strings and content buffers.
#[global_allocator]
static GLOBAL: mimalloc::MiMalloc = mimalloc::MiMalloc;

#[derive(Parser)]
#[command(name = "battlesheet", version)]
#[command(about = "Generate printable A6 creature battlesheets")]
struct Cli {
    #[command(subcommand)]
    command: Command,

    /// Directory containing the per-system creature directories
    #[arg(long, global = true, default_value = ".")]
    input_root: PathBuf,

    /// JSON file overriding the page setup and theme
    #[arg(long, global = true)]
    config: Option<PathBuf>,

    /// Lay the sheets out and report page counts without writing files
    #[arg(long, global = true)]
    dry_run: bool,
}

#[derive(Subcommand)]
enum Command {
    /// D&D creatures from dnd_creatures/
    Dnd(OutputArgs),
    /// Stars Without Number creatures from swn_creatures/
    Swn(OutputArgs),
    /// COF Mini creatures from cofmini_creatures/
    Cofmini(OutputArgs),
    /// Timothée creatures from timothee_creatures/
    Timothee(OutputArgs),
    /// Every system
    All(OutputArgs),
    /// List the creature files found for every system
    List,
}

#[derive(Args)]
struct OutputArgs {
    /// Directory receiving the generated PDFs
    #[arg(default_value = "output")]
    output_dir: PathBuf,
}

struct Summary {
    system: GameSystem,
    loaded: usize,
    failed: usize,
    pages: usize,
    output: Option<PathBuf>,
}

fn main() -> ExitCode {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    let cli = Cli::parse();
    let config = match &cli.config {
        Some(path) => match SheetConfig::from_json_file(path) {
            Ok(config) => config,
            Err(e) => {
                error!("{}", e);
                return ExitCode::FAILURE;
            }
        },
        None => SheetConfig::default(),
    };
    let composer = SheetComposer::new(config);

    let (systems, output) = match &cli.command {
        Command::Dnd(args) => (vec![GameSystem::Dnd], args),
        Command::Swn(args) => (vec![GameSystem::Swn], args),
        Command::Cofmini(args) => (vec![GameSystem::CofMini], args),
        Command::Timothee(args) => (vec![GameSystem::Timothee], args),
        Command::All(args) => (GameSystem::ALL.to_vec(), args),
        Command::List => {
            list(&cli.input_root);
            return ExitCode::SUCCESS;
        }
    };

    let results = run_all(&systems, &composer, &cli.input_root, &output.output_dir, cli.dry_run);
    report(&results)
}

#[cfg(feature = "rayon-executor")]
fn run_all(
    systems: &[GameSystem],
    composer: &SheetComposer,
    input_root: &Path,
    output_dir: &Path,
    dry_run: bool,
) -> Vec<(GameSystem, Result<Summary, SheetError>)> {
    systems
        .par_iter()
        .map(|&system| (system, run_system(system, composer, input_root, output_dir, dry_run)))
        .collect()
}

#[cfg(not(feature = "rayon-executor"))]
fn run_all(
    systems: &[GameSystem],
    composer: &SheetComposer,
    input_root: &Path,
    output_dir: &Path,
    dry_run: bool,
) -> Vec<(GameSystem, Result<Summary, SheetError>)> {
    systems
        .iter()
        .map(|&system| (system, run_system(system, composer, input_root, output_dir, dry_run)))
        .collect()
}

fn run_system(
    system: GameSystem,
    composer: &SheetComposer,
    input_root: &Path,
    output_dir: &Path,
    dry_run: bool,
) -> Result<Summary, SheetError> {
    let dir = input_root.join(system.default_input_dir());
    info!("Generating {} battlesheets from {}", system, dir.display());

    let report = load_records(&dir, |value| system.parse_record(value))?;
    let failed = report.failures.len();
    let records: Vec<CreatureRecord> = report.into_records();
    if records.is_empty() {
        return Err(SheetError::NoRecords(system));
    }

    if dry_run {
        let recording = composer.dry_run(system, &records)?;
        return Ok(Summary {
            system,
            loaded: records.len(),
            failed,
            pages: recording.page_count(),
            output: None,
        });
    }

    let path = output_dir.join(system.output_file_name());
    composer.render_to_file(system, &records, &path)?;
    Ok(Summary {
        system,
        loaded: records.len(),
        failed,
        pages: records.len(),
        output: Some(path),
    })
}

fn report(results: &[(GameSystem, Result<Summary, SheetError>)]) -> ExitCode {
    let mut succeeded = 0;
    for (system, result) in results {
        match result {
            Ok(summary) => {
                succeeded += 1;
                let target = match &summary.output {
                    Some(path) => path.display().to_string(),
                    None => format!("dry run, {} page(s)", summary.pages),
                };
                println!(
                    "{}: {} loaded, {} failed -> {}",
                    summary.system, summary.loaded, summary.failed, target
                );
            }
            Err(e) => println!("{}: {}", system, e),
        }
    }

    if results.len() > 1 {
        if succeeded == results.len() {
            info!("All {} systems generated", succeeded);
        } else if succeeded > 0 {
            warn!("Partial success: {}/{} systems generated", succeeded, results.len());
        } else {
            error!("No battlesheet could be generated");
        }
    }

    if succeeded > 0 {
        ExitCode::SUCCESS
    } else {
        ExitCode::FAILURE
    }
}

fn list(input_root: &Path) {
    for system in GameSystem::ALL {
        let dir = input_root.join(system.default_input_dir());
        match load_records(&dir, |value| system.parse_record(value)) {
            Ok(report) => {
                println!("{} ({}):", system, dir.display());
                for loaded in &report.records {
                    let file = loaded
                        .path
                        .file_name()
                        .map(|name| name.to_string_lossy().into_owned())
                        .unwrap_or_default();
                    let name = loaded.record.display_name().unwrap_or("(sans nom)");
                    println!("  {} - {}", file, name);
                }
                for failure in &report.failures {
                    println!("  {}", failure);
                }
            }
            Err(e) => println!("{}: {}", system, e),
        }
    }
}
