//! querygen CLI - compile annotated SQL queries into a typed descriptor model.

use clap::{Parser, Subcommand};
use querygen::emit::header;
use querygen::{generate, CodeGenRequest, Engine, ModelError, Settings};
use std::path::{Path, PathBuf};
use std::process::ExitCode;
use tracing::{info, Level};

#[derive(Parser)]
#[command(name = "querygen")]
#[command(about = "Compile annotated SQL queries into a typed descriptor model")]
#[command(version)]
struct Cli {
    /// Path to a YAML or JSON settings file (replaces the request's settings)
    #[arg(short, long)]
    config: Option<PathBuf>,

    /// Override the database engine
    #[arg(long)]
    engine: Option<String>,

    /// Output JSON result to stdout
    #[arg(long)]
    output_json: bool,

    /// Log format: text or json
    #[arg(long, default_value = "text")]
    log_format: String,

    /// Log verbosity: debug, info, warn, error
    #[arg(long, default_value = "info")]
    verbosity: String,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Compile a request and print the model
    Generate {
        /// Path to the request document (JSON or YAML)
        #[arg(short, long)]
        request: PathBuf,
    },

    /// Compile a request and report whether it succeeds
    Check {
        /// Path to the request document (JSON or YAML)
        #[arg(short, long)]
        request: PathBuf,
    },
}

fn main() -> ExitCode {
    match run() {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("{}", e.format_detailed());
            ExitCode::from(e.exit_code())
        }
    }
}

fn run() -> Result<(), ModelError> {
    let cli = Cli::parse();

    setup_logging(&cli.verbosity, &cli.log_format).map_err(ModelError::Config)?;

    match &cli.command {
        Commands::Generate { request } => {
            let request = load_request(&cli, request)?;
            let model = generate(&request)?;

            if cli.output_json {
                println!("{}", serde_json::to_string_pretty(&model)?);
            } else {
                print!("{}", header(&request.sqlc_version));
                println!("\nModel compiled ({})", request.settings.engine);
                println!("  Enums: {}", model.enums.len());
                println!("  Structs: {}", model.structs.len());
                println!(
                    "  Queries: {} ({} new row structs)",
                    model.queries.len(),
                    model.emitted_rows().count()
                );
                for query in &model.queries {
                    let ret = query.ret.type_name().unwrap_or_else(|| "Unit".to_string());
                    println!(
                        "    {} {} -> {}",
                        query.cmd.as_str(),
                        query.method_name,
                        ret
                    );
                }
                println!("  Fingerprint: {}", model.fingerprint()?);
            }
        }

        Commands::Check { request } => {
            let request = load_request(&cli, request)?;
            let model = generate(&request)?;

            if cli.output_json {
                let summary = serde_json::json!({
                    "status": "ok",
                    "enums": model.enums.len(),
                    "structs": model.structs.len(),
                    "queries": model.queries.len(),
                    "fingerprint": model.fingerprint()?,
                });
                println!("{}", serde_json::to_string_pretty(&summary)?);
            } else {
                println!(
                    "Check passed: {} queries compiled",
                    model.queries.len()
                );
            }
        }
    }

    Ok(())
}

/// Load the request and apply the settings file and engine overrides.
fn load_request(cli: &Cli, path: &Path) -> Result<CodeGenRequest, ModelError> {
    let mut request = CodeGenRequest::load(path)?;
    info!("Loaded request from {:?}", path);

    if let Some(ref config) = cli.config {
        request.settings = Settings::load(config)?;
        info!("Loaded settings from {:?}", config);
    }
    if let Some(ref engine) = cli.engine {
        request.settings.engine = Engine::from(engine.as_str());
    }

    Ok(request)
}

fn setup_logging(verbosity: &str, format: &str) -> Result<(), String> {
    let level = match verbosity.to_lowercase().as_str() {
        "debug" => Level::DEBUG,
        "info" => Level::INFO,
        "warn" => Level::WARN,
        "error" => Level::ERROR,
        _ => Level::INFO,
    };

    let subscriber = tracing_subscriber::fmt()
        .with_max_level(level)
        .with_writer(std::io::stderr)
        .with_target(false);

    match format {
        "json" => subscriber.json().init(),
        "text" => subscriber.init(),
        other => return Err(format!("Unknown log format '{}': use text or json", other)),
    }

    Ok(())
}
