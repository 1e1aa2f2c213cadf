//! docver - Documentation version resolver
//!
//! Main entry point for the docver CLI.

use clap::{Parser, Subcommand};
use docver::config::{validate_config_result, DocsConfig};
use docver::manifest;
use std::path::PathBuf;
use std::process;

/// docver - Resolve a Maven project's version into docs configuration
#[derive(Parser, Debug)]
#[command(name = "docver")]
#[command(version, about, long_about = None)]
struct Cli {
    /// Path to the Maven manifest (default: <docs-dir>/../pom.xml)
    #[arg(short, long, env = "DOCVER_MANIFEST")]
    manifest: Option<PathBuf>,

    /// Documentation source directory
    #[arg(short, long, default_value = ".")]
    docs_dir: PathBuf,

    /// Path to the base config file (default: <docs-dir>/docver.yaml when present)
    #[arg(short, long)]
    base: Option<PathBuf>,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand, Debug)]
enum Commands {
    /// Create a starter base config in the docs directory
    Init {
        /// Project name for the generated docs
        #[arg(short, long)]
        project: Option<String>,

        /// Author line for the generated docs
        #[arg(short, long)]
        author: Option<String>,

        /// Overwrite an existing base config
        #[arg(long)]
        force: bool,
    },

    /// Print the version resolved from the manifest
    Resolve,

    /// Emit the full docs configuration
    Emit {
        /// Output format (yaml, json, env)
        #[arg(short, long, default_value = "yaml")]
        format: String,

        /// Write to a file instead of stdout
        #[arg(short, long)]
        output: Option<PathBuf>,
    },

    /// Verify the manifest and the resolved configuration
    Check,

    /// Show the manifest's parsed coordinates
    Inspect {
        /// Print as JSON
        #[arg(long)]
        json: bool,
    },
}

/// Output format for the emit command
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum EmitFormat {
    Yaml,
    Json,
    Env,
}

fn main() {
    // Initialize logging
    if let Err(e) = docver::logging::init() {
        eprintln!("Failed to initialize logging: {}", e);
    }

    let cli = Cli::parse();

    if let Err(e) = run(cli) {
        eprintln!("Error: {}", e);
        process::exit(1);
    }
}

fn run(cli: Cli) -> docver::Result<()> {
    // Handle init first (writes the base config, needs no manifest)
    if let Commands::Init {
        ref project,
        ref author,
        force,
    } = cli.command
    {
        return handle_init_command(&cli, project.as_deref(), author.as_deref(), force);
    }

    let manifest_path = effective_manifest_path(&cli);
    let base = effective_base_path(&cli);

    tracing::debug!(
        manifest = %manifest_path.display(),
        base = ?base,
        "Resolved CLI paths"
    );

    match cli.command {
        Commands::Resolve => {
            let version = manifest::resolve_version(&manifest_path)?;
            println!("{}", version);
        }

        Commands::Emit { format, output } => {
            let format = parse_format(&format)?;
            let config = DocsConfig::from_manifest(&manifest_path, base.as_deref())?;

            let rendered = match format {
                EmitFormat::Yaml => config.to_yaml()?,
                EmitFormat::Json => config.to_json()?,
                EmitFormat::Env => config.to_env()?,
            };

            match output {
                Some(path) => {
                    std::fs::write(&path, &rendered)?;
                    println!("✓ Wrote configuration to {}", path.display());
                }
                None => print!("{}", rendered),
            }
        }

        Commands::Check => {
            let resolved = manifest::resolve(&manifest_path)?;
            println!("✓ Manifest parsed: {}", resolved.path.display());
            println!("✓ Version resolved: {}", resolved.version);

            let base_config = match &base {
                Some(path) => {
                    let config = DocsConfig::load(path)?;
                    println!("✓ Base config loaded: {}", path.display());
                    config
                }
                None => {
                    println!("  No base config found, using defaults");
                    DocsConfig::new()
                }
            };

            let config = base_config.apply_manifest(&resolved);
            validate_config_result(&config)?;
            println!(
                "✓ Configuration valid: version={}, release={}",
                config.version, config.release
            );
        }

        Commands::Inspect { json } => {
            let pom = manifest::load_pom(&manifest_path)?;

            if json {
                println!("{}", serde_json::to_string_pretty(&pom)?);
            } else {
                println!("Manifest:    {}", manifest_path.display());
                println!("Coordinates: {}", pom.coordinates());
                if let Some(name) = &pom.name {
                    println!("Name:        {}", name);
                }
                if let Some(packaging) = &pom.packaging {
                    println!("Packaging:   {}", packaging);
                }
                if let Some(parent) = &pom.parent {
                    println!("Parent:      {}", parent.coordinates());
                }
                match pom.effective_version() {
                    Some(version) => println!("Version:     {}", version),
                    None => println!("Version:     (not declared)"),
                }
            }
        }

        Commands::Init { .. } => {
            // Handled earlier in the function
            unreachable!("Init should be handled before manifest resolution")
        }
    }

    Ok(())
}

fn handle_init_command(
    cli: &Cli,
    project: Option<&str>,
    author: Option<&str>,
    force: bool,
) -> docver::Result<()> {
    let base_file = match &cli.base {
        Some(path) => path.clone(),
        None => DocsConfig::default_base_path(&cli.docs_dir),
    };

    // Refuse to clobber an existing base config
    if base_file.exists() && !force {
        println!("Base config already exists at {}", base_file.display());
        println!();
        println!("Pass --force to overwrite it.");
        return Ok(());
    }

    let mut config = DocsConfig::new();
    if let Some(project) = project {
        config.project = project.to_string();
    }
    if let Some(author) = author {
        config = config.with_author(author);
    }
    config.save(&base_file)?;

    println!("✓ Created base config at {}", base_file.display());
    println!();
    println!("Next steps:");
    println!("  1. Check the manifest resolves:");
    println!("     docver check");
    println!();
    println!("  2. Emit the docs configuration:");
    println!("     docver emit");

    Ok(())
}

/// Get the manifest path from the CLI options, falling back to the
/// conventional location relative to the docs directory
fn effective_manifest_path(cli: &Cli) -> PathBuf {
    match &cli.manifest {
        Some(path) => path.clone(),
        None => manifest::locate_manifest(&cli.docs_dir),
    }
}

/// Get the base config path: an explicit --base always wins, otherwise the
/// conventional file inside the docs directory when it exists
fn effective_base_path(cli: &Cli) -> Option<PathBuf> {
    if let Some(path) = &cli.base {
        return Some(path.clone());
    }

    let conventional = DocsConfig::default_base_path(&cli.docs_dir);
    conventional.exists().then_some(conventional)
}

fn parse_format(s: &str) -> docver::Result<EmitFormat> {
    match s.to_lowercase().as_str() {
        "yaml" | "yml" => Ok(EmitFormat::Yaml),
        "json" => Ok(EmitFormat::Json),
        "env" | "sh" => Ok(EmitFormat::Env),
        _ => Err(docver::DocverError::Parse(format!(
            "Invalid format: {}. Must be one of: yaml, json, env",
            s
        ))),
    }
}
