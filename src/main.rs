// ABOUTME: cubby CLI resolving per-user directories and locating files in them
// ABOUTME: Initializes logging and env loading, then dispatches clap subcommands

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use cubby::{user_dirs, Domain, UserDirs};
use serde::Serialize;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

#[derive(Parser)]
#[command(
    name = "cubby",
    version,
    about = "Resolve per-user directories and locate files inside them"
)]
struct Cli {
    /// Application name the app-scoped domains are keyed on
    #[arg(long, global = true, default_value = "cubby")]
    app: String,

    /// Emit JSON instead of plain lines
    #[arg(long, global = true)]
    json: bool,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Print every domain the current platform defines
    List,
    /// Print the directory for one domain, without creating anything
    Dir {
        /// Domain name (config, data, cache, runtime, documents, ...)
        domain: Domain,
    },
    /// Resolve a file inside a domain, creating its directory chain
    Locate {
        /// Domain name (config, data, cache, runtime, documents, ...)
        domain: Domain,
        /// File name relative to the domain directory; may contain subdirectories
        name: String,
    },
}

#[derive(Serialize)]
struct DomainPath {
    domain: Domain,
    path: String,
}

fn main() -> Result<()> {
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "info".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    dotenvy::dotenv().ok();

    let cli = Cli::parse();
    let dirs = user_dirs(&cli.app).context("Failed to resolve user directories")?;
    tracing::info!(
        app = %cli.app,
        family = dirs.family(),
        domains = dirs.domains().count(),
        "resolved domain mapping"
    );

    match cli.command {
        Commands::List => list(&dirs, cli.json),
        Commands::Dir { domain } => dir(&dirs, domain, cli.json),
        Commands::Locate { domain, name } => locate(&dirs, domain, &name, cli.json),
    }
}

fn list(dirs: &UserDirs, json: bool) -> Result<()> {
    if json {
        let mut map = serde_json::Map::new();
        for domain in Domain::ALL {
            if let Some(path) = dirs.dir(domain) {
                map.insert(
                    domain.to_string(),
                    serde_json::Value::String(path.display().to_string()),
                );
            }
        }
        println!("{}", serde_json::Value::Object(map));
    } else {
        for domain in Domain::ALL {
            if let Some(path) = dirs.dir(domain) {
                println!("{}\t{}", domain, path.display());
            }
        }
    }
    Ok(())
}

fn dir(dirs: &UserDirs, domain: Domain, json: bool) -> Result<()> {
    let path = dirs
        .dir(domain)
        .with_context(|| format!("No directory for domain: {}", domain))?;
    print_path(domain, path.display().to_string(), json)
}

fn locate(dirs: &UserDirs, domain: Domain, name: &str, json: bool) -> Result<()> {
    let path = dirs.locate_file(domain, name)?;
    print_path(domain, path.display().to_string(), json)
}

fn print_path(domain: Domain, path: String, json: bool) -> Result<()> {
    if json {
        let out = DomainPath { domain, path };
        println!("{}", serde_json::to_string(&out)?);
    } else {
        println!("{}", path);
    }
    Ok(())
}
