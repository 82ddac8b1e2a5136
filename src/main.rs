use anyhow::Context;
use clap::{Parser, Subcommand};
use std::fs;
use std::path::PathBuf;
use tracing::{debug, error};

use stacktune::assemble::{self, recommend, DOCUMENT_NAMES};
use stacktune::engine;
use stacktune::profile::ProfileLoader;

/// Derive tuned server configuration from a hardware and workload profile
#[derive(Parser)]
#[command(name = "stacktune")]
#[command(about = "Generate consistent, tuned server configuration documents", long_about = None)]
struct Cli {
    /// Enable verbose output (-v for debug, -vv for trace)
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    verbose: u8,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Generate the full document set plus the recommendation digest
    Generate {
        /// Path to the server profile TOML file
        #[arg(short, long)]
        profile: PathBuf,

        /// Directory to write the generated documents into
        #[arg(short, long, default_value = "./stacktune-out")]
        output: PathBuf,

        /// Also write the full plan as plan.json
        #[arg(long)]
        json: bool,
    },
    /// Print a single document to stdout
    Show {
        /// Path to the server profile TOML file
        #[arg(short, long)]
        profile: PathBuf,

        /// Document name (see `stacktune list`)
        document: String,
    },
    /// Validate a profile and report the field outside its domain
    Validate {
        /// Path to the server profile TOML file
        #[arg(short, long)]
        profile: PathBuf,
    },
    /// List the documents the generator produces
    List,
}

fn main() {
    let cli = Cli::parse();

    let log_level = match cli.verbose {
        0 => "info",
        1 => "debug",
        _ => "trace",
    };

    tracing_subscriber::fmt()
        .with_env_filter(log_level)
        .with_target(cli.verbose >= 2)
        .init();

    debug!("stacktune started with verbosity level: {}", cli.verbose);

    let result = match cli.command {
        Commands::Generate {
            profile,
            output,
            json,
        } => run_generate(profile, output, json),
        Commands::Show { profile, document } => run_show(profile, &document),
        Commands::Validate { profile } => run_validate(profile),
        Commands::List => run_list(),
    };

    if let Err(e) = result {
        error!("Fatal error: {}", e);
        eprintln!("Error: {e}");
        std::process::exit(1);
    }
}

fn run_generate(profile_path: PathBuf, output: PathBuf, json: bool) -> anyhow::Result<()> {
    let profile = ProfileLoader::from_path(&profile_path)?;
    let derived = engine::derive(&profile);
    let plan = assemble::assemble(&profile, &derived);

    fs::create_dir_all(&output)
        .with_context(|| format!("Failed to create output directory: {}", output.display()))?;

    let mut written = 0;
    for doc in plan.documents.iter() {
        let path = output.join(&doc.filename);
        fs::write(&path, &doc.body)
            .with_context(|| format!("Failed to write {}", path.display()))?;
        println!("✅ Wrote {}", path.display());
        written += 1;
    }

    let digest_path = output.join("RECOMMENDATIONS.md");
    fs::write(&digest_path, recommend::render_digest(&plan.recommendations))
        .with_context(|| format!("Failed to write {}", digest_path.display()))?;
    println!("✅ Wrote {}", digest_path.display());

    if json {
        let json_path = output.join("plan.json");
        let body = serde_json::to_string_pretty(&plan)?;
        fs::write(&json_path, body)
            .with_context(|| format!("Failed to write {}", json_path.display()))?;
        println!("✅ Wrote {}", json_path.display());
    }

    println!(
        "\n✅ Generated {} documents for {} cores / {}GB RAM / {} storage",
        written,
        profile.cpu_cores,
        profile.ram_gb,
        profile.storage_type.as_str()
    );
    Ok(())
}

fn run_show(profile_path: PathBuf, document: &str) -> anyhow::Result<()> {
    let profile = ProfileLoader::from_path(&profile_path)?;
    let derived = engine::derive(&profile);
    let plan = assemble::assemble(&profile, &derived);

    let doc = plan.document(document).ok_or_else(|| {
        stacktune::Error::NotFound(format!(
            "Unknown document '{document}'. Run `stacktune list` to see available documents."
        ))
    })?;

    print!("{}", doc.body);
    Ok(())
}

fn run_validate(profile_path: PathBuf) -> anyhow::Result<()> {
    let profile = ProfileLoader::from_path(&profile_path)?;
    println!(
        "✅ Profile is valid: {} cores, {}GB RAM, {} storage, {} visitors/day",
        profile.cpu_cores,
        profile.ram_gb,
        profile.storage_type.as_str(),
        profile.expected_traffic
    );
    Ok(())
}

fn run_list() -> anyhow::Result<()> {
    println!("Documents produced by `stacktune generate`:");
    for (name, filename) in DOCUMENT_NAMES {
        if *name == "object-cache" {
            println!("  {name} -> {filename} (only when has_redis is true)");
        } else {
            println!("  {name} -> {filename}");
        }
    }
    Ok(())
}
