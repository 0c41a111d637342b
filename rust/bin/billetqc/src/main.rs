//! `billetqc` — billet inspection and heat label tool.
//!
//! Records per-strand diameter checks into the shared production log and
//! prints the heat label.

mod commands;
mod config;

use clap::{Parser, Subcommand};

/// Billet casting quality control.
#[derive(Parser, Debug)]
#[command(name = "billetqc", about = "Billet casting QC: inspections and heat labels")]
struct Cli {
    /// Path to client config file (default: ~/.billetqc/config.toml).
    #[arg(long = "config", global = true)]
    config: Option<String>,

    /// Output format: table or json.
    #[arg(long = "output", short = 'o', global = true, default_value = "table")]
    output: String,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand, Debug)]
enum Commands {
    /// Evaluate a batch file, store the records and write the heat label.
    Inspect {
        /// Batch file (YAML or JSON).
        #[arg(short = 'f', long = "file")]
        file: String,
        /// Evaluate and print only; store nothing, write no label.
        #[arg(long)]
        dry_run: bool,
    },

    /// Render a heat label without touching the record store.
    Label {
        #[arg(long)]
        heat: String,
        #[arg(long)]
        grade: String,
        /// Casting machine id.
        #[arg(long)]
        ccm: String,
        /// Storage location as printed, e.g. "RM01 (Box 2)".
        #[arg(long)]
        storage: String,
        /// Billet count.
        #[arg(long)]
        count: u32,
        /// Short billet length in metres.
        #[arg(long, default_value_t = 0.0)]
        short: f64,
        /// Label date (default: today).
        #[arg(long)]
        date: Option<String>,
        /// Output file (default: <label-dir>/<heat>.pdf).
        #[arg(long)]
        out: Option<String>,
    },

    /// List stored inspection records.
    Records {
        /// Only rows whose heat or storage location contains this text.
        #[arg(long)]
        search: Option<String>,
    },

    /// PASS/REJECT tally over all stored records.
    Summary,

    /// Deviation over time, per strand.
    Trend,

    /// Print the effective site configuration.
    Site,

    /// Show version.
    Version,
}

fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "info".into()),
        )
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();

    let config_path = cli
        .config
        .map(std::path::PathBuf::from)
        .unwrap_or_else(config::ClientConfig::default_path);
    let config = config::ClientConfig::load(&config_path)?;
    let json_output = cli.output == "json";

    match cli.command {
        Commands::Inspect { file, dry_run } => {
            let text = std::fs::read_to_string(&file)?;
            commands::inspect::run(&config, &text, dry_run, json_output)?;
        }

        Commands::Label {
            heat,
            grade,
            ccm,
            storage,
            count,
            short,
            date,
            out,
        } => {
            let date = date.unwrap_or_else(|| {
                chrono::Local::now().date_naive().format("%Y-%m-%d").to_string()
            });
            let doc = billetqc::LabelDocument {
                heat_number: heat,
                grade,
                machine_id: ccm,
                date,
                storage_location: storage,
                billet_count: count,
                short_billet_length: short,
            };
            commands::label::run(&config, &doc, out.as_deref())?;
        }

        Commands::Records { search } => {
            commands::records::list(&config, search.as_deref(), json_output)?;
        }

        Commands::Summary => {
            commands::records::summary(&config, json_output)?;
        }

        Commands::Trend => {
            commands::records::trend(&config, json_output)?;
        }

        Commands::Site => {
            print!("{}", serde_yml::to_string(&config.site()?)?);
        }

        Commands::Version => {
            println!("billetqc v{}", env!("CARGO_PKG_VERSION"));
        }
    }

    Ok(())
}
