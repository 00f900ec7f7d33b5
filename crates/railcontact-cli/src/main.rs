//! railcontact CLI: solve scenarios, sweep creep curves, list materials.

use clap::{Parser, Subcommand};
use tracing::Level;
use tracing_subscriber::FmtSubscriber;

mod commands;

#[derive(Parser)]
#[command(name = "railcontact")]
#[command(version, about = "Wheel/rail contact mechanics: normal contact, creep forces and wear")]
struct Cli {
    /// Log level.
    #[arg(
        short,
        long,
        global = true,
        default_value = "info",
        value_parser = ["trace", "debug", "info", "warn", "error"]
    )]
    log_level: String,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Solve one contact scenario.
    Solve {
        /// Scenario file (TOML). The reference scenario is used if omitted.
        #[arg(short, long)]
        config: Option<String>,

        /// Write the full outcome as JSON.
        #[arg(long)]
        json: Option<String>,
    },

    /// Sweep one creepage component and tabulate the creep forces.
    Sweep {
        /// Scenario file (TOML). The reference scenario is used if omitted.
        #[arg(short, long)]
        config: Option<String>,

        /// Swept component (longitudinal, lateral, spin).
        #[arg(short, long, default_value = "longitudinal")]
        axis: String,

        #[arg(long, default_value_t = 0.0, allow_negative_numbers = true)]
        from: f64,

        #[arg(long, default_value_t = 0.01, allow_negative_numbers = true)]
        to: f64,

        #[arg(long, default_value_t = 21)]
        steps: usize,

        /// Output CSV file path.
        #[arg(short, long)]
        output: Option<String>,
    },

    /// List the built-in material grades.
    Materials,

    /// Validate a scenario file without solving it.
    Validate {
        /// Path to the scenario file (TOML).
        path: String,
    },
}

fn parse_level(name: &str) -> Level {
    match name {
        "trace" => Level::TRACE,
        "debug" => Level::DEBUG,
        "warn" => Level::WARN,
        "error" => Level::ERROR,
        _ => Level::INFO,
    }
}

fn main() {
    let cli = Cli::parse();

    let subscriber = FmtSubscriber::builder()
        .with_max_level(parse_level(&cli.log_level))
        .with_target(false)
        .finish();
    if let Err(e) = tracing::subscriber::set_global_default(subscriber) {
        eprintln!("Warning: could not install logger: {e}");
    }

    let result = match cli.command {
        Commands::Solve { config, json } => commands::solve(config.as_deref(), json.as_deref()),
        Commands::Sweep {
            config,
            axis,
            from,
            to,
            steps,
            output,
        } => commands::sweep(config.as_deref(), &axis, from, to, steps, output.as_deref()),
        Commands::Materials => commands::materials(),
        Commands::Validate { path } => commands::validate(&path),
    };

    if let Err(e) = result {
        eprintln!("Error: {e}");
        std::process::exit(1);
    }
}
