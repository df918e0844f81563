use clap::{Parser, Subcommand, ValueEnum};
use std::path::{Path, PathBuf};
use pt_app::{
    AppError, AppResult, ExportMode, ExportRequest, SeedStrategy, load_network, order_system,
    run_export, selection,
};
use pt_branch::{ExportRecord, RECORD_FIELDS};
use pt_core::{ElementId, Id};
use pt_graph::{PortSource, SystemType};

#[derive(Parser)]
#[command(name = "pt-cli")]
#[command(about = "PipeTree CLI - piping network branch export", long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Validate network file syntax and structure
    Validate {
        /// Path to the network YAML or JSON file
        network_path: PathBuf,
    },
    /// List system abbreviations found on pipes
    Systems {
        /// Path to the network YAML or JSON file
        network_path: PathBuf,
    },
    /// List the start pipe of every system matching a name
    Seeds {
        /// Path to the network YAML or JSON file
        network_path: PathBuf,
        /// Substring of the system name
        system: String,
    },
    /// Export numbered branches of a system
    Export {
        /// Path to the network YAML or JSON file
        network_path: PathBuf,
        /// Substring of the system name
        #[arg(long)]
        system: String,
        #[arg(long, value_enum, default_value_t = Mode::Supply)]
        mode: Mode,
        /// Seed element ids (defaults to the start pipes of the system)
        #[arg(long = "seed")]
        seeds: Vec<u32>,
        #[arg(long, value_enum, default_value_t = Format::Csv)]
        format: Format,
        /// Output file path (optional, defaults to stdout)
        #[arg(short, long)]
        output: Option<PathBuf>,
    },
    /// Print the calculation order of a system's elements
    Order {
        /// Path to the network YAML or JSON file
        network_path: PathBuf,
        /// Substring of the system name
        #[arg(long)]
        system: String,
    },
}

#[derive(Clone, Copy, Debug, ValueEnum)]
enum Mode {
    Supply,
    Return,
    Walk,
}

#[derive(Clone, Copy, Debug, ValueEnum)]
enum Format {
    Csv,
    Json,
}

fn main() -> AppResult<()> {
    // Initialize tracing
    tracing_subscriber::fmt::init();

    let cli = Cli::parse();

    match cli.command {
        Commands::Validate { network_path } => cmd_validate(&network_path),
        Commands::Systems { network_path } => cmd_systems(&network_path),
        Commands::Seeds {
            network_path,
            system,
        } => cmd_seeds(&network_path, &system),
        Commands::Export {
            network_path,
            system,
            mode,
            seeds,
            format,
            output,
        } => cmd_export(
            &network_path,
            system,
            mode,
            &seeds,
            format,
            output.as_deref(),
        ),
        Commands::Order {
            network_path,
            system,
        } => cmd_order(&network_path, &system),
    }
}

fn cmd_validate(network_path: &Path) -> AppResult<()> {
    println!("Validating network: {}", network_path.display());
    let loaded = load_network(network_path)?;
    println!(
        "✓ Network is valid ({} elements, {} ports)",
        loaded.network.elements().len(),
        loaded.network.ports_all().len()
    );
    Ok(())
}

fn cmd_systems(network_path: &Path) -> AppResult<()> {
    let loaded = load_network(network_path)?;
    let systems = selection::system_names(&loaded.network, &loaded.settings.abbreviation_key);

    if systems.is_empty() {
        println!("No systems found in network");
    } else {
        println!("Systems in {}:", loaded.name);
        for name in systems {
            println!("  {}", name);
        }
    }
    Ok(())
}

fn cmd_seeds(network_path: &Path, system: &str) -> AppResult<()> {
    let loaded = load_network(network_path)?;
    let starts = selection::start_pipes(
        &loaded.network,
        &loaded.settings.tag_key,
        &loaded.settings.attributes.flow_keys,
        system,
    );

    if starts.is_empty() {
        println!("No pipes found for system: {}", system);
        return Ok(());
    }
    for start in starts {
        let name = loaded
            .network
            .element(start.element)
            .map(|e| e.name.as_str())
            .unwrap_or_default();
        println!(
            "  {} - {} ({}, {:.3} l/s)",
            start.element,
            name,
            start.system,
            start.flow * 1000.0
        );
    }
    Ok(())
}

fn cmd_export(
    network_path: &Path,
    system: String,
    mode: Mode,
    seeds: &[u32],
    format: Format,
    output: Option<&Path>,
) -> AppResult<()> {
    let loaded = load_network(network_path)?;

    let seeds = if seeds.is_empty() {
        SeedStrategy::StartPipes
    } else {
        let ids = seeds
            .iter()
            .map(|&raw| Id::try_from_index(raw, "seed"))
            .collect::<Result<Vec<ElementId>, _>>()?;
        SeedStrategy::Explicit(ids)
    };
    let mode = match mode {
        Mode::Supply => ExportMode::Trace(SystemType::Supply),
        Mode::Return => ExportMode::Trace(SystemType::Return),
        Mode::Walk => ExportMode::Walk,
    };

    let request = ExportRequest {
        system,
        mode,
        seeds,
    };
    let outcome = run_export(&loaded.network, &loaded.settings, &request)?;

    for seed in &outcome.assembly.abandoned {
        eprintln!("⚠ Chain from {} abandoned: element unknown to the network", seed);
    }

    let content = match format {
        Format::Csv => render_csv(&outcome.records),
        Format::Json => serde_json::to_string_pretty(&outcome.records)
            .map_err(|e| AppError::InvalidInput(e.to_string()))?,
    };

    if let Some(path) = output {
        std::fs::write(path, content)?;
        println!(
            "✓ Exported {} records in {} branches to {} ({})",
            outcome.records.len(),
            outcome.assembly.branches.len(),
            path.display(),
            outcome.export_id
        );
    } else {
        print!("{}", content);
    }
    Ok(())
}

fn cmd_order(network_path: &Path, system: &str) -> AppResult<()> {
    let loaded = load_network(network_path)?;
    let order = order_system(&loaded.network, &loaded.settings.tag_key, system)?;

    println!("Calculation order for {}:", system);
    for (position, id) in order.iter().enumerate() {
        let name = loaded
            .network
            .element(*id)
            .map(|e| e.name.as_str())
            .unwrap_or_default();
        println!("  {:>4}  {} - {}", position, id, name);
    }
    Ok(())
}

fn render_csv(records: &[ExportRecord]) -> String {
    let mut csv = RECORD_FIELDS.join(",");
    csv.push('\n');
    for record in records {
        let row: Vec<String> = record.values().iter().map(|v| csv_field(v)).collect();
        csv.push_str(&row.join(","));
        csv.push('\n');
    }
    csv
}

fn csv_field(value: &str) -> String {
    if value.contains([',', '"', '\n']) {
        format!("\"{}\"", value.replace('"', "\"\""))
    } else {
        value.to_string()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn csv_quotes_only_when_needed() {
        assert_eq!(csv_field("Pipe 1"), "Pipe 1");
        assert_eq!(csv_field("DN25, steel"), "\"DN25, steel\"");
        assert_eq!(csv_field("6\" pipe"), "\"6\"\" pipe\"");
    }

    #[test]
    fn csv_header_matches_record_fields() {
        let csv = render_csv(&[]);
        assert_eq!(csv, format!("{}\n", RECORD_FIELDS.join(",")));
    }
}
