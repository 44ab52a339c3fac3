//! wirectl - Central controller wiring CLI
//!
//! Offline front end for the availability calculator: reads a board
//! descriptor snapshot and prints which ports and sequence slots are free.

use anyhow::{Context, Result};
use clap::{Args, Parser, Subcommand, ValueEnum};
use colored::Colorize;
use std::path::{Path, PathBuf};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

use wiring_core::profile::PROFILE_FILE_NAME;
use wiring_core::{
    AvailabilitySummary, BoardDescriptor, Direction, HardwareProfile, PortAvailability,
    PortAvailabilityCalculator, SequenceCapacity, DEFAULT_SEQUENCE_CAPACITY,
};

#[derive(Parser)]
#[command(name = "wirectl")]
#[command(version = wiring_core::VERSION)]
#[command(about = "Central controller port/slot availability", long_about = None)]
struct Cli {
    /// Enable verbose logging
    #[arg(long, short = 'v', global = true)]
    verbose: bool,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Show which ports and sequence slots can take a new assignment
    Availability {
        /// Board descriptor JSON snapshot
        #[arg(long)]
        board: PathBuf,
        /// Which side of the board to show
        #[arg(long, value_enum, default_value_t = DirectionArg::Both)]
        direction: DirectionArg,
        #[command(flatten)]
        capacity: CapacityArgs,
        /// Output format
        #[arg(long, value_enum, default_value_t = OutputFormat::Table)]
        format: OutputFormat,
    },
    /// Check a board descriptor for integrity violations
    Validate {
        /// Board descriptor JSON snapshot
        #[arg(long)]
        board: PathBuf,
        #[command(flatten)]
        capacity: CapacityArgs,
    },
    /// Manage hardware profiles (init, show)
    Profile {
        #[command(subcommand)]
        command: ProfileCommands,
    },
}

#[derive(Subcommand)]
enum ProfileCommands {
    /// Write a .wiringprofile into a directory
    Init {
        /// Target directory
        #[arg(long, default_value = ".")]
        path: PathBuf,
        /// Board generation name
        #[arg(long, default_value = "default")]
        name: String,
        /// Sequence slots per port
        #[arg(long, default_value_t = DEFAULT_SEQUENCE_CAPACITY)]
        capacity: u32,
        /// Overwrite an existing profile
        #[arg(long)]
        force: bool,
    },
    /// Print a hardware profile
    Show {
        /// Profile file (defaults to ./.wiringprofile)
        path: Option<PathBuf>,
    },
}

#[derive(Args)]
struct CapacityArgs {
    /// Hardware profile YAML
    #[arg(long)]
    profile: Option<PathBuf>,
    /// Sequence slots per port (overrides --profile)
    #[arg(long)]
    capacity: Option<u32>,
}

#[derive(Clone, Copy, PartialEq, Eq, ValueEnum)]
enum DirectionArg {
    Input,
    Output,
    Both,
}

impl DirectionArg {
    fn directions(self) -> &'static [Direction] {
        match self {
            DirectionArg::Input => &[Direction::Input],
            DirectionArg::Output => &[Direction::Output],
            DirectionArg::Both => &Direction::ALL,
        }
    }
}

#[derive(Clone, Copy, PartialEq, Eq, ValueEnum)]
enum OutputFormat {
    Table,
    Json,
    Yaml,
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    let default_filter = if cli.verbose { "debug" } else { "warn" };
    tracing_subscriber::registry()
        .with(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_filter)),
        )
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .init();

    match cli.command {
        Commands::Availability {
            board,
            direction,
            capacity,
            format,
        } => handle_availability(&board, direction, &capacity, format),
        Commands::Validate { board, capacity } => handle_validate(&board, &capacity),
        Commands::Profile { command } => match command {
            ProfileCommands::Init {
                path,
                name,
                capacity,
                force,
            } => handle_profile_init(&path, name, capacity, force),
            ProfileCommands::Show { path } => handle_profile_show(path),
        },
    }
}

/// Capacity resolution: --capacity, then --profile, then ./.wiringprofile, then default
fn resolve_calculator(args: &CapacityArgs) -> Result<PortAvailabilityCalculator> {
    if let Some(slots) = args.capacity {
        return Ok(PortAvailabilityCalculator::new(SequenceCapacity::new(slots)?));
    }

    if let Some(path) = &args.profile {
        let profile = HardwareProfile::load(path)
            .with_context(|| format!("loading hardware profile {}", path.display()))?;
        return Ok(PortAvailabilityCalculator::from_profile(&profile)?);
    }

    let local = std::env::current_dir()?.join(PROFILE_FILE_NAME);
    if local.exists() {
        tracing::debug!(path = %local.display(), "using local hardware profile");
        let profile = HardwareProfile::load(&local)
            .with_context(|| format!("loading hardware profile {}", local.display()))?;
        return Ok(PortAvailabilityCalculator::from_profile(&profile)?);
    }

    Ok(PortAvailabilityCalculator::default())
}

fn load_board(path: &Path) -> Result<BoardDescriptor> {
    BoardDescriptor::load(path)
        .with_context(|| format!("loading board descriptor {}", path.display()))
}

fn handle_availability(
    board_path: &Path,
    direction: DirectionArg,
    capacity: &CapacityArgs,
    format: OutputFormat,
) -> Result<()> {
    let calculator = resolve_calculator(capacity)?;
    let board = load_board(board_path)?;

    match direction {
        DirectionArg::Both => {
            let availability = calculator.compute_board(&board)?;
            match format {
                OutputFormat::Json => println!("{}", serde_json::to_string_pretty(&availability)?),
                OutputFormat::Yaml => println!("{}", serde_yaml::to_string(&availability)?),
                OutputFormat::Table => {
                    for &side in direction.directions() {
                        print_table(side, availability.direction(side));
                    }
                }
            }
        }
        DirectionArg::Input | DirectionArg::Output => {
            let side = direction.directions()[0];
            let ports = calculator.compute_direction(&board, side)?;
            match format {
                OutputFormat::Json => println!("{}", serde_json::to_string_pretty(&ports)?),
                OutputFormat::Yaml => println!("{}", serde_yaml::to_string(&ports)?),
                OutputFormat::Table => print_table(side, &ports),
            }
        }
    }

    Ok(())
}

fn print_table(direction: Direction, ports: &[PortAvailability]) {
    let summary = AvailabilitySummary::from_ports(ports);
    let title = match direction {
        Direction::Input => "Inputs",
        Direction::Output => "Outputs",
    };

    println!(
        "\n{} ({} ports, {} available, {}/{} slots free)",
        title.bold(),
        summary.ports_total,
        summary.ports_available,
        summary.slots_free,
        summary.slots_total
    );

    if ports.is_empty() {
        println!("  (no ports)");
        return;
    }

    println!("  {:<6} {:<12} {}", "PORT", "STATUS", "SEQUENCES");
    for port in ports {
        let status = if port.is_available {
            format!("{:<12}", "available").green()
        } else {
            format!("{:<12}", "full").red()
        };
        let slots: Vec<String> = port
            .sequence_slots
            .iter()
            .map(|slot| {
                if slot.is_available {
                    slot.sequence_position.to_string().green().to_string()
                } else {
                    slot.sequence_position.to_string().red().strikethrough().to_string()
                }
            })
            .collect();
        println!("  {:<6} {} {}", port.port_position, status, slots.join(" "));
    }
}

fn handle_validate(board_path: &Path, capacity: &CapacityArgs) -> Result<()> {
    let calculator = resolve_calculator(capacity)?;
    let board = load_board(board_path)?;

    let mut failed = false;
    for &direction in &Direction::ALL {
        match calculator.compute_direction(&board, direction) {
            Ok(ports) => println!(
                "{} {}: {} ports, capacity {}",
                "✓".green(),
                direction,
                ports.len(),
                calculator.sequence_capacity()
            ),
            Err(e) => {
                failed = true;
                println!("{} {}: {}", "✗".red(), direction, e);
            }
        }
    }

    if failed {
        eprintln!("\nBoard descriptor is inconsistent; availability is unknown.");
        std::process::exit(1);
    }

    Ok(())
}

fn handle_profile_init(dir: &Path, name: String, capacity: u32, force: bool) -> Result<()> {
    let target = dir.join(PROFILE_FILE_NAME);
    if target.exists() && !force {
        eprintln!("Error: {} already exists (use --force to overwrite)", target.display());
        std::process::exit(1);
    }

    let profile = HardwareProfile::new(name, capacity);
    profile.validate()?;
    profile
        .save(&target)
        .with_context(|| format!("writing {}", target.display()))?;

    println!("✓ Hardware profile written");
    println!("  Name: {}", profile.metadata.name);
    println!("  Sequence capacity: {}", profile.spec.sequence_capacity);
    println!("  Location: {}", target.display());

    Ok(())
}

fn handle_profile_show(path: Option<PathBuf>) -> Result<()> {
    let path = match path {
        Some(path) => path,
        None => std::env::current_dir()?.join(PROFILE_FILE_NAME),
    };

    let profile = HardwareProfile::load(&path)
        .with_context(|| format!("loading hardware profile {}", path.display()))?;

    println!("Name: {}", profile.metadata.name);
    if let Some(description) = &profile.metadata.description {
        println!("Description: {}", description);
    }
    println!("Sequence capacity: {}", profile.spec.sequence_capacity);

    Ok(())
}
