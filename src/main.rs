//! Wallfit CLI
//!
//! Size a video wall from the command line.
//!
//! Usage:
//!     wallfit fit --aspect-ratio 1.7778 --height 1000
//!     wallfit fit --width 6 --diagonal 7 --unit m --cabinet square --json
//!     wallfit convert 12 --from in --to mm
//!     wallfit cabinets

use clap::{Parser, Subcommand};
use serde::Serialize;
use thiserror::Error;

use wallfit::adapters::grid::GridScan;
use wallfit::core::cabinet::ParseCabinetError;
use wallfit::core::unit::ParseUnitError;
use wallfit::core::{convert, resolve, CabinetType, DimensionSet, LengthUnit, WallInputs};
use wallfit::ports::{FitSearch, NearestFit, SearchTarget};

/// Wallfit - size a cabinet video wall
#[derive(Parser)]
#[command(name = "wallfit")]
#[command(version)]
#[command(about = "Resolve wall dimensions and find the closest cabinet grids", long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Resolve dimensions and search for the closest cabinet grids
    Fit {
        /// Target aspect ratio (width / height, unitless)
        #[arg(long)]
        aspect_ratio: Option<f64>,

        /// Target height, in the selected unit
        #[arg(long)]
        height: Option<f64>,

        /// Target width, in the selected unit
        #[arg(long)]
        width: Option<f64>,

        /// Target diagonal, in the selected unit
        #[arg(long)]
        diagonal: Option<f64>,

        /// Input unit (mm, m, ft, in)
        #[arg(short, long, default_value = "mm")]
        unit: String,

        /// Cabinet type (wide or square)
        #[arg(short, long, default_value = "wide")]
        cabinet: String,

        /// Emit the result as JSON (millimeter values) instead of a report
        #[arg(long)]
        json: bool,
    },

    /// Convert a value between length units
    Convert {
        /// The value to convert
        value: f64,

        /// Source unit (mm, m, ft, in)
        #[arg(long, default_value = "mm")]
        from: String,

        /// Destination unit (mm, m, ft, in)
        #[arg(long)]
        to: String,
    },

    /// List the cabinet catalog
    Cabinets,
}

/// Errors reported at the CLI boundary
///
/// The core itself never fails; everything here is input validation.
#[derive(Debug, Error)]
enum CliError {
    #[error("expected exactly two of --aspect-ratio, --height, --width, --diagonal (got {0})")]
    WrongInputCount(usize),

    #[error(transparent)]
    Unit(#[from] ParseUnitError),

    #[error(transparent)]
    Cabinet(#[from] ParseCabinetError),

    #[error("failed to encode result: {0}")]
    Encode(#[from] serde_json::Error),
}

/// JSON shape of a fit result. All lengths in millimeters.
#[derive(Serialize)]
struct FitReport<'a> {
    dimensions: &'a DimensionSet,
    target: &'a SearchTarget,
    lower: &'a Option<wallfit::WallConfiguration>,
    upper: &'a Option<wallfit::WallConfiguration>,
}

fn main() {
    let cli = Cli::parse();

    let result = match cli.command {
        Commands::Fit {
            aspect_ratio,
            height,
            width,
            diagonal,
            unit,
            cabinet,
            json,
        } => cmd_fit(
            WallInputs {
                aspect_ratio,
                height,
                width,
                diagonal,
            },
            &unit,
            &cabinet,
            json,
        ),
        Commands::Convert { value, from, to } => cmd_convert(value, &from, &to),
        Commands::Cabinets => {
            cmd_cabinets();
            Ok(())
        }
    };

    if let Err(e) = result {
        eprintln!("Error: {}", e);
        std::process::exit(1);
    }
}

fn cmd_fit(inputs: WallInputs, unit: &str, cabinet: &str, json: bool) -> Result<(), CliError> {
    let unit: LengthUnit = unit.parse()?;
    let cabinet: CabinetType = cabinet.parse()?;

    let known = inputs.known_count();
    if known != 2 {
        return Err(CliError::WrongInputCount(known));
    }

    let dims = resolve(&inputs, unit);

    // Width+diagonal is the one pair compared on its own axes; every
    // other pair searches by the resolved width and height.
    let target = if inputs.width.is_some() && inputs.diagonal.is_some() {
        SearchTarget::WidthDiagonal {
            width: dims.width,
            diagonal: dims.diagonal,
        }
    } else {
        SearchTarget::WidthHeight {
            width: dims.width,
            height: dims.height,
        }
    };

    let fit = GridScan::default().nearest(&target, cabinet);

    if json {
        let report = FitReport {
            dimensions: &dims,
            target: &target,
            lower: &fit.lower,
            upper: &fit.upper,
        };
        println!("{}", serde_json::to_string_pretty(&report)?);
    } else {
        print_report(&dims, &fit, unit, cabinet);
    }

    Ok(())
}

fn cmd_convert(value: f64, from: &str, to: &str) -> Result<(), CliError> {
    let from: LengthUnit = from.parse()?;
    let to: LengthUnit = to.parse()?;

    let converted = convert(value, from, to);
    println!("{} {}", to.format_value(converted), to.label());
    Ok(())
}

fn cmd_cabinets() {
    println!("╔══════════════════════════════════════════════════════════════════╗");
    println!("║                         CABINET CATALOG                          ║");
    println!("╠══════════════════════════════════════════════════════════════════╣");
    for cabinet in [CabinetType::Wide, CabinetType::Square] {
        let dims = cabinet.dimensions();
        let line = format!(
            "{:?}: {} aspect, {} x {} mm",
            cabinet, cabinet.aspect_label(), dims.width, dims.height
        );
        println!("║  {:<64}║", line);
    }
    println!("╚══════════════════════════════════════════════════════════════════╝");
}

fn length(value_mm: f64, unit: LengthUnit) -> String {
    format!("{} {}", unit.format_value(unit.from_mm(value_mm)), unit.label())
}

fn print_report(dims: &DimensionSet, fit: &NearestFit, unit: LengthUnit, cabinet: CabinetType) {
    let cab_dims = cabinet.dimensions();

    println!("╔══════════════════════════════════════════════════════════════════╗");
    println!("║                     WALLFIT - CABINET GRID FIT                   ║");
    println!("╠══════════════════════════════════════════════════════════════════╣");
    println!(
        "║  {:<64}║",
        format!(
            "Cabinet: {:?} ({}, {} x {} mm)",
            cabinet, cabinet.aspect_label(), cab_dims.width, cab_dims.height
        )
    );
    println!(
        "║  {:<64}║",
        format!(
            "Target:  {} wide, {} tall",
            length(dims.width, unit),
            length(dims.height, unit)
        )
    );
    println!(
        "║  {:<64}║",
        format!(
            "         {} diagonal, ratio {:.4}",
            length(dims.diagonal, unit),
            dims.aspect_ratio
        )
    );
    println!("╠══════════════════════════════════════════════════════════════════╣");
    print_configuration("Below", fit.lower.as_ref(), unit);
    print_configuration("Above", fit.upper.as_ref(), unit);
    println!("╚══════════════════════════════════════════════════════════════════╝");
}

fn print_configuration(
    label: &str,
    config: Option<&wallfit::WallConfiguration>,
    unit: LengthUnit,
) {
    match config {
        Some(config) => {
            println!(
                "║  {:<64}║",
                format!(
                    "{}: {} x {} grid, {} cabinets",
                    label, config.columns, config.rows, config.total_cabinets
                )
            );
            println!(
                "║  {:<64}║",
                format!(
                    "       {} x {}, {} diagonal, {}",
                    length(config.width, unit),
                    length(config.height, unit),
                    length(config.diagonal, unit),
                    config.aspect_ratio
                )
            );
        }
        None => {
            println!(
                "║  {:<64}║",
                format!("{}: no configuration within a 50 x 50 grid", label)
            );
        }
    }
}
