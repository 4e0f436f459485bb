use cl_app::{
    AppError, AppResult, RunOptions, SizingJob, SizingReport, load_job, run_sizing, save_job,
};
use cl_sizing::{FacilityType, InsulationType, insulation};
use clap::{Parser, Subcommand};
use std::path::{Path, PathBuf};
use tracing::debug;
use tracing_subscriber::EnvFilter;

#[derive(Parser)]
#[command(name = "cl-cli")]
#[command(about = "ColdLoad CLI - Cold-room refrigeration load sizing", long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Size a job file (YAML or JSON)
    Size {
        /// Path to the job file
        job_path: PathBuf,
        #[command(flatten)]
        output: OutputArgs,
    },
    /// Size a room from command-line values; unset values use the stock freezer room
    Quick {
        #[command(flatten)]
        room: RoomArgs,
        #[command(flatten)]
        output: OutputArgs,
    },
    /// Write a default job file to start from
    Init {
        /// Output path (.yaml or .json)
        path: PathBuf,
        /// Overwrite an existing file
        #[arg(long)]
        force: bool,
    },
    /// List insulation materials and their conductivity
    Insulation,
}

#[derive(clap::Args)]
struct OutputArgs {
    /// Request an engineering review after sizing
    #[arg(long)]
    advise: bool,
    /// Print the report as JSON
    #[arg(long)]
    json: bool,
    /// Use values as entered, without range clamping
    #[arg(long)]
    strict: bool,
}

#[derive(clap::Args)]
struct RoomArgs {
    /// Facility type (SUPERMARKET, COLD_STORAGE, RETAIL)
    #[arg(long, value_parser = parse_facility)]
    facility: Option<FacilityType>,
    /// Room width in m
    #[arg(long)]
    width: Option<f64>,
    /// Room length in m
    #[arg(long)]
    length: Option<f64>,
    /// Room height in m
    #[arg(long)]
    height: Option<f64>,
    /// Insulation core (PUR, PIR, EPS)
    #[arg(long, value_parser = parse_insulation)]
    insulation: Option<InsulationType>,
    /// Insulation thickness in mm
    #[arg(long)]
    thickness: Option<f64>,
    /// Ambient temperature in °C
    #[arg(long, allow_hyphen_values = true)]
    ambient: Option<f64>,
    /// Target temperature in °C
    #[arg(long, allow_hyphen_values = true)]
    target: Option<f64>,
    /// Product mass in kg
    #[arg(long)]
    mass: Option<f64>,
    /// Product specific heat in kJ/(kg·K)
    #[arg(long)]
    cp: Option<f64>,
    /// Pull-down time in hours
    #[arg(long)]
    hours: Option<f64>,
}

fn parse_insulation(s: &str) -> Result<InsulationType, String> {
    s.parse::<InsulationType>().map_err(|e| e.to_string())
}

fn parse_facility(s: &str) -> Result<FacilityType, String> {
    FacilityType::all()
        .into_iter()
        .find(|f| f.tag().eq_ignore_ascii_case(s.trim()))
        .ok_or_else(|| format!("unknown facility type '{s}'"))
}

fn main() -> AppResult<()> {
    tracing_subscriber::fmt()
        .with_env_filter(log_filter(std::env::var("RUST_LOG").ok()))
        .init();

    let cli = Cli::parse();

    match cli.command {
        Commands::Size { job_path, output } => cmd_size(&job_path, &output),
        Commands::Quick { room, output } => cmd_quick(&room, &output),
        Commands::Init { path, force } => cmd_init(&path, force),
        Commands::Insulation => {
            cmd_insulation();
            Ok(())
        }
    }
}

/// Filter from a `RUST_LOG`-style directive, `info` when absent or unparsable.
fn log_filter(directive: Option<String>) -> EnvFilter {
    directive
        .and_then(|d| EnvFilter::try_new(d).ok())
        .unwrap_or_else(|| EnvFilter::new("info"))
}

fn run_options(output: &OutputArgs) -> RunOptions {
    RunOptions {
        clamp: !output.strict,
        advise: output.advise,
        ..RunOptions::default()
    }
}

fn cmd_size(job_path: &Path, output: &OutputArgs) -> AppResult<()> {
    let job = load_job(job_path)?;
    debug!(path = %job_path.display(), name = %job.name, "job loaded");
    let report = run_sizing(&job, &run_options(output))?;
    print_report(&report, output.json)
}

fn cmd_quick(room: &RoomArgs, output: &OutputArgs) -> AppResult<()> {
    let mut job = SizingJob {
        name: "Quick sizing".to_string(),
        ..SizingJob::default()
    };
    let input = &mut job.input;

    if let Some(f) = room.facility {
        job.facility = f;
    }
    if let Some(v) = room.width {
        input.room_width_m = v;
    }
    if let Some(v) = room.length {
        input.room_length_m = v;
    }
    if let Some(v) = room.height {
        input.room_height_m = v;
    }
    if let Some(v) = room.insulation {
        input.insulation_type = v;
    }
    if let Some(v) = room.thickness {
        input.insulation_thickness_mm = v;
    }
    if let Some(v) = room.ambient {
        input.ambient_temp_c = v;
    }
    if let Some(v) = room.target {
        input.target_temp_c = v;
    }
    if let Some(v) = room.mass {
        input.product_mass_kg = v;
    }
    if let Some(v) = room.cp {
        input.product_cp_kj_kgk = v;
    }
    if let Some(v) = room.hours {
        input.loading_time_hours = v;
    }

    let report = run_sizing(&job, &run_options(output))?;
    print_report(&report, output.json)
}

fn print_report(report: &SizingReport, json: bool) -> AppResult<()> {
    if json {
        println!("{}", report.to_json()?);
    } else {
        print!("{}", report.render_text());
    }
    Ok(())
}

fn cmd_init(path: &Path, force: bool) -> AppResult<()> {
    if path.exists() && !force {
        return Err(AppError::Validation(format!(
            "{} already exists (use --force to overwrite)",
            path.display()
        )));
    }
    save_job(path, &SizingJob::default())?;
    println!("✓ Wrote default job to {}", path.display());
    Ok(())
}

fn cmd_insulation() {
    println!("Insulation materials:");
    for entry in insulation::catalog() {
        println!(
            "  {:<4} {:<22} {:.3} W/(m·K)",
            entry.tag, entry.display_name, entry.conductivity_w_mk
        );
    }
}
