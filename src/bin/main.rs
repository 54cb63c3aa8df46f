use clap::Parser;
use naca_rs::airfoil::sampling::Spacing;
use naca_rs::export::{export_csv_file, export_dat_file};
use naca_rs::{generate, Family, GeneratedAirfoil, GenerationOptions};
use std::error::Error;
use std::path::PathBuf;
use tracing_subscriber::EnvFilter;

/// Generate NACA airfoil sections, print their metrics and optionally export the coordinates
#[derive(Parser, Debug)]
#[command(name = "naca", version)]
struct Cli {
    /// Airfoil code, e.g. 2412, 23012, 63-018 or 72412
    code: String,

    /// Airfoil family: 4, 5, 6, 7 or 8
    #[arg(short, long, default_value = "4")]
    family: Family,

    /// JSON file with generation options (chord, n_points, spacing)
    #[arg(long)]
    config: Option<PathBuf>,

    /// Chord length
    #[arg(short, long)]
    chord: Option<f64>,

    /// Number of chordwise stations per surface
    #[arg(short = 'n', long)]
    points: Option<usize>,

    /// Station spacing: cosine or linear
    #[arg(short, long)]
    spacing: Option<Spacing>,

    /// Write the contour as a two column .dat file
    #[arg(long)]
    dat: Option<PathBuf>,

    /// Write the contour as a .csv file
    #[arg(long)]
    csv: Option<PathBuf>,

    /// Log debug output to stderr
    #[arg(short, long)]
    verbose: bool,
}

impl Cli {
    fn options(&self) -> Result<GenerationOptions, Box<dyn Error>> {
        let mut options = match &self.config {
            Some(path) => GenerationOptions::from_json(&std::fs::read_to_string(path)?)?,
            None => GenerationOptions::default(),
        };

        if let Some(chord) = self.chord {
            options.chord = chord;
        }
        if let Some(n) = self.points {
            options.n_points = n;
        }
        if let Some(spacing) = self.spacing {
            options.spacing = spacing;
        }

        Ok(options)
    }
}

fn init_logging(verbose: bool) {
    let filter = if verbose {
        EnvFilter::new("debug")
    } else {
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"))
    };

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .init();
}

fn export(cli: &Cli, section: &GeneratedAirfoil) -> Result<(), Box<dyn Error>> {
    let points = section.contour.points();

    if let Some(path) = &cli.dat {
        let title = format!("NACA {}", section.metrics.code);
        export_dat_file(path, &title, points)?;
        eprintln!("Exported .dat to {}", path.display());
    }

    if let Some(path) = &cli.csv {
        export_csv_file(path, points)?;
        eprintln!("Exported .csv to {}", path.display());
    }

    Ok(())
}

fn run(cli: &Cli) -> Result<(), Box<dyn Error>> {
    let options = cli.options()?;
    let section = generate(cli.family, &cli.code, &options)?;

    println!("{}", serde_json::to_string_pretty(&section.metrics)?);
    export(cli, &section)
}

fn main() {
    let cli = Cli::parse();
    init_logging(cli.verbose);

    if let Err(e) = run(&cli) {
        eprintln!("Failed to generate airfoil: {}", e);
        std::process::exit(1);
    }
}
