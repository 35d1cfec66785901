//! orrery: synthetic solar-system generator and trajectory visualizer
//!
//! `generate` produces the initial-condition dataset the external N-body
//! integrator consumes; `plot` reads the integrator's trajectory output
//! and renders it, statically or animated, on screen or to file.

use anyhow::{Context, Result};
use clap::{Parser, Subcommand, ValueEnum};
use rand::SeedableRng;
use rand_chacha::ChaChaRng;
use std::path::{Path, PathBuf};
use tracing::info;

use generator::{synthesize, SynthesisBounds};
use trajectory::Histories;

#[derive(Parser)]
#[command(name = "orrery")]
#[command(about = "Synthetic solar-system generator and trajectory visualizer")]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Generate a synthetic initial-condition dataset
    Generate {
        /// Number of bodies to synthesize (the central body comes extra)
        #[arg(short, long, default_value = "1000")]
        count: usize,

        /// RNG seed for a reproducible population; drawn from OS entropy
        /// when omitted
        #[arg(long)]
        seed: Option<u64>,

        /// Output dataset path
        #[arg(short, long, default_value = "solarsys.dat")]
        output: PathBuf,
    },

    /// Render trajectories from integrator output
    Plot {
        /// Path to the trajectory data file
        #[arg(long, default_value = "solargraph.dat")]
        file: PathBuf,

        /// Type of view to render
        #[arg(long, value_enum, default_value_t = PlotKind::Trajectories)]
        plot: PlotKind,

        /// Save to file instead of displaying a window
        #[arg(long)]
        save: bool,

        /// Filename for the saved static plot
        #[arg(long, default_value = "trajectories.png")]
        filename: PathBuf,

        /// Filename for the saved animation
        #[arg(long, default_value = "trajectories.gif")]
        animate_filename: PathBuf,

        /// Bodies to restrict rendering to; all bodies when omitted
        #[arg(long, num_args = 0..)]
        bodies: Vec<String>,
    },
}

#[derive(ValueEnum, Clone, Copy, Debug)]
enum PlotKind {
    /// Static multi-body trajectory plot
    Trajectories,
    /// Frame-by-frame animation
    Animation,
}

fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("info")),
        )
        .init();

    match Cli::parse().command {
        Commands::Generate {
            count,
            seed,
            output,
        } => generate(count, seed, &output),
        Commands::Plot {
            file,
            plot,
            save,
            filename,
            animate_filename,
            bodies,
        } => render(&file, plot, save, &filename, &animate_filename, bodies),
    }
}

fn generate(count: usize, seed: Option<u64>, output: &Path) -> Result<()> {
    let mut rng = match seed {
        Some(seed) => ChaChaRng::seed_from_u64(seed),
        None => ChaChaRng::from_os_rng(),
    };

    let bounds = SynthesisBounds::with_count(count);
    let population = synthesize(&mut rng, &bounds)?;
    celestial::write_dataset_file(output, &population)
        .with_context(|| format!("writing dataset to {}", output.display()))?;

    info!(
        path = %output.display(),
        bodies = population.len(),
        "dataset generated"
    );
    Ok(())
}

fn render(
    file: &Path,
    kind: PlotKind,
    save: bool,
    filename: &Path,
    animate_filename: &Path,
    bodies: Vec<String>,
) -> Result<()> {
    let histories = Histories::from_path(file)
        .with_context(|| format!("reading trajectory data from {}", file.display()))?;
    info!(bodies = histories.body_count(), "trajectory data loaded");

    // Selection is validated before any rendering work begins
    let requested = (!bodies.is_empty()).then_some(bodies);
    let selection = histories.select(requested.as_deref())?;

    match (kind, save) {
        (PlotKind::Trajectories, true) => {
            let image = plotter::render_static(&histories, &selection, plotter::STATIC_SIZE)?;
            plotter::save_png(&image, filename)?;
        }
        (PlotKind::Trajectories, false) => {
            let image = plotter::render_static(&histories, &selection, plotter::WINDOW_SIZE)?;
            plotter::display_static(&image, "Celestial body trajectories")?;
        }
        (PlotKind::Animation, true) => {
            plotter::save_gif(&histories, &selection, animate_filename)?;
        }
        (PlotKind::Animation, false) => {
            plotter::display_animation(&histories, &selection, "Celestial body animation")?;
        }
    }
    Ok(())
}
