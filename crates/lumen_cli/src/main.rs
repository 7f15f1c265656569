use std::io::Read;
use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use lumen_core::{load_scene, BrightnessInput, IlluminanceInput, Scene};
use lumen_renderer::{render, Color, RenderConfig, World, MAX_DEPTH};

#[derive(Parser)]
#[command(name = "lumen")]
#[command(about = "Whitted-style ray tracer and point lighting calculators", long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Render a scene to an image file
    Render {
        /// JSON scene file (renders the built-in demo scene when omitted)
        #[arg(long, short = 's', value_name = "PATH")]
        scene: Option<PathBuf>,

        /// Output image; `.ppm` is written as plain text, other extensions by format
        #[arg(long, short = 'o', value_name = "PATH", default_value = "output.ppm")]
        output: PathBuf,

        /// Image width in pixels
        #[arg(long, default_value_t = 800)]
        width: u32,

        /// Image height in pixels
        #[arg(long, default_value_t = 800)]
        height: u32,

        /// Maximum reflection depth
        #[arg(long, default_value_t = MAX_DEPTH)]
        max_depth: u32,
    },
    /// Illuminance from one light at a point on a triangle
    Illuminance {
        /// Input file (reads stdin when omitted)
        #[arg(value_name = "PATH")]
        input: Option<PathBuf>,
    },
    /// Phong brightness from several lights at a point on a triangle
    Brightness {
        /// Input file
        #[arg(value_name = "PATH", default_value = "input.txt")]
        input: PathBuf,
    },
}

fn main() -> Result<()> {
    env_logger::Builder::from_default_env()
        .filter_level(log::LevelFilter::Info)
        .init();

    let cli = Cli::parse();

    match cli.command {
        Commands::Render {
            scene,
            output,
            width,
            height,
            max_depth,
        } => {
            let config = RenderConfig {
                width,
                height,
                max_depth,
            };
            run_render(scene.as_deref(), &output, &config)
        }
        Commands::Illuminance { input } => {
            let source = match input {
                Some(path) => read_input(&path)?,
                None => {
                    let mut source = String::new();
                    std::io::stdin()
                        .read_to_string(&mut source)
                        .context("Failed to read illuminance input from stdin")?;
                    source
                }
            };
            let input = IlluminanceInput::parse(&source).context("Invalid illuminance input")?;
            println!("Point illumination: {}", format_color(input.evaluate()));
            Ok(())
        }
        Commands::Brightness { input } => {
            let source = read_input(&input)?;
            let input = BrightnessInput::parse(&source).context("Invalid brightness input")?;
            println!("Point brightness: {}", format_color(input.evaluate()));
            Ok(())
        }
    }
}

fn run_render(scene_path: Option<&Path>, output: &Path, config: &RenderConfig) -> Result<()> {
    let scene = match scene_path {
        Some(path) => load_scene(path)
            .with_context(|| format!("Failed to load scene {}", path.display()))?,
        None => {
            log::info!("No scene given, rendering the demo scene");
            Scene::demo()
        }
    };

    log::info!(
        "Scene '{}': {} objects, {} primitives, {} lights",
        scene.name,
        scene.objects.len(),
        scene.primitive_count(),
        scene.lights.len()
    );

    let world = World::from_scene(&scene);
    let image = render(&scene.camera, &world, &scene.lights, config);

    image
        .save(output)
        .with_context(|| format!("Failed to write {}", output.display()))?;

    Ok(())
}

fn read_input(path: &Path) -> Result<String> {
    std::fs::read_to_string(path).with_context(|| format!("Failed to read {}", path.display()))
}

/// `(r, g, b)` with six decimals.
fn format_color(color: Color) -> String {
    format!("({:.6}, {:.6}, {:.6})", color.r, color.g, color.b)
}
