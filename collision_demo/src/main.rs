use std::path::PathBuf;

use aabb_physics::{DemoVariant, SceneConfig};
use clap::{Parser, ValueEnum};
use log::{error, info};

mod visual;

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
enum Variant {
    /// Move the player box around solid walls
    Walls,
    /// Walls plus pickups that disappear when touched
    Pickups,
    /// Two boxes; the wall turns red while they overlap
    Visualizer,
}

impl From<Variant> for DemoVariant {
    fn from(variant: Variant) -> Self {
        match variant {
            Variant::Walls => DemoVariant::Walls,
            Variant::Pickups => DemoVariant::Pickups,
            Variant::Visualizer => DemoVariant::Visualizer,
        }
    }
}

#[derive(Parser, Debug)]
#[command(author, version, about = "Axis-aligned box collision demos")]
struct Args {
    /// Which demo to run
    #[arg(value_enum, default_value_t = Variant::Walls)]
    variant: Variant,
    /// RON scene file to load instead of the built-in layout
    #[arg(long)]
    scene: Option<PathBuf>,
    /// Report a zero normal for +X hits (legacy behaviour)
    #[arg(long)]
    legacy_normals: bool,
}

fn load_config(args: &Args) -> SceneConfig {
    let builtin = || SceneConfig::builtin(args.variant.into());
    let mut config = match &args.scene {
        Some(path) => match SceneConfig::load(path) {
            Ok(config) => config,
            Err(e) => {
                error!("{}; falling back to the built-in {:?} scene", e, args.variant);
                builtin()
            }
        },
        None => builtin(),
    };
    if args.legacy_normals {
        config.legacy_normals = true;
    }
    config
}

fn main() {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    let args = Args::parse();
    let config = load_config(&args);

    info!(
        "Running {:?}: {} walls, {} pickups",
        args.variant,
        config.walls.len(),
        config.pickups.len()
    );

    let highlight = args.variant == Variant::Visualizer || !config.solid_walls;
    if let Err(e) = visual::run_visual(config, highlight) {
        error!("Error running visual example: {}", e);
        std::process::exit(1);
    }
}
