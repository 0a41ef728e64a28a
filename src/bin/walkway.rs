use std::collections::BTreeMap;
use std::path::{Path, PathBuf};

use anyhow::Context as _;
use clap::{Parser, Subcommand};
use tracing_subscriber::EnvFilter;
use walkway::{
    Clock as _, FrameSource as _, ManualClock, ManualFrameSource, Scene, ShapeSource as _,
};

#[derive(Parser, Debug)]
#[command(name = "walkway", version)]
struct Cli {
    #[command(subcommand)]
    cmd: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Print the stroke length of every shape each animation would draw.
    Lengths(LengthsArgs),
    /// Run every animation headlessly and print stroke offsets per frame as JSON lines.
    Simulate(SimulateArgs),
}

#[derive(Parser, Debug)]
struct LengthsArgs {
    /// Input scene JSON.
    #[arg(long = "in")]
    in_path: PathBuf,
}

#[derive(Parser, Debug)]
struct SimulateArgs {
    /// Input scene JSON.
    #[arg(long = "in")]
    in_path: PathBuf,

    /// Simulated display refresh rate.
    #[arg(long, default_value_t = 60.0)]
    fps: f64,

    /// Report the surface hidden once this many milliseconds have elapsed.
    #[arg(long)]
    hide_at: Option<f64>,

    /// Stop after this many frames even if animations are still running.
    #[arg(long, default_value_t = 100_000)]
    max_frames: u64,
}

fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();
    match cli.cmd {
        Command::Lengths(args) => cmd_lengths(args),
        Command::Simulate(args) => cmd_simulate(args),
    }
}

fn load_scene(path: &Path) -> anyhow::Result<Scene> {
    Scene::from_path(path).with_context(|| format!("load scene '{}'", path.display()))
}

fn cmd_lengths(args: LengthsArgs) -> anyhow::Result<()> {
    let scene = load_scene(&args.in_path)?;
    for opts in &scene.animations {
        let selector = opts.require_selector()?;
        for shape in scene.document.resolve_shapes(selector)? {
            let length = scene.document.measure_length(&shape);
            println!(
                "{selector}\t{}\t{:?}\t{length}",
                shape.id,
                shape.geometry.kind()
            );
        }
    }
    Ok(())
}

fn cmd_simulate(args: SimulateArgs) -> anyhow::Result<()> {
    anyhow::ensure!(args.fps.is_finite() && args.fps > 0.0, "--fps must be positive");
    let scene = load_scene(&args.in_path)?;
    let clock = ManualClock::new(0.0);
    let (mut engine, ids) = scene.into_engine(clock.clone())?;
    for id in ids {
        engine.draw(id)?;
    }

    let mut source = ManualFrameSource::at_fps(clock.clone(), args.fps);
    let mut frame = 0u64;
    while engine.has_pending_frames() && frame < args.max_frames {
        source.wait_for_frame();
        let hide_due = args.hide_at.is_some_and(|at| clock.now_ms() >= at);
        if hide_due && !engine.is_surface_hidden() {
            engine.set_surface_hidden(true);
        }
        engine.tick();
        frame += 1;

        let offsets: BTreeMap<&str, f64> = engine
            .host()
            .elements
            .iter()
            .filter_map(|el| Some((el.id.as_str(), engine.host().offset(&el.id)?)))
            .collect();
        let line = serde_json::json!({
            "frame": frame,
            "time_ms": clock.now_ms(),
            "offsets": offsets,
        });
        println!("{line}");
    }

    for event in engine.host().events() {
        println!("{}", serde_json::to_string(event)?);
    }
    if engine.has_pending_frames() {
        tracing::warn!(frames = frame, "stopped with animations still running");
    }
    Ok(())
}
