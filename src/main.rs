use orbsim::{load_snapshot, save_snapshot, Scenario, ScenarioConfig};
use orbsim::{bench_frame, bench_gravity, bench_trail};

use anyhow::{Context, Result};
use clap::Parser;
use tracing::{info, Level};
use tracing_subscriber::FmtSubscriber;

use std::fs::File;
use std::io::BufReader;
use std::path::PathBuf;

#[derive(Parser, Debug)]
#[command(name = "orbsim", version, about = "Headless orbit/flight physics runner")]
struct Args {
    /// Scenario file under `scenarios/`
    #[arg(short, default_value = "test_file.yaml")]
    file_name: String,

    /// Override the number of frames to run
    #[arg(long)]
    frames: Option<u64>,

    /// Run the micro benchmarks instead of a scenario
    #[arg(long)]
    bench: bool,

    /// Restore adaptive coefficients from this snapshot before running
    #[arg(long)]
    restore: Option<PathBuf>,

    /// Write the final adaptive coefficients to this snapshot file
    #[arg(long)]
    snapshot: Option<PathBuf>,

    /// Logging verbosity level
    #[arg(short, long, default_value = "info")]
    log_level: String,
}

// load here to keep main clean
fn load_scenario_from_yaml(file_name: &str) -> Result<ScenarioConfig> {
    let config_path = PathBuf::from(env!("CARGO_MANIFEST_DIR")).join("scenarios").join(file_name);
    let file = File::open(&config_path)
        .with_context(|| format!("opening scenario {}", config_path.display()))?;
    let reader = BufReader::new(file);
    let scenario_cfg: ScenarioConfig = serde_yaml::from_reader(reader)?;
    Ok(scenario_cfg)
}

fn main() -> Result<()> {
    let args = Args::parse();

    let log_level = match args.log_level.to_lowercase().as_str() {
        "trace" => Level::TRACE,
        "debug" => Level::DEBUG,
        "warn" => Level::WARN,
        "error" => Level::ERROR,
        _ => Level::INFO,
    };
    let subscriber = FmtSubscriber::builder()
        .with_max_level(log_level)
        .with_target(false)
        .finish();
    tracing::subscriber::set_global_default(subscriber)?;

    if args.bench {
        bench_gravity();
        bench_trail();
        bench_frame();
        return Ok(());
    }

    let scenario_cfg = load_scenario_from_yaml(&args.file_name)?;
    let mut scenario = Scenario::build_scenario(scenario_cfg)?;

    if let Some(path) = &args.restore {
        let snap = load_snapshot(path)?;
        scenario.sim.restore(&snap);
        info!(drag = snap.drag_coefficient, camera = snap.camera_response, "restored snapshot");
    }

    let frames = args.frames.unwrap_or(scenario.engine.frames);
    let summary = scenario.run(frames);
    let body = scenario.body();

    info!(
        frames = summary.frames,
        jumps = summary.jumps,
        dashes = summary.dashes,
        landings = summary.landings,
        bounces = summary.bounces,
        recalibrations = summary.recalibrations,
        "run finished"
    );
    info!(
        x = body.x.x,
        y = body.x.y,
        speed = body.speed(),
        state = ?body.state,
        trail = scenario.sim.trail.len(),
        drag = scenario.sim.tuning.drag_coefficient,
        camera = scenario.camera_response(),
        "final state"
    );

    if let Some(path) = &args.snapshot {
        save_snapshot(path, &scenario.sim.snapshot())?;
        info!(path = %path.display(), "wrote snapshot");
    }

    Ok(())
}
