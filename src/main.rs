use orbsim::{bench_step, OrbitalSystem, Scenario, ScenarioConfig};

use anyhow::{anyhow, Context, Result};
use clap::Parser;
use log::{info, LevelFilter};
use simple_logger::SimpleLogger;

use std::fs::File;
use std::io::BufReader;
use std::path::PathBuf;

#[derive(Parser, Debug)]
#[command(about = "Run an orbital scenario from a YAML file")]
struct Args {
    /// Scenario file; bare names are also looked up in the bundled scenarios/ dir
    #[arg(short, long = "file", default_value = "two_body.yaml")]
    file_name: String,

    /// Override run.steps from the file
    #[arg(long)]
    steps: Option<u64>,

    /// Override run.report_every from the file
    #[arg(long)]
    report_every: Option<u64>,

    /// off, error, warn, info, debug or trace
    #[arg(long, default_value = "info")]
    log_level: String,

    /// Time the step loop instead of running a scenario
    #[arg(long)]
    bench: bool,
}

fn resolve_path(file_name: &str) -> PathBuf {
    let direct = PathBuf::from(file_name);
    if direct.exists() {
        return direct;
    }
    PathBuf::from(env!("CARGO_MANIFEST_DIR")).join("scenarios").join(file_name)
}

// load here to keep main clean
fn load_scenario_from_yaml(file_name: &str) -> Result<ScenarioConfig> {
    let config_path = resolve_path(file_name);
    let file = File::open(&config_path).with_context(|| format!("cannot open {}", config_path.display()))?;
    let reader = BufReader::new(file);
    let scenario_cfg = ScenarioConfig::from_reader(reader).with_context(|| format!("while reading {}", config_path.display()))?;
    scenario_cfg.validate().with_context(|| format!("invalid scenario {}", config_path.display()))?;

    Ok(scenario_cfg)
}

fn report(system: &OrbitalSystem) {
    info!("t = {:.6} after {} steps", system.time(), system.steps());
    for (handle, body) in system.snapshot() {
        info!(
            "  {handle}: x = ({:.6}, {:.6}, {:.6}) v = ({:.6}, {:.6}, {:.6})",
            body.x.x, body.x.y, body.x.z, body.v.x, body.v.y, body.v.z
        );
    }
}

fn main() -> Result<()> {
    let args = Args::parse();

    let level: LevelFilter = args
        .log_level
        .parse()
        .map_err(|_| anyhow!("unknown log level '{}'", args.log_level))?;
    SimpleLogger::new()
        .with_level(level)
        .init()
        .map_err(|e| anyhow!("logger init failed: {e}"))?;

    if args.bench {
        bench_step(&[200, 400, 800, 1600, 3200], 3);
        return Ok(());
    }

    let scenario_cfg = load_scenario_from_yaml(&args.file_name)?;
    let Scenario { mut system, run, .. } = Scenario::build_scenario(scenario_cfg);

    let steps = args.steps.unwrap_or(run.steps);
    let report_every = args.report_every.unwrap_or(run.report_every);

    info!(
        "{} bodies, dt = {}, G = {}, eps2 = {}, {} steps",
        system.len(),
        system.time_step(),
        system.gravitational_constant(),
        system.softening(),
        steps
    );
    let e0 = system.energy();
    let p0 = system.momentum();
    report(&system);

    for i in 1..=steps {
        system.step();
        if report_every > 0 && i % report_every == 0 && i != steps {
            report(&system);
        }
    }
    report(&system);

    let e1 = system.energy();
    let p1 = system.momentum();
    info!("energy   {e0:.9} -> {e1:.9} (drift {:.3e})", e1 - e0);
    info!("momentum |dp| = {:.3e}", (p1 - p0).norm());

    println!("handle,x,y,z,vx,vy,vz,m,radius,tag");
    for (handle, b) in system.snapshot() {
        println!(
            "{},{},{},{},{},{},{},{},{},{}",
            handle.id(), b.x.x, b.x.y, b.x.z, b.v.x, b.v.y, b.v.z, b.m, b.radius, b.tag
        );
    }

    Ok(())
}
