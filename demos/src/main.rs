//! Run a chase scenario in the terminal.
//!
//! Usage: `chase [SCENARIO.toml]`. Set `RUST_LOG=debug` to trace every move.

use std::path::Path;

use evade_demos::{Chase, ScenarioConfig};
use evade_grid::{GridMap, Markers};
use log::info;
use rand::SeedableRng;
use rand::rngs::StdRng;

fn main() -> Result<(), Box<dyn std::error::Error>> {
    env_logger::init();

    let cfg = match std::env::args().nth(1) {
        Some(path) => ScenarioConfig::load(Path::new(&path))?,
        None => ScenarioConfig::default(),
    };
    let map = GridMap::parse(&cfg.map)?;
    let markers = Markers::find(&cfg.map)?;
    let mut rng = match cfg.seed {
        Some(seed) => StdRng::seed_from_u64(seed),
        None => StdRng::from_os_rng(),
    };
    info!(
        "map {}x{}, agent {}, pursuer {}, exit {}",
        map.size().x,
        map.size().y,
        markers.agent,
        markers.adversary,
        markers.destination
    );

    let mut chase = Chase::new(&map, markers, &cfg);
    println!("{}\n", chase.render());
    let outcome = chase.run(&mut rng, |c| {
        println!("tick {}\n{}\n", c.tick(), c.render());
    })?;
    println!("{outcome}");
    Ok(())
}
