//! Swings the sample leg and prints the recorded joint coordinates as CSV.
//!
//! # Usage
//!
//! ```text
//! cargo run --example sample --features tracing
//! cargo run --example sample --features tracing -- scenario.toml
//! ```
//!
//! Without an argument the built-in sample scenario is used. A scenario file
//! has the same layout as [`Scenario`] (see its documentation).

use std::error::Error;

use legswing_pendulum::Scenario;
use tracing::{info, level_filters::LevelFilter};
use tracing_subscriber::FmtSubscriber;

fn main() -> Result<(), Box<dyn Error>> {
    tracing::subscriber::set_global_default(
        FmtSubscriber::builder()
            .with_max_level(LevelFilter::DEBUG)
            .with_writer(std::io::stderr)
            .finish(),
    )?;

    let scenario = match std::env::args().nth(1) {
        Some(path) => toml::from_str(&std::fs::read_to_string(&path)?)?,
        None => Scenario::sample(),
    };
    scenario.validate()?;

    let leg = scenario.run();
    info!(
        frames = leg.trajectory().len(),
        theta_k = leg.linkage().theta_k(),
        "swing finished"
    );

    println!("frame,knee_x,knee_y,ankle_x,ankle_y");
    for (i, frame) in leg.trajectory().frames().enumerate() {
        println!(
            "{i},{},{},{},{}",
            frame.knee.x, frame.knee.y, frame.ankle.x, frame.ankle.y
        );
    }

    Ok(())
}
