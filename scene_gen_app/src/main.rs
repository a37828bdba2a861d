//! Scene file generator CLI
//!
//! Writes a text scene file for the renderer: one model, one skybox, and a
//! requested number of randomly placed point lights. Output is overwritten
//! if it already exists. All argument parsing happens before the output
//! file is touched, so a bad invocation never leaves a file behind.

use std::fs::File;
use std::io::{BufWriter, Write};

use anyhow::{Context, Result};
use clap::{Arg, Command};
use rand::rngs::StdRng;
use rand::SeedableRng;
use scene_format::{generate_scene, write_scene, SceneProfile};

fn main() -> Result<()> {
    env_logger::Builder::from_default_env()
        .filter_level(log::LevelFilter::Info)
        .init();

    let matches = Command::new("scene_gen")
        .about("Generates a scene file with a model, a skybox, and random point lights")
        .arg(
            Arg::new("output")
                .value_name("FILE")
                .required(true)
                .help("Destination scene file, overwritten if it exists"),
        )
        .arg(
            Arg::new("count")
                .value_name("COUNT")
                .required(true)
                .help("Number of random point lights to emit (<= 0 for none)"),
        )
        .arg(
            Arg::new("seed")
                .long("seed")
                .value_name("SEED")
                .help("Seed the random source for reproducible output"),
        )
        .arg(
            Arg::new("profile")
                .long("profile")
                .value_name("FILE")
                .help("Load generation settings from a .toml or .ron profile"),
        )
        .get_matches();

    let output = matches.get_one::<String>("output").unwrap();
    let light_count: i64 = matches
        .get_one::<String>("count")
        .unwrap()
        .parse()
        .context("Invalid light count")?;

    let profile = match matches.get_one::<String>("profile") {
        Some(path) => SceneProfile::load_from_file(path)
            .with_context(|| format!("Failed to load profile: {}", path))?,
        None => SceneProfile::default(),
    };

    let mut rng: StdRng = match matches.get_one::<String>("seed") {
        Some(seed) => {
            let seed: u64 = seed.parse().context("Invalid seed")?;
            log::info!("Using fixed seed {}", seed);
            StdRng::seed_from_u64(seed)
        }
        None => StdRng::from_entropy(),
    };

    let entities = generate_scene(&mut rng, &profile, light_count);
    log::info!("Writing {} entities to {}", entities.len(), output);

    let file =
        File::create(output).with_context(|| format!("Failed to create output file: {}", output))?;
    let mut writer = BufWriter::new(file);
    write_scene(&mut writer, &entities)?;
    writer
        .flush()
        .context("Failed to flush output file")?;

    log::info!("Scene file written");
    Ok(())
}
