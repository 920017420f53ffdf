//! Batch tileset generator: expands five-tile blob strips into 47-variant
//! atlases with JSON manifests, driven by a TOML config.

mod config;

use std::fs;
use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use clap::Parser;

use blobtile_synth::SynthesizedTileset;
use config::Config;

#[derive(Parser, Debug)]
#[command(name = "blobtile")]
#[command(about = "Expands 5-tile blob strips into 47-variant autotile atlases")]
struct Args {
    /// Path to the configuration TOML file
    #[arg(short, long)]
    config: PathBuf,

    /// Assets directory; defaults to the config file's directory
    #[arg(short, long)]
    assets_dir: Option<PathBuf>,
}

fn main() -> Result<()> {
    let args = Args::parse();

    let assets_dir = args
        .assets_dir
        .unwrap_or_else(|| args.config.parent().unwrap_or(Path::new(".")).to_path_buf());

    println!("Loading config from: {}", args.config.display());
    println!("Assets directory: {}", assets_dir.display());

    let config = Config::load(&args.config)?;

    let output_dir = assets_dir.join(&config.output_dir);
    fs::create_dir_all(&output_dir)
        .with_context(|| format!("Failed to create output dir: {}", output_dir.display()))?;

    println!("Generating {} tilesets...", config.strips.len());

    for strip in &config.strips {
        let source_path = assets_dir.join(&strip.source);
        let source = image::open(&source_path)
            .with_context(|| format!("Failed to open source strip: {}", source_path.display()))?
            .to_rgba8();

        let tileset = SynthesizedTileset::from_strip(&strip.name, &source)
            .with_context(|| format!("Failed to synthesize '{}'", strip.name))?;

        let atlas_path = output_dir.join(format!("{}.png", strip.name));
        tileset
            .atlas
            .save(&atlas_path)
            .with_context(|| format!("Failed to write atlas: {}", atlas_path.display()))?;

        let manifest_path = output_dir.join(format!("{}.tileset.json", strip.name));
        let manifest_json = serde_json::to_string_pretty(&tileset.manifest)
            .context("Failed to serialize manifest")?;
        fs::write(&manifest_path, manifest_json)
            .with_context(|| format!("Failed to write manifest: {}", manifest_path.display()))?;

        println!(
            "  ✓ {}: {} variants, {}x{} atlas",
            strip.name,
            tileset.manifest.sprites.len(),
            tileset.manifest.atlas_width,
            tileset.manifest.atlas_height
        );
    }

    println!("\nDone! Output written to: {}", output_dir.display());

    Ok(())
}
