//! `galaxy-layout`: print the deterministic galaxy layout as JSON.

use std::io::{self, Write};
use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use serde::Serialize;

use galaxy_core::belt::catalog_belts;
use galaxy_core::relationships::{compute_connections, connections_for};
use galaxy_core::spatial::PlacementIndex;
use galaxy_core::{Catalog, LayoutConfig, LayoutEngine, Vec3};
use galaxy_io::{load_catalog, load_config, LayoutExport, LayoutWriter};
use galaxy_renderer::{GpuCapabilities, Minimap, RenderFrame, RendererConfig};

#[derive(Parser, Debug)]
#[command(name = "galaxy-layout")]
#[command(version)]
#[command(about = "Deterministic 3D layout for the galaxy portfolio")]
struct Cli {
    /// Layout config override (JSON); defaults to radius 25, 6 galaxies, offsets 3-10
    #[arg(short = 'c', long = "config", value_name = "FILE", global = true)]
    config: Option<PathBuf>,

    /// Pretty-print JSON output
    #[arg(long = "pretty", global = true)]
    pretty: bool,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Galaxy anchor points
    Anchors {
        /// Number of galaxies; defaults to the config's galaxy count
        #[arg(long = "count", value_name = "N")]
        count: Option<usize>,
    },
    /// Position of a single entity
    Position {
        #[arg(value_name = "ENTITY_ID")]
        entity_id: String,
        #[arg(value_name = "GROUP_ID")]
        group_id: String,
        #[arg(value_name = "GROUP_INDEX")]
        group_index: usize,
    },
    /// Positions of every project in a catalog
    Positions {
        #[arg(long = "catalog", value_name = "FILE")]
        catalog: PathBuf,
    },
    /// Report catalog issues
    Check {
        #[arg(long = "catalog", value_name = "FILE")]
        catalog: PathBuf,
    },
    /// Cross-galaxy project connections
    Connections {
        #[arg(long = "catalog", value_name = "FILE")]
        catalog: PathBuf,
        /// Only connections touching this project
        #[arg(long = "project", value_name = "ID")]
        project: Option<String>,
    },
    /// Asteroid belt rocks around belt galaxies
    Belts {
        #[arg(long = "catalog", value_name = "FILE")]
        catalog: PathBuf,
        #[arg(long = "reduced-motion")]
        reduced_motion: bool,
    },
    /// Top-down minimap projection
    Minimap {
        #[arg(long = "catalog", value_name = "FILE")]
        catalog: PathBuf,
        #[arg(long = "size", value_name = "PX", default_value = "180")]
        size: f64,
        #[arg(long = "padding", value_name = "PX", default_value = "20")]
        padding: f64,
    },
    /// Full render frame for the frontend
    Frame {
        #[arg(long = "catalog", value_name = "FILE")]
        catalog: PathBuf,
        /// The host granted a WebGPU adapter
        #[arg(long = "webgpu")]
        webgpu: bool,
        #[arg(long = "reduced-motion")]
        reduced_motion: bool,
    },
    /// Project nearest to a scene point
    Nearest {
        #[arg(long = "catalog", value_name = "FILE")]
        catalog: PathBuf,
        #[arg(value_name = "X", allow_hyphen_values = true)]
        x: f64,
        #[arg(value_name = "Y", allow_hyphen_values = true)]
        y: f64,
        #[arg(value_name = "Z", allow_hyphen_values = true)]
        z: f64,
    },
    /// Precomputed layout export
    Export {
        #[arg(long = "catalog", value_name = "FILE")]
        catalog: PathBuf,
        #[arg(long = "name", value_name = "NAME", default_value = "portfolio")]
        name: String,
    },
}

#[derive(Serialize)]
struct AnchorOut {
    index: usize,
    anchor: Vec3,
}

fn engine_for(config: Option<&Path>) -> Result<LayoutEngine> {
    let config = match config {
        Some(path) => load_config(path)
            .with_context(|| format!("loading layout config {}", path.display()))?,
        None => LayoutConfig::default(),
    };
    Ok(LayoutEngine::new(config)?)
}

fn catalog_at(path: &Path) -> Result<Catalog> {
    load_catalog(path).with_context(|| format!("loading catalog {}", path.display()))
}

fn run<W: Write>(cli: Cli, out: W) -> Result<()> {
    let engine = engine_for(cli.config.as_deref())?;
    let mut writer = LayoutWriter::new(out).pretty(cli.pretty);

    match cli.command {
        Command::Anchors { count } => {
            let count = count.unwrap_or(engine.config().galaxy_count);
            anyhow::ensure!(count > 0, "--count must be at least 1");
            let config = LayoutConfig {
                galaxy_count: count,
                ..*engine.config()
            };
            let engine = LayoutEngine::new(config)?;
            let anchors: Vec<AnchorOut> = (0..count)
                .map(|index| AnchorOut {
                    index,
                    anchor: engine.group_anchor(index),
                })
                .collect();
            writer.write_json(&anchors)?;
        }
        Command::Position {
            entity_id,
            group_id,
            group_index,
        } => {
            writer.write_json(&engine.entity_position(&entity_id, &group_id, group_index))?;
        }
        Command::Positions { catalog } => {
            let catalog = catalog_at(&catalog)?;
            writer.write_json(&engine.place_catalog(&catalog))?;
        }
        Command::Check { catalog } => {
            let catalog = catalog_at(&catalog)?;
            writer.write_json(&catalog.check(engine.config()))?;
        }
        Command::Connections { catalog, project } => {
            let catalog = catalog_at(&catalog)?;
            let connections = compute_connections(&catalog, &engine);
            match project {
                Some(id) => writer.write_json(&connections_for(&id, &connections))?,
                None => writer.write_json(&connections)?,
            }
        }
        Command::Belts {
            catalog,
            reduced_motion,
        } => {
            let catalog = catalog_at(&catalog)?;
            let belts: Vec<_> = catalog_belts(&catalog, &engine, reduced_motion)
                .into_iter()
                .map(|belt| {
                    let rocks = belt.rocks();
                    (belt, rocks)
                })
                .collect();
            writer.write_json(&belts)?;
        }
        Command::Minimap {
            catalog,
            size,
            padding,
        } => {
            let catalog = catalog_at(&catalog)?;
            writer.write_json(&Minimap::fit(&catalog, &engine, size, padding))?;
        }
        Command::Frame {
            catalog,
            webgpu,
            reduced_motion,
        } => {
            let catalog = catalog_at(&catalog)?;
            let caps = GpuCapabilities {
                api_present: webgpu,
                adapter_available: webgpu,
            };
            let config = RendererConfig::from_capabilities(caps).with_reduced_motion(reduced_motion);
            writer.write_json(&RenderFrame::build(&catalog, &engine, &config))?;
        }
        Command::Nearest { catalog, x, y, z } => {
            let catalog = catalog_at(&catalog)?;
            let placements = engine.place_catalog(&catalog);
            let index = PlacementIndex::build(&placements);
            let nearest = index
                .nearest(&Vec3::new(x, y, z))
                .map(|entry| &placements[entry.placement_index]);
            writer.write_json(&nearest)?;
        }
        Command::Export { catalog, name } => {
            let catalog = catalog_at(&catalog)?;
            writer.write(&LayoutExport::build(&name, &catalog, &engine))?;
        }
    }
    Ok(())
}

fn main() -> Result<()> {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("warn")).init();
    let cli = Cli::parse();
    log::debug!("{:?}", cli);
    run(cli, io::stdout().lock())
}
