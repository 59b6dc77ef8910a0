use std::io::{self, BufRead};
use std::path::PathBuf;

use clap::{Parser, Subcommand};
use serde::Deserialize;
use serde_json::{Value, json};
use tileframe::{ConfigError, Frame, FrameConfig, FrameError, TileLocation, Vector2, ViewFrame, ViewportF};

#[derive(Debug, thiserror::Error)]
enum CliError {
    #[error("failed to read {path}: {source}")]
    Read { path: String, source: io::Error },
    #[error("failed to read stdin: {0}")]
    Stdin(#[from] io::Error),
    #[error(transparent)]
    Config(#[from] ConfigError),
    #[error(transparent)]
    Frame(#[from] FrameError),
    #[error("invalid replay line {line}: {source}")]
    Replay { line: usize, source: serde_json::Error },
    #[error("invalid JSON payload: {0}")]
    InvalidJson(#[from] serde_json::Error),
}

#[derive(Parser, Debug)]
#[command(name = "tileframe", about = "Tile/pixel coordinate frame inspector")]
struct Cli {
    /// JSON frame config; `TILEFRAME_*` variables are used when absent.
    #[arg(long, env = "TILEFRAME_CONFIG")]
    config: Option<PathBuf>,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Print the scale, both viewports and the visible cells.
    Info,
    /// Resolve a pixel to its tile cell and intra-tile offset.
    #[command(allow_negative_numbers = true)]
    Pick { px: f64, py: f64 },
    /// Pixel position of a tile anchor.
    #[command(allow_negative_numbers = true)]
    Place {
        x: f64,
        y: f64,
        #[arg(long, default_value = "top_left", value_parser = parse_location)]
        location: TileLocation,
    },
    /// Apply newline-delimited JSON operations from stdin.
    Replay,
}

/// One replayed operation, e.g. `{"op":"zoom_in","x":400,"y":300}`.
#[derive(Debug, Deserialize)]
#[serde(tag = "op", rename_all = "snake_case")]
enum Op {
    ZoomIn { x: f64, y: f64 },
    ZoomOut { x: f64, y: f64 },
    Zoom { x: f64, y: f64, factor: f64 },
    BeginPan { x: f64, y: f64 },
    Pan { x: f64, y: f64 },
    Pick { x: f64, y: f64 },
    Place {
        x: f64,
        y: f64,
        #[serde(default)]
        location: TileLocation,
    },
    Info,
}

fn main() -> Result<(), CliError> {
    tracing_subscriber::fmt().with_writer(io::stderr).init();

    let cli = Cli::parse();
    let config = load_config(cli.config.as_ref())?;
    let mut frame = config.build()?;

    match cli.command {
        Command::Info => print_pretty(&info(&frame)?),
        Command::Pick { px, py } => print_pretty(&json!(frame.pixel_coords_to_tiles(px, py)?)),
        Command::Place { x, y, location } => print_pretty(&json!(frame.tile_coords_to_pixels(x, y, location))),
        Command::Replay => run_replay(&mut frame),
    }
}

fn load_config(path: Option<&PathBuf>) -> Result<FrameConfig, CliError> {
    let Some(path) = path else {
        return Ok(FrameConfig::from_env()?);
    };
    let raw = std::fs::read_to_string(path).map_err(|source| CliError::Read {
        path: path.display().to_string(),
        source,
    })?;
    Ok(FrameConfig::from_json(&raw)?)
}

fn run_replay(frame: &mut ViewFrame) -> Result<(), CliError> {
    let stdin = io::stdin();
    for (idx, line) in stdin.lock().lines().enumerate() {
        let line = line?;
        if line.trim().is_empty() {
            continue;
        }
        let op: Op = serde_json::from_str(&line).map_err(|source| CliError::Replay { line: idx + 1, source })?;
        if let Some(output) = apply(frame, op)? {
            println!("{output}");
        }
    }
    Ok(())
}

/// Apply one operation; queries return a JSON line, mutations return nothing.
fn apply(frame: &mut ViewFrame, op: Op) -> Result<Option<Value>, FrameError> {
    match op {
        Op::ZoomIn { x, y } => frame.zoom_in(Vector2::new(x, y))?,
        Op::ZoomOut { x, y } => frame.zoom_out(Vector2::new(x, y))?,
        Op::Zoom { x, y, factor } => frame.zoom(Vector2::new(x, y), factor)?,
        Op::BeginPan { x, y } => frame.begin_translation(Vector2::new(x, y))?,
        Op::Pan { x, y } => frame.translate(Vector2::new(x, y))?,
        Op::Pick { x, y } => return Ok(Some(json!(frame.pixel_coords_to_tiles(x, y)?))),
        Op::Place { x, y, location } => return Ok(Some(json!(frame.tile_coords_to_pixels(x, y, location)))),
        Op::Info => return Ok(Some(info(frame)?)),
    }
    Ok(None)
}

fn info(frame: &ViewFrame) -> Result<Value, FrameError> {
    let cells = frame.cells_viewport()?;
    Ok(json!({
        "projection": frame.kind(),
        "fixed": frame.base().is_fixed(),
        "scale": frame.tiles_to_pixels(),
        "tiles": viewport_json(frame.tile_viewport()),
        "pixels": viewport_json(frame.pixel_viewport()),
        "cells": viewport_json(&cells),
    }))
}

fn viewport_json(viewport: &ViewportF) -> Value {
    json!({
        "mode": viewport.corner_mode(),
        "bottom_left": viewport.bottom_left(),
        "dims": viewport.dims(),
    })
}

fn print_pretty(value: &Value) -> Result<(), CliError> {
    println!("{}", serde_json::to_string_pretty(value)?);
    Ok(())
}

fn parse_location(raw: &str) -> Result<TileLocation, String> {
    serde_json::from_value(Value::String(raw.to_owned())).map_err(|e| e.to_string())
}
