//! Probe command - pointer-to-cell mapping for a fitted layout

use anyhow::{bail, Result};
use clap::Args;
use serde::Serialize;
use tracing::debug;

use hexlink_core::{Layout, Point, MAX_BOARD_SIZE, MIN_BOARD_SIZE};

#[derive(Args)]
pub struct ProbeArgs {
    /// Board size (cells per edge)
    #[arg(long, default_value = "11")]
    pub size: usize,

    /// Window width in pixels
    #[arg(long, default_value = "1024")]
    pub width: f64,

    /// Window height in pixels
    #[arg(long, default_value = "768")]
    pub height: f64,

    /// Pointer x coordinate
    pub x: f64,

    /// Pointer y coordinate
    pub y: f64,

    /// Output the result as JSON
    #[arg(long)]
    pub json: bool,
}

#[derive(Clone, Debug, Serialize)]
struct ProbeReport {
    tile_size: f64,
    cell: Option<(i16, i16)>,
}

pub fn run(args: ProbeArgs) -> Result<()> {
    if !(MIN_BOARD_SIZE..=MAX_BOARD_SIZE).contains(&args.size) {
        bail!(
            "board size {} out of range ({}-{})",
            args.size,
            MIN_BOARD_SIZE,
            MAX_BOARD_SIZE
        );
    }

    let layout = Layout::fit(args.width, args.height, args.size);
    debug!(?layout.origin, layout.tile_size, "fitted layout");

    let cell = layout.locate_cell(Point::new(args.x, args.y), args.size);
    let report = ProbeReport {
        tile_size: layout.tile_size,
        cell: cell.map(|c| (c.row, c.col)),
    };

    if args.json {
        println!("{}", serde_json::to_string_pretty(&report)?);
    } else {
        match report.cell {
            Some((row, col)) => println!("({}, {}) -> cell ({}, {})", args.x, args.y, row, col),
            None => println!("({}, {}) -> no cell", args.x, args.y),
        }
    }

    Ok(())
}
