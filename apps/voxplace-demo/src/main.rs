//! Voxplace Demo
//!
//! Drives a headless session through a short script: place a block on the
//! floor, place one against a block face, then remove a block. Every edit is
//! logged and the final occupied cells are printed.
//!
//! ## Usage
//!
//! ```bash
//! cargo run -p voxplace-demo -- [OPTIONS]
//! ```
//!
//! ## Options
//!
//! - `--max-distance <F>`: Targeting reach in world units (default: 10)
//! - `--world-size <X,Y,Z>`: World extent in cells (default: 20,10,20)
//! - `--start <X,Y,Z>`: Player start position (default: 0,2,0)
//! - `--sensitivity <F>`: Degrees per pixel of cursor motion (default: 0.1)
//! - `-h, --help`: Print help message
//!
//! ## Environment Variables
//!
//! - `RUST_LOG`: Set log level (e.g., info, debug, trace)

mod script;

use tracing::info;
use voxplace_app::{init_logging, Session, SessionConfig};

fn main() -> anyhow::Result<()> {
    if std::env::args().any(|arg| arg == "-h" || arg == "--help") {
        print_help();
        return Ok(());
    }

    init_logging();

    let config = SessionConfig::from_args(std::env::args().skip(1))?;
    let mut session = Session::new(config)?;

    let edits = script::run(&mut session, &script::default_script());
    info!(
        edits = edits.len(),
        frames = session.frame_number(),
        "script finished"
    );

    println!("Occupied cells ({}):", session.world().len());
    for cell in session.occupied_cells() {
        println!("    ({}, {}, {})", cell.x, cell.y, cell.z);
    }

    Ok(())
}

fn print_help() {
    eprintln!(
        "Voxplace Demo - scripted block placement and removal

USAGE:
    cargo run -p voxplace-demo -- [OPTIONS]

OPTIONS:
    --max-distance <F>      Targeting reach in world units (default: 10)
    --world-size <X,Y,Z>    World extent in cells (default: 20,10,20)
    --start <X,Y,Z>         Player start position (default: 0,2,0)
    --sensitivity <F>       Degrees per pixel of cursor motion (default: 0.1)

OTHER:
    -h, --help              Print this help message

EXAMPLES:
    # Default script
    cargo run -p voxplace-demo

    # Shorter reach, logging every frame
    RUST_LOG=debug cargo run -p voxplace-demo -- --max-distance 4

ENVIRONMENT VARIABLES:
    RUST_LOG                Set log level (e.g., info, debug, trace)"
    );
}
