pub mod convert;
pub mod init;
pub mod inspect;

use clap::{Parser, Subcommand};

/// mapgeom - pixel-art tilemap to level geometry converter
#[derive(Parser, Debug)]
#[command(name = "mapgeom")]
#[command(version, about, long_about = None)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Convert tilemap images into .map.json geometry files
    Convert(convert::ConvertArgs),

    /// Summarize the geometry of a single tilemap without writing output
    Inspect(inspect::InspectArgs),

    /// Initialize a mapgeom project (generates mapgeom.yaml)
    Init(init::InitArgs),
}
