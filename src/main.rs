use clap::Parser;
use mapgeom::cli::{Cli, Commands};
use mapgeom::output::Printer;
use miette::Result;

fn main() -> Result<()> {
    let cli = Cli::parse();
    let printer = Printer::new();

    match cli.command {
        Commands::Convert(args) => mapgeom::cli::convert::run(args, &printer)?,
        Commands::Inspect(args) => mapgeom::cli::inspect::run(args, &printer)?,
        Commands::Init(args) => mapgeom::cli::init::run(args, &printer)?,
    }

    Ok(())
}
