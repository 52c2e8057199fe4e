use amilive::*;
use clap::Parser;

use anyhow::Result;

fn main() -> Result<()> {
    let args = Args::parse();

    let level = if args.verbose {
        simplelog::LevelFilter::Debug
    } else {
        simplelog::LevelFilter::Info
    };
    simplelog::CombinedLogger::init(vec![simplelog::TermLogger::new(
        level,
        simplelog::Config::default(),
        simplelog::TerminalMode::Mixed,
        simplelog::ColorChoice::Auto,
    )])?;

    let out = compile(&args)?;
    match &args.output {
        Some(path) => std::fs::write(path, out)?,
        None => print!("{}", out),
    }

    Ok(())
}
