use anyhow::Result;
use chronica::build::build_site;
use chronica::cli::{Cli, Commands};
use chronica::config::Config;
use chronica::log;
use clap::Parser;
use std::time::Instant;

fn main() -> Result<()> {
    let cli = Cli::parse();

    match cli.command {
        Commands::Build { create_defaults } => {
            let config = Config::load(&cli.root, create_defaults)?;
            let started = Instant::now();
            let summary = build_site(&config)?;
            log!(
                "build";
                "rendered {} document page(s) and the archive ({} group(s)) in {:.2?}",
                summary.documents,
                summary.groups,
                started.elapsed()
            );
            Ok(())
        }
        Commands::Update => {
            log!("update"; "incremental updates are not implemented yet; run `build` for a full regeneration");
            Ok(())
        }
    }
}
