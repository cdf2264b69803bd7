//! The `captioner scan` command.

use captioner_core::{Captioner, Config};
use clap::Args;
use std::path::PathBuf;

/// Arguments for the `scan` command.
#[derive(Args, Debug)]
pub struct ScanArgs {
    /// Folder to list
    #[arg(required = true)]
    pub folder: PathBuf,

    /// Pretty-print the JSON output
    #[arg(long)]
    pub pretty: bool,
}

/// Execute the scan command, printing the records as a JSON array.
pub async fn execute(args: ScanArgs, config: Config) -> anyhow::Result<()> {
    let captioner = Captioner::new(config)?;
    let records = captioner.scan(&args.folder).await?;

    let json = if args.pretty {
        serde_json::to_string_pretty(&records)?
    } else {
        serde_json::to_string(&records)?
    };
    println!("{json}");

    tracing::info!(
        "{} images, {} with captions",
        records.len(),
        records.iter().filter(|r| r.has_caption).count()
    );
    Ok(())
}
