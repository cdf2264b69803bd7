//! The `captioner caption` command for captioning a single image.

use captioner_core::{Captioner, Config};
use clap::Args;
use std::path::PathBuf;

/// Arguments for the `caption` command.
#[derive(Args, Debug)]
pub struct CaptionArgs {
    /// Image to caption
    #[arg(required = true)]
    pub image: PathBuf,

    /// Model name (defaults to llm.default_model)
    #[arg(short, long)]
    pub model: Option<String>,

    /// API key (defaults to llm.api_key)
    #[arg(long, env = "OPENAI_API_KEY", hide_env_values = true)]
    pub api_key: Option<String>,

    /// Write the caption next to the image
    #[arg(long)]
    pub save: bool,
}

/// Execute the caption command.
pub async fn execute(args: CaptionArgs, config: Config) -> anyhow::Result<()> {
    let captioner = Captioner::new(config)?;
    let image = captioner_core::config::expand_path(&args.image);

    let caption = captioner
        .generate_caption(
            args.api_key.as_deref().unwrap_or_default(),
            args.model.as_deref().unwrap_or_default(),
            &image,
        )
        .await?;
    println!("{caption}");

    if args.save {
        let path = captioner.save_caption(&image, &caption).await?;
        tracing::info!("Caption saved to {}", path.display());
    }

    Ok(())
}
