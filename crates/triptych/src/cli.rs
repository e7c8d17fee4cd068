//! Command-line interface for the Triptych binary.

use clap::Parser;
use std::path::PathBuf;
use std::sync::Arc;
use tracing::info;
use triptych_backends::{OpenRouterClient, ScreenshotClient, VoiceClient};
use triptych_core::Variation;
use triptych_session::{Session, SessionConfig};

/// Generate three single-file HTML mini-apps from an idea and refine
/// them with tweak rounds.
#[derive(Debug, Parser)]
#[command(name = "triptych", version, about)]
pub struct Cli {
    /// The app idea to generate variations for
    pub idea: String,

    /// Tweak instructions applied in sequence after the initial set
    #[arg(long = "tweak")]
    pub tweaks: Vec<String>,

    /// Disable spoken status notifications
    #[arg(long)]
    pub no_voice: bool,

    /// Disable the pacing delay between tweak rounds
    #[arg(long)]
    pub no_pacing: bool,

    /// Directory to write the generated HTML documents into
    #[arg(long, short)]
    pub out_dir: Option<PathBuf>,

    /// Enable debug logging
    #[arg(long, short)]
    pub verbose: bool,
}

/// Run the CLI flow: initial set, then each tweak in order.
pub async fn run(cli: Cli) -> Result<(), Box<dyn std::error::Error>> {
    let mut config = SessionConfig::load()?;
    if cli.no_voice {
        config.voice_enabled = false;
    }
    if cli.no_pacing {
        config = config.without_pacing();
    }

    let mut session = Session::new(
        Arc::new(OpenRouterClient::new()?),
        Arc::new(ScreenshotClient::new()),
        Arc::new(VoiceClient::new()),
        config,
    );

    info!(idea = %cli.idea, "Generating initial variations");
    let initial = session.generate_initial_set(&cli.idea).await?;
    print_variations(&initial);

    for tweak in &cli.tweaks {
        info!(tweak = %tweak, "Applying tweak");
        match session.apply_tweak(tweak).await {
            Ok(tweaked) => print_variations(&tweaked),
            Err(e) => {
                // Earlier rounds' variations stay; report and stop tweaking.
                eprintln!("Tweak halted: {e}");
                break;
            }
        }
    }

    if let Some(out_dir) = &cli.out_dir {
        std::fs::create_dir_all(out_dir)?;
        for variation in session.variations() {
            let path = out_dir.join(format!("variation-{}.html", variation.id()));
            std::fs::write(&path, &variation.document().markup)?;
            println!("Wrote {}", path.display());
        }
    }

    Ok(())
}

fn print_variations(variations: &[Variation]) {
    if variations.is_empty() {
        println!("No variations produced.");
        return;
    }
    for variation in variations {
        let preview = match variation.preview() {
            Some(image) => format!("{} preview bytes", image.data.len()),
            None => "no preview".to_string(),
        };
        println!(
            "  #{:<3} {:<24} {:<28} {}",
            variation.id(),
            variation.name(),
            variation.version().to_string(),
            preview
        );
    }
}
