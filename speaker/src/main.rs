use std::{path::PathBuf, sync::Arc};

use anyhow::bail;
use clap::Parser;
use speaker::{MemoryBlobStore, Outcome, Page, SynthesisController, Terminal, init_logging};
use tokio::io::BufReader;
use tracing::info;
use tts::HttpSynthesizer;

#[derive(Parser)]
#[command(author, version, about)]
struct Cli {
    /// Base URL of the synthesis server
    #[arg(long, env = "SYNTH_URL", default_value = "http://127.0.0.1:8000")]
    url: String,
    /// Voice preset selected at startup
    #[arg(long, env = "SYNTH_PRESET")]
    preset: Option<String>,
    /// Comma separated presets offered by the selector
    #[arg(long, value_delimiter = ',')]
    presets: Vec<String>,
    /// File the played audio is written to
    #[arg(short, long, default_value = "speech.wav")]
    output: PathBuf,
    /// Synthesize this text once and exit
    text: Vec<String>,
}

#[tokio::main(flavor = "multi_thread")]
async fn main() -> anyhow::Result<()> {
    dotenvy::dotenv().ok();
    init_logging();
    let cli = Cli::parse();

    let mut presets = cli.presets;
    if let Some(preset) = &cli.preset {
        if !presets.contains(preset) {
            presets.push(preset.clone());
        }
    }
    let page = if presets.is_empty() {
        Page::standard()
    } else {
        Page::with_presets(presets)
    };

    let synthesizer = Arc::new(HttpSynthesizer::new(&cli.url)?);
    info!(endpoint = %synthesizer.endpoint(), "synthesis server");
    let controller = SynthesisController::bind(page, synthesizer, Arc::new(MemoryBlobStore::new()))?;
    controller.select_preset(cli.preset.as_deref());

    let terminal = Terminal::new(controller, cli.output);
    let mut stdout = std::io::stdout();

    if cli.text.is_empty() {
        let stdin = BufReader::new(tokio::io::stdin());
        terminal.run(stdin, &mut stdout).await?;
        return Ok(());
    }

    match terminal.say(&cli.text.join(" "), &mut stdout).await? {
        Outcome::Success(_) => Ok(()),
        other => bail!(
            "{}",
            other.message().unwrap_or("synthesis did not complete")
        ),
    }
}
