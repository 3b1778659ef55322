//! EcoGuide terminal front end.
//!
//! Reads a waste-item description, blocks on one classifier-gateway call,
//! and renders a result card followed by the quick reference guide.
//! Empty input is rejected here — the gateway never sees it.

use std::io::{self, BufRead, Write};

use clap::Parser;

use ecoguide::llm::{self, provider, Outcome};
use ecoguide::render;

#[derive(Parser, Debug)]
#[command(
    name = "ecoguide",
    version,
    about = "Your assistant for correct recycling"
)]
struct Cli {
    /// Waste item to classify (interactive mode when omitted).
    item: Vec<String>,

    /// Print the color reference guide and exit.
    #[arg(long)]
    guide: bool,

    /// Print the outcome as JSON instead of a card (one-shot mode only).
    #[arg(long, requires = "item")]
    json: bool,
}

#[tokio::main]
async fn main() {
    provider::load_env();
    env_logger::init();

    let cli = Cli::parse();

    if cli.guide {
        print!("{}", render::guide_table());
        return;
    }

    if !provider::is_configured() {
        eprintln!("GEMINI_API_KEY is not set — add it to .env.local or the environment.");
        std::process::exit(1);
    }

    if !cli.item.is_empty() {
        let Some(item) = normalized_item(&cli.item) else {
            eprintln!("⚠️  Please type a waste item first.");
            std::process::exit(1);
        };
        if cli.json {
            classify_to_json(&item).await;
        } else {
            classify_and_render(&item).await;
        }
        return;
    }

    run_interactive().await;
}

/// Join one-shot args into the item text. `None` when nothing but
/// whitespace remains — the gateway never sees empty input.
fn normalized_item(args: &[String]) -> Option<String> {
    let item = args.join(" ").trim().to_string();
    (!item.is_empty()).then_some(item)
}

/// Prompt/classify/render loop. Exits on EOF or "quit".
async fn run_interactive() {
    println!("🌱 EcoGuide — type a waste item (e.g. pizza box, battery, egg shell).");
    println!("   \"quit\" exits.");

    let stdin = io::stdin();
    loop {
        print!("> ");
        let _ = io::stdout().flush();

        let mut line = String::new();
        match stdin.lock().read_line(&mut line) {
            Ok(0) | Err(_) => break,
            Ok(_) => {}
        }

        let item = line.trim();
        if item.eq_ignore_ascii_case("quit") {
            break;
        }
        if item.is_empty() {
            println!("⚠️  Please type a waste item first.");
            continue;
        }

        classify_and_render(item).await;
    }
}

/// One blocking classification with a waiting line, then the rendered
/// outcome and the reference guide.
async fn classify_and_render(item: &str) {
    println!("🧠 Analyzing...");

    match llm::classify(item).await {
        Ok(Outcome::Structured(c)) => print!("{}", render::classification_card(&c)),
        Ok(Outcome::Raw(text)) => print!("{}", render::raw_card(&text)),
        Err(e) => {
            log::error!("[LLM] Classification failed: {}", e);
            eprintln!("❌ There was a connection problem. Please try again.");
        }
    }

    println!();
    print!("{}", render::guide_table());
}

/// One-shot machine-readable output: the outcome as JSON on stdout.
/// Errors keep the generic banner on stderr and a non-zero exit.
async fn classify_to_json(item: &str) {
    match llm::classify(item).await {
        Ok(outcome) => match serde_json::to_string_pretty(&outcome) {
            Ok(body) => println!("{}", body),
            Err(e) => {
                log::error!("[LLM] Failed to encode outcome: {}", e);
                std::process::exit(1);
            }
        },
        Err(e) => {
            log::error!("[LLM] Classification failed: {}", e);
            eprintln!("❌ There was a connection problem. Please try again.");
            std::process::exit(1);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::normalized_item;

    fn args(items: &[&str]) -> Vec<String> {
        items.iter().map(|s| s.to_string()).collect()
    }

    #[test]
    fn joined_args_become_the_item_text() {
        assert_eq!(
            normalized_item(&args(&["pizza", "box"])).as_deref(),
            Some("pizza box")
        );
    }

    #[test]
    fn whitespace_only_args_are_rejected_before_the_gateway() {
        assert_eq!(normalized_item(&args(&["  "])), None);
        assert_eq!(normalized_item(&args(&[""])), None);
        assert_eq!(normalized_item(&args(&["", "  ", ""])), None);
    }
}
