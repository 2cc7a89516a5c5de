use aidetect::session::ConfidenceColor;
use aidetect::{
    render_result, ClientConfig, HealthIndicator, HttpDetectorApi, Panel, SessionController, UiState, View,
};
use anyhow::Context;
use clap::Parser;
use log::info;
use tokio::io::{AsyncBufReadExt, BufReader};

#[derive(Parser)]
#[command(author, version, about, long_about = None)]
struct Args {
    /// Base URL of the detection service (defaults to http://localhost:8000)
    #[arg(short, long, env = "AIDETECT_API_URL")]
    base_url: Option<String>,

    /// Analyze this text and exit
    #[arg(short, long)]
    text: Option<String>,

    /// Analyze a built-in example and exit
    #[arg(short, long)]
    example: Option<u32>,

    /// List the built-in examples and exit
    #[arg(long)]
    list_examples: bool,

    /// Do not probe the service health at start-up
    #[arg(long)]
    skip_health: bool,
}

/// Prints state changes to the terminal. Only panel transitions are printed.
#[derive(Default)]
struct TerminalView {
    last_panel: Option<String>,
}

impl TerminalView {
    fn paint(color: ConfidenceColor, text: &str) -> String {
        let code = match color {
            ConfidenceColor::Green => "32",
            ConfidenceColor::Yellow => "33",
            ConfidenceColor::Orange => "38;5;208",
            ConfidenceColor::Red => "31",
            ConfidenceColor::Neutral => "0",
        };
        format!("\x1b[{}m{}\x1b[0m", code, text)
    }
}

impl View for TerminalView {
    fn render(&mut self, state: &UiState) {
        let output = match state.panel() {
            Panel::Empty => return,
            Panel::Loading => "Analyzing...".to_string(),
            Panel::Error(message) => format!("Error: {}", message),
            Panel::Result(result) => {
                let rendered = render_result(result);
                let mut lines = vec![
                    format!("\n{} {}", rendered.icon, rendered.caption),
                    format!("  AI:         {}", rendered.ai_percent),
                    format!("  Human:      {}", rendered.human_percent),
                    format!(
                        "  Confidence: {}",
                        Self::paint(rendered.confidence.color, &rendered.confidence.text)
                    ),
                ];
                if let Some(details) = rendered.details {
                    lines.push(format!("  {}", details));
                }
                lines.join("\n")
            }
        };

        if self.last_panel.as_deref() != Some(output.as_str()) {
            println!("{}", output);
            self.last_panel = Some(output);
        }
    }

    fn render_health(&mut self, indicator: HealthIndicator) {
        match indicator {
            HealthIndicator::Checking => {}
            other => println!("Service: {}", other.label()),
        }
    }
}

fn print_help() {
    println!("Type or paste text and press Enter to analyze it.");
    println!("  :example N   load example N (press Enter to analyze it)");
    println!("  :list        list examples");
    println!("  :clear       clear input and result");
    println!("  :quit        exit");
}

fn print_examples(config: &ClientConfig) {
    for (id, text) in config.examples().iter() {
        println!("  [{}] {}", id, text);
    }
}

async fn interactive(session: &mut SessionController<HttpDetectorApi, TerminalView>) -> anyhow::Result<()> {
    print_help();
    let mut lines = BufReader::new(tokio::io::stdin()).lines();

    while let Some(line) = lines.next_line().await.context("failed to read from stdin")? {
        let command = line.trim();
        match command {
            ":quit" | ":exit" => break,
            ":clear" => session.clear(),
            ":list" => print_examples(session.config()),
            ":help" => print_help(),
            _ if command.starts_with(":example") => {
                let loaded = match command.trim_start_matches(":example").trim().parse::<u32>() {
                    Ok(id) => session.load_example(id),
                    Err(_) => false,
                };
                if loaded {
                    println!("Loaded example: {}", session.state().input);
                    println!("Press Enter to analyze it.");
                } else {
                    println!("Unknown example, try :list");
                }
            }
            "" if !session.state().input.trim().is_empty() => {
                session.submit().await;
            }
            _ => {
                session.set_input(line.clone());
                session.submit().await;
            }
        }
    }

    Ok(())
}

#[tokio::main(flavor = "current_thread")]
async fn main() -> anyhow::Result<()> {
    env_logger::init();
    let args = Args::parse();

    let mut builder = ClientConfig::builder();
    if let Some(url) = args.base_url {
        builder = builder.with_base_url(url)?;
    }
    let config = builder.build().context("invalid client configuration")?;

    if args.list_examples {
        print_examples(&config);
        return Ok(());
    }

    info!("=== Using detection service at {} ===", config.base_url());
    let api = HttpDetectorApi::new(&config);
    let mut session = SessionController::new(config, api, TerminalView::default());

    if !args.skip_health {
        session.probe_health().await;
    }

    if let Some(id) = args.example {
        if !session.load_example(id) {
            anyhow::bail!("no example with id {}", id);
        }
        session.submit().await;
        return Ok(());
    }

    if let Some(text) = args.text {
        session.analyze(&text).await;
        return Ok(());
    }

    interactive(&mut session).await
}
