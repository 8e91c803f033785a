//! xbar-viz CLI entry point.
//!
//! Two modes: parse a sentence through the Gemini API, or render an
//! already-saved model response with --from-json (no network, no key).

use std::fs;
use std::io::{self, Read, Write};
use std::process;

use clap::Parser;
use tracing_subscriber::EnvFilter;

use xbar_viz::client::GeminiClient;
use xbar_viz::{
    render_parse_result, GeminiConfig, ParseResult, RenderOptions, TreeIr, Viewport,
};

/// English sentence to X-bar syntax tree SVG.
#[derive(Parser, Debug)]
#[command(
    name = "xbar-viz",
    version = env!("XBAR_VIZ_VERSION"),
    about = "English sentence to X-bar syntax tree SVG"
)]
struct Cli {
    /// Sentence to parse (requires GEMINI_API_KEY)
    sentence: Option<String>,

    /// Render a saved model response instead of calling the API ("-" for stdin)
    #[arg(long = "from-json", value_name = "FILE")]
    from_json: Option<String>,

    /// Write output to this file instead of stdout
    #[arg(short = 'o', long = "output")]
    output: Option<String>,

    /// Emit a static SVG without the growth animation
    #[arg(long = "static")]
    no_animation: bool,

    /// Viewport width in pixels
    #[arg(long = "width", default_value = "1280")]
    width: f64,

    /// Viewport height in pixels
    #[arg(long = "height", default_value = "800")]
    height: f64,

    /// Override the Gemini model name
    #[arg(long = "model")]
    model: Option<String>,
}

#[tokio::main]
async fn main() {
    dotenvy::dotenv().ok();
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .with_writer(io::stderr)
        .init();

    let cli = Cli::parse();

    let result = if let Some(ref source) = cli.from_json {
        let raw = if source == "-" {
            let mut buf = String::new();
            if let Err(e) = io::stdin().read_to_string(&mut buf) {
                eprintln!("error: cannot read stdin: {}", e);
                process::exit(1);
            }
            buf
        } else {
            match fs::read_to_string(source) {
                Ok(s) => s,
                Err(e) => {
                    eprintln!("error: cannot read '{}': {}", source, e);
                    process::exit(1);
                }
            }
        };
        match xbar_viz::validate_response(&raw) {
            Ok(r) => r,
            Err(e) => {
                eprintln!("error: {}", e);
                process::exit(1);
            }
        }
    } else if let Some(ref sentence) = cli.sentence {
        let mut cfg = GeminiConfig::from_env();
        if let Some(ref model) = cli.model {
            cfg.model = model.clone();
        }
        let parsed = match GeminiClient::new(cfg) {
            Ok(client) => client.parse(sentence).await,
            Err(e) => Err(e),
        };
        match parsed {
            Ok(r) => r,
            Err(e) => {
                eprintln!("error: {}", e);
                if e.needs_new_credentials() {
                    eprintln!("hint: set GEMINI_API_KEY to a valid key");
                }
                process::exit(1);
            }
        }
    } else {
        eprintln!("error: provide a sentence or --from-json FILE");
        process::exit(2);
    };

    report_analysis(&result);

    let options = RenderOptions {
        viewport: Viewport {
            width: cli.width,
            height: cli.height,
        },
        animated: !cli.no_animation,
        ..RenderOptions::default()
    };
    let svg = render_parse_result(&result, &options);

    if let Some(ref path) = cli.output {
        if let Err(e) = fs::write(path, svg) {
            eprintln!("error: cannot write '{}': {}", path, e);
            process::exit(1);
        }
    } else {
        print!("{}", svg);
        if let Err(e) = io::stdout().flush() {
            eprintln!("error: cannot flush stdout: {}", e);
            process::exit(1);
        }
    }
}

/// Print the linguistic analysis to stderr, keeping stdout clean for the SVG.
fn report_analysis(result: &ParseResult) {
    let stats = TreeIr::from_tree(&result.tree).stats();
    eprintln!("{}", result.explanation);
    if !result.parts_of_speech.is_empty() {
        let tags: Vec<String> = result
            .parts_of_speech
            .iter()
            .map(|t| format!("{}/{}", t.word, t.pos))
            .collect();
        eprintln!("parts of speech: {}", tags.join(" "));
    }
    eprintln!(
        "nodes: {}, levels: {}, complexity: {}",
        stats.node_count, stats.depth_levels, stats.complexity
    );
}
