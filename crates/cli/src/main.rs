use clap::Parser;
use html_adapter::HtmlPageWriter;
use logfile_adapter::FlatFileLogSource;
use quotes_core::domain::Extraction;
use quotes_core::ports::{LogSource, PageWriter};

/// The curated quotes, in page order.
// 1-indexed line numbers!
const DEFAULT_EXTRACTIONS: &[(usize, Option<&str>)] = &[
    (
        83277,
        Some("About a different kind of quote, but that's good enough for me! :)"),
    ),
    (100995, None),
    (104142, Some("Fuzzers are even worse than users.")),
    (119659, None),
    (122663, Some("A quote about putting quotes in VC, in VC.")),
    (125770, Some("Apparently I said that once too often.")),
    (125768, Some("\"jk but only a little bit jk\"")),
    (125894, Some("C++ templates will lead you down the rabbithole.")),
    (
        128669,
        Some("The IRC notifications are a little bit harsh sometimes, especially if they all seem to spell failure."),
    ),
    (
        132827,
        Some("Overflow-correct code is deviously hard. https://github.com/SerenityOS/serenity/commit/183b2e71ba8d85293db493cab27b8adb4af54981"),
    ),
];

/// CLI tool to render curated quotes from the #serenityos IRC log as static HTML pages
#[derive(Parser, Debug)]
#[command(name = "quotes-cli")]
#[command(about = "Renders curated quotes from the #serenityos IRC log as static HTML pages")]
struct Cli {
    /// Path to the flat IRC log file, one chat event per line
    #[arg(short = 'i', long = "input-log", default_value = "serenityos")]
    input_log: String,

    /// Directory the HTML pages are written into; must already exist
    #[arg(short = 'o', long = "output-dir", default_value = "pages")]
    output_dir: String,
}

fn default_extractions() -> Vec<Extraction> {
    DEFAULT_EXTRACTIONS
        .iter()
        .map(|&(lineno, context)| Extraction::new(lineno, context.map(String::from)))
        .collect()
}

fn main() {
    let cli = Cli::parse();

    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::from_default_env()
                .add_directive(tracing::Level::WARN.into()),
        )
        .with_writer(std::io::stderr)
        .init();

    // Instantiate concrete implementations of secondary adapters
    let log_source: Box<dyn LogSource> = Box::new(FlatFileLogSource::new(cli.input_log.clone()));

    let page_writer: Box<dyn PageWriter> = Box::new(HtmlPageWriter::new(cli.output_dir.clone()));

    // Instantiate the core business service with dependency injection
    let service = quotes_core::application::QuoteSiteService::new(log_source, page_writer);

    // Execute the primary port method
    match service.generate(&default_extractions()) {
        Ok(summary) => {
            println!(
                "Successfully wrote {} quote pages and index.html to {} ({} log lines)",
                summary.quote_pages, cli.output_dir, summary.line_count
            );
        }
        Err(e) => {
            eprintln!("Error: {}", e);
            std::process::exit(1);
        }
    }
}
