//! A terminal front end for the variant lookup tools.

#[macro_use]
extern crate tracing;

use std::io::Write as _;
use std::process::ExitCode;
use std::time::Duration;

use clap::{Parser, Subcommand};
use indicatif::{ProgressBar, ProgressStyle};
use owo_colors::OwoColorize;
use serde_json::{Value, json};
use tokio::io::{self, AsyncBufRead, AsyncBufReadExt};
use varinsight::core::source::omim::SummaryDatabase;
use varinsight::core::tool::Error as ToolError;
use varinsight::{Toolbox, ToolboxBuilder, VariantQuery};
use varinsight_http_eutils::EutilsConfigBuilder;

const BAR_CHAR: &str = "▎";

/// Looks up genetic variants in ClinVar, PubMed, OMIM, MeSH and MedGen.
#[derive(Parser, Debug)]
#[command(name = "varinsight", version, about, long_about = None)]
struct Cli {
    /// NCBI API key, raises the allowed request rate.
    #[arg(long, env = "NCBI_API_KEY", hide_env_values = true, global = true)]
    api_key: Option<String>,

    /// Contact email sent along with every request.
    #[arg(long, env = "NCBI_EMAIL", global = true)]
    email: Option<String>,

    /// Base URL of the E-utilities service.
    #[arg(long, env = "EUTILS_BASE_URL", global = true)]
    base_url: Option<String>,

    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(Subcommand, Debug)]
enum Commands {
    /// Look up a variant in ClinVar.
    Clinvar {
        /// The variant, e.g. `c.1187G>A`.
        #[arg(long)]
        variant: String,
        /// The gene symbol, e.g. `CMTR1`.
        #[arg(long)]
        gene: String,
    },
    /// Search or read PubMed.
    Pubmed {
        #[command(subcommand)]
        method: PubMedCommand,
    },
    /// Read one OMIM, MeSH or MedGen record.
    Summary {
        /// The record id.
        id: String,
        /// One of `omim`, `mesh` or `medgen`.
        #[arg(long, default_value = "omim")]
        database: SummaryDatabase,
    },
    /// Print the definitions of all tools as JSON.
    Tools,
    /// Call a tool by name with JSON arguments.
    Call {
        /// The tool name.
        name: String,
        /// The arguments, as a JSON object.
        arguments: String,
    },
}

#[derive(Subcommand, Debug)]
enum PubMedCommand {
    /// List up to 5 article ids matching a query.
    Search {
        /// The query.
        term: String,
    },
    /// Fetch the summary of one article.
    Fetch {
        /// The PubMed id.
        id: String,
    },
}

#[tokio::main(flavor = "current_thread")]
async fn main() -> ExitCode {
    tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();

    let mut config = EutilsConfigBuilder::new();
    if let Some(api_key) = cli.api_key {
        config = config.with_api_key(api_key);
    }
    if let Some(email) = cli.email {
        config = config.with_email(email);
    }
    if let Some(base_url) = cli.base_url {
        config = config.with_base_url(base_url);
    }
    let config = config.build();
    debug!("using config: {config:?}");

    let toolbox = ToolboxBuilder::with_config(config).build();

    let (name, arguments) = match cli.command {
        None => {
            interactive(&toolbox).await;
            return ExitCode::SUCCESS;
        }
        Some(Commands::Tools) => {
            return match serde_json::to_string_pretty(&toolbox.definitions()) {
                Ok(definitions) => {
                    println!("{definitions}");
                    ExitCode::SUCCESS
                }
                Err(err) => {
                    eprintln!("{err}");
                    ExitCode::FAILURE
                }
            };
        }
        Some(Commands::Clinvar { variant, gene }) => {
            ("clinvar".to_owned(), json!({ "variant": variant, "gene": gene }))
        }
        Some(Commands::Pubmed { method }) => {
            let arguments = match method {
                PubMedCommand::Search { term } => {
                    json!({ "term": term, "method": "Search" })
                }
                PubMedCommand::Fetch { id } => {
                    json!({ "term": id, "method": "Fetch" })
                }
            };
            ("pubmed".to_owned(), arguments)
        }
        Some(Commands::Summary { id, database }) => (
            "omim".to_owned(),
            json!({ "id": id, "database": database.to_string() }),
        ),
        Some(Commands::Call { name, arguments }) => {
            match serde_json::from_str::<Value>(&arguments) {
                Ok(arguments) => (name, arguments),
                Err(err) => {
                    eprintln!("invalid arguments: {err}");
                    return ExitCode::FAILURE;
                }
            }
        }
    };

    match toolbox.call(&name, arguments).await {
        Ok(output) => {
            println!("{output}");
            ExitCode::SUCCESS
        }
        Err(err) => {
            eprintln!("{err}");
            ExitCode::FAILURE
        }
    }
}

async fn interactive(toolbox: &Toolbox) {
    let mut stdin = io::BufReader::new(io::stdin());
    lookup_lines(toolbox, &mut stdin).await;
}

/// Reads queries from `reader` until it runs dry, printing one report per
/// query.
async fn lookup_lines<R: AsyncBufRead + Unpin>(
    toolbox: &Toolbox,
    reader: &mut R,
) {
    let progress_style = ProgressStyle::with_template("{spinner} {wide_msg}")
        .unwrap_or_else(|_| ProgressStyle::default_spinner())
        .tick_chars("⠋⠙⠹⠸⠼⠴⠦⠧⠇⠏");

    loop {
        print!("Enter a variant and gene: ");
        std::io::stdout().flush().ok();

        let Some(line) = read_line(reader).await else {
            break;
        };
        if line.trim().is_empty() {
            continue;
        }
        let Some(query) = VariantQuery::parse(&line) else {
            let bar = BAR_CHAR.bright_yellow();
            println!("{bar}Try something like `c.1187G>A in CMTR1 gene`.\n");
            continue;
        };

        let progress_bar = ProgressBar::new_spinner();
        progress_bar.set_style(progress_style.clone());
        progress_bar.set_message(format!("🔎 Looking up {query}..."));
        progress_bar.enable_steady_tick(Duration::from_millis(100));

        let result = toolbox
            .call(
                "clinvar",
                json!({ "variant": query.variant, "gene": query.gene }),
            )
            .await;

        // Finish the progress bar before printing anything else.
        progress_bar.finish_and_clear();

        match result {
            Ok(report) => print_report(&report),
            Err(err) => print_error(&err),
        }
    }
}

fn print_report(report: &str) {
    let bar = BAR_CHAR.bright_cyan();
    for line in report.lines() {
        println!("{bar}{}", line.bright_white());
    }
    println!();
}

fn print_error(err: &ToolError) {
    println!("{}❌ {}\n", BAR_CHAR.bright_red(), err.bright_white());
}

async fn read_line<R: AsyncBufRead + Unpin>(
    reader: &mut R,
) -> Option<String> {
    let mut line = String::new();

    match reader.read_line(&mut line).await {
        Ok(count) => {
            if count == 0 {
                return None;
            }
            Some(line)
        }
        Err(err) => {
            error!("error reading input: {}", err);
            None
        }
    }
}

#[cfg(test)]
mod tests {
    use varinsight_test_eutils::TestTransport;

    use super::*;

    #[tokio::test(start_paused = true)]
    async fn test_lookup_every_piped_line() {
        let transport = TestTransport::default();
        for _ in 0..3 {
            transport.add_search_ids::<&str>(&[]);
            transport.add_summary_records::<&str>(&[]);
        }
        let toolbox = ToolboxBuilder::with_transport(transport.clone()).build();

        let mut input: &[u8] = b"c.1A>T CMTR1\n\nnot-a-query\n\
            c.2A>T + CMTR1\nc.3A>T in CMTR1 gene\n";
        lookup_lines(&toolbox, &mut input).await;

        let terms: Vec<_> = transport
            .calls()
            .iter()
            .filter_map(|call| call.request.param("term").map(str::to_owned))
            .collect();
        assert_eq!(
            terms,
            ["c.1A>T + CMTR1", "c.2A>T + CMTR1", "c.3A>T + CMTR1"]
        );
        assert_eq!(transport.remaining(), 0);
    }
}
