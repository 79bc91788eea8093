//! lmvp2text - HUB4 VP corpus to plain text

use std::fs::File;
use std::io::{self, BufRead, BufReader, Write};
use std::path::PathBuf;
use std::process::ExitCode;

use clap::Parser;
use tracing_subscriber::EnvFilter;

use lmvp2text::{ConversionStats, Error};

#[derive(Parser)]
#[command(name = "lmvp2text")]
#[command(version, about = "Convert HUB4 VP SGML corpora to one sentence per line", long_about = None)]
#[command(after_help = "EXAMPLES:
    lmvp2text < corpus.sgml > corpus.txt    Convert stdin to stdout
    lmvp2text corpus.sgml -o corpus.txt     Convert a file")]
struct Cli {
    /// Input SGML file (default: stdin, or "-")
    #[arg(value_name = "INPUT")]
    input: Option<PathBuf>,

    /// Output text file (default: stdout)
    #[arg(short, long, value_name = "OUTPUT")]
    output: Option<PathBuf>,

    /// Enable debug logging on stderr
    #[arg(short, long)]
    verbose: bool,
}

fn main() -> ExitCode {
    let cli = Cli::parse();
    setup_logging(cli.verbose);

    match run(&cli) {
        Ok(stats) => {
            tracing::debug!(lines = stats.lines_written, "done");
            ExitCode::SUCCESS
        }
        Err(e) => {
            if e.is_corpus_error() {
                eprintln!("{e}");
            } else {
                eprintln!("error: {e}");
            }
            ExitCode::FAILURE
        }
    }
}

fn run(cli: &Cli) -> Result<ConversionStats, Error> {
    let input: Box<dyn BufRead> = match cli.input.as_deref() {
        Some(path) if path.as_os_str() != "-" => {
            tracing::debug!(path = %path.display(), "reading input file");
            Box::new(BufReader::new(File::open(path)?))
        }
        _ => Box::new(io::stdin().lock()),
    };

    let output: Box<dyn Write> = match &cli.output {
        Some(path) => Box::new(File::create(path)?),
        None => Box::new(io::stdout().lock()),
    };

    lmvp2text::convert(input, output)
}

fn setup_logging(verbose: bool) {
    let filter = if verbose {
        EnvFilter::new("debug")
    } else {
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"))
    };

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(io::stderr)
        .with_target(false)
        .compact()
        .init();
}
