use std::fs;
use std::io::{self, Read};
use std::path::PathBuf;
use std::process::ExitCode;

use anyhow::Context;
use clap::{CommandFactory, Parser};
use html2csv_core::{ConvertConfig, Document, select_tables};
use owo_colors::OwoColorize;
use tracing_subscriber::EnvFilter;

mod echo;

const VERSION: &str = env!("CARGO_PKG_VERSION");
const RUSTC_VERSION: &str = env!("HTML2CSV_RUSTC_VERSION");

/// Convert HTML tables (or plain directory listings) to CSV
#[derive(Parser, Debug)]
#[command(name = "html2csv")]
#[command(about = "Convert HTML tables to CSV", long_about = None)]
#[command(disable_version_flag = true)]
struct Args {
    /// HTML file to read (default: stdin)
    #[arg(value_name = "FILE")]
    files: Vec<PathBuf>,

    /// Field delimiter (a single ASCII character)
    #[arg(short, long, default_value = ",", value_name = "CHAR")]
    delimiter: String,

    /// Select tables by index, id or name (comma-separated)
    #[arg(short, long, value_name = "SELECTOR")]
    table: Option<String>,

    /// Skip the first row of every table
    #[arg(short = 'H', long)]
    no_header: bool,

    /// Use tab as delimiter (overrides --delimiter)
    #[arg(short = 'T', long)]
    tsv: bool,

    /// Enable debug logging
    #[arg(short, long)]
    verbose: bool,

    /// Print version and exit
    #[arg(long)]
    version: bool,
}

impl Args {
    /// Builds the conversion config, validating delimiter and selector.
    fn config(&self) -> html2csv_core::Result<ConvertConfig> {
        let mut builder = ConvertConfig::builder().skip_header(self.no_header);

        builder = if self.tsv { builder.tsv(true) } else { builder.delimiter(&self.delimiter)? };
        if let Some(selector) = &self.table {
            builder = builder.selector(selector)?;
        }

        Ok(builder.build())
    }
}

fn init_tracing(verbose: bool) {
    let default = if verbose { "html2csv_core=debug" } else { "warn" };
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(io::stderr)
        .with_target(false)
        .init();
}

fn read_input(file: Option<&PathBuf>, verbose: bool) -> anyhow::Result<Vec<u8>> {
    let mut buffer = Vec::new();

    match file {
        Some(path) => {
            if verbose {
                echo::print_step(1, 3, &format!("Reading from file {}", path.display().bright_white()));
            }
            let mut f = fs::File::open(path).with_context(|| format!("Failed to open file: {}", path.display()))?;
            f.read_to_end(&mut buffer)
                .with_context(|| format!("Failed to read file: {}", path.display()))?;
        }
        None => {
            if verbose {
                echo::print_step(1, 3, "Reading from stdin");
            }
            io::stdin()
                .lock()
                .read_to_end(&mut buffer)
                .context("Failed to read from stdin")?;
        }
    }

    if verbose {
        eprintln!("  {} {}", "Size:".dimmed(), echo::format_size(buffer.len()).bright_white());
        eprintln!();
    }

    Ok(buffer)
}

fn run(args: &Args) -> anyhow::Result<()> {
    let config = args.config()?;

    if args.verbose {
        echo::print_banner();
        echo::print_info("Debug logging enabled");
        eprintln!();
    }

    let input = read_input(args.files.first(), args.verbose)?;

    if args.verbose {
        echo::print_step(2, 3, "Extracting tables");
    }

    let doc = Document::from_bytes(&input, config.lossy).context("Failed to parse HTML")?;
    let tables = select_tables(&doc, &config);

    if args.verbose {
        if let Some(title) = doc.title() {
            eprintln!("  {} {}", "Title:".dimmed(), title.bright_white());
        }
        echo::print_tables(&tables);
        echo::print_step(3, 3, "Writing output");
    }

    config
        .encoder()
        .encode(io::stdout().lock(), &tables)
        .context("Failed to write output")?;

    Ok(())
}

fn main() -> ExitCode {
    let args = Args::parse();

    if args.version {
        println!(
            "html2csv v{} {} {}/{}",
            VERSION,
            RUSTC_VERSION,
            std::env::consts::OS,
            std::env::consts::ARCH
        );
        return ExitCode::SUCCESS;
    }

    if args.files.len() > 1 {
        eprintln!("{}", Args::command().render_usage());
        return ExitCode::from(1);
    }

    init_tracing(args.verbose);

    match run(&args) {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            echo::print_error(&format!("{:#}", err));
            ExitCode::from(1)
        }
    }
}
