#[macro_use]
extern crate error_chain;

use std::path::PathBuf;

use clap::Parser;
use tracing::debug;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

use papercompare::catalog::{joined_names, CatalogKind};
use papercompare::errors::*;
use papercompare::layout::Layout;
use papercompare::render;

fn size_list() -> String {
    format!("PRINTER can be one of {:}\nFORMAT can be one of {:}",
            joined_names(CatalogKind::Printer),
            joined_names(CatalogKind::Comparable))
}

/// Draw paper formats life-size on one printable page
#[derive(Parser, Debug)]
#[command(author, version, after_help = size_list())]
struct Args {

    /// Paper size of your printer
    #[arg(short, long, default_value = "A4")]
    printer: String,

    /// Output filename
    #[arg(short, long, default_value = render::DEFAULT_OUTPUT)]
    output: PathBuf,

    /// Log layout details to stderr
    #[arg(short, long)]
    verbose: bool,

    /// Paper sizes to compare, drawn in this order
    #[arg(value_name = "FORMAT")]
    formats: Vec<String>

}

fn init_logging(verbose: bool) {

    let level = if verbose { "debug" } else { "warn" };

    tracing_subscriber::registry()
        .with(EnvFilter::try_from_default_env().unwrap_or_else(|_| {
            EnvFilter::new(format!("{}={}", env!("CARGO_CRATE_NAME"), level))
        }))
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .init();

}

fn run() -> Result<()> {

    let args = Args::parse();

    init_logging(args.verbose);

    debug!("printer {:?}, formats {:?}", args.printer, args.formats);

    let layout = Layout::default();

    render::generate(&args.printer, args.formats.as_slice(), &layout, &args.output)?;

    println!("wrote {:}", args.output.display());

    Ok(())

}

quick_main!(run);
