use clap::{Parser, ValueEnum};
use color_eyre::Result;
use std::path::PathBuf;
use tracing_subscriber::EnvFilter;

use moss_export::command::{execute, ExportOptions, ExportStatus, Notifier};
use moss_export::export::{NoViewer, ReportFormat, SystemViewer, Viewer};
use moss_export::parser::parse_document_file;
use moss_export::report::RowOrder;
use moss_export::ui::{ConsoleNotice, TerminalNotice};

#[derive(Parser, Debug)]
#[command(name = "moss-export")]
#[command(about = "MOSS Export - export Model Object Style Settings to a spreadsheet")]
#[command(version)]
struct Args {
    /// Path to the document snapshot (JSON)
    #[arg(required = true)]
    file: PathBuf,

    /// Folder for the report (defaults to the desktop)
    #[arg(long, value_name = "DIR")]
    output_dir: Option<PathBuf>,

    /// Report file format
    #[arg(long, value_enum, default_value_t = Format::Xlsx)]
    format: Format,

    /// Sort rows by parent label, then name
    #[arg(long)]
    sorted: bool,

    /// Do not open the report after writing it
    #[arg(long)]
    no_open: bool,

    /// Skip the interactive notice
    #[arg(short, long)]
    yes: bool,

    /// Log every exported row
    #[arg(short, long)]
    verbose: bool,
}

#[derive(Debug, Clone, Copy, ValueEnum)]
enum Format {
    Xlsx,
    Csv,
    Json,
    Txt,
}

impl From<Format> for ReportFormat {
    fn from(format: Format) -> Self {
        match format {
            Format::Xlsx => Self::Xlsx,
            Format::Csv => Self::Csv,
            Format::Json => Self::Json,
            Format::Txt => Self::Text,
        }
    }
}

fn init_tracing(verbose: bool) {
    let default_filter = if verbose {
        "moss_export=debug"
    } else {
        "moss_export=info"
    };
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| default_filter.into()),
        )
        .with_writer(std::io::stderr)
        .init();
}

fn main() -> Result<()> {
    color_eyre::install()?;
    let args = Args::parse();
    init_tracing(args.verbose);

    let document = parse_document_file(&args.file)?;

    let options = ExportOptions {
        output_dir: args.output_dir,
        format: args.format.into(),
        order: if args.sorted {
            RowOrder::ParentThenName
        } else {
            RowOrder::Traversal
        },
    };

    let mut notifier: Box<dyn Notifier> = if args.yes {
        Box::new(ConsoleNotice)
    } else {
        Box::new(TerminalNotice)
    };
    let viewer: Box<dyn Viewer> = if args.no_open {
        Box::new(NoViewer)
    } else {
        Box::new(SystemViewer)
    };

    match execute(&document, &options, notifier.as_mut(), viewer.as_ref())? {
        ExportStatus::Succeeded { path, rows } => {
            println!("Exported {rows} rows to: {}", path.display());
        }
        ExportStatus::Cancelled => println!("Export cancelled"),
    }

    Ok(())
}
