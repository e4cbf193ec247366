use clap::{Args, Parser, Subcommand};
use sheet_inspect::cli::{self, OutputFormat, RenderOptions};
use sheet_inspect::config::{ConfigOverrides, InspectConfig};
use sheet_inspect::error::InspectResult;
use std::path::PathBuf;
use tracing_subscriber::EnvFilter;

#[derive(Parser)]
#[command(name = "sheet-inspect")]
#[command(about = "Print worksheet contents of an .xlsx file for manual review.")]
#[command(long_about = "sheet-inspect - read-only Excel worksheet inspector

Loads one worksheet (the first by default) with formulas preserved:
formula cells always print their formula text, never the cached result.

COMMANDS:
  headers   - Non-empty cells of the header rows, column by column
  ranges    - All values of fixed columns (L, M, N) plus the header area
  keywords  - Cells mentioning formwork/rebar/concrete/units, then a full dump
  sheets    - List the worksheets of the workbook

EXAMPLES:
  sheet-inspect headers                       # reads ./골구조도.xlsx
  sheet-inspect ranges plan.xlsx --types
  sheet-inspect keywords plan.xlsx -k 철근,TON
  sheet-inspect --config inspect.yaml --format json keywords

Logging goes to stderr; set RUST_LOG=sheet_inspect=debug for details.")]
#[command(version)]
struct Cli {
    /// YAML configuration file (defaults for every option below)
    #[arg(short, long, global = true)]
    config: Option<PathBuf>,

    /// Worksheet name (default: first sheet)
    #[arg(short, long, global = true)]
    sheet: Option<String>,

    /// Output format
    #[arg(short, long, global = true, value_enum, default_value_t = OutputFormat::Text)]
    format: OutputFormat,

    /// Disable colored headings
    #[arg(long, global = true)]
    no_color: bool,

    /// Log load steps to stderr
    #[arg(short, long, global = true)]
    verbose: bool,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Args)]
struct FileArg {
    /// Path to the workbook (.xlsx)
    #[arg(env = "SHEET_INSPECT_FILE")]
    file: Option<PathBuf>,
}

#[derive(Subcommand)]
enum Commands {
    /// Show non-empty header cells for every column
    Headers {
        #[command(flatten)]
        input: FileArg,

        /// Number of header rows to scan
        #[arg(short, long)]
        rows: Option<u32>,
    },

    #[command(long_about = "Report fixed columns and the header area.

Pass 1 prints every value of the fixed columns (default L, M, N) over all
rows, untruncated. Pass 2 prints every column of the header rows, with
long literal values cut at 50 characters.")]
    /// Show all values of fixed columns plus the header area
    Ranges {
        #[command(flatten)]
        input: FileArg,

        /// Columns to report (letters or 1-based numbers)
        #[arg(long, value_delimiter = ',')]
        columns: Option<Vec<String>>,

        /// Number of header rows to print
        #[arg(short, long)]
        rows: Option<u32>,

        /// Annotate fixed-column values with their data type
        #[arg(short, long)]
        types: bool,
    },

    #[command(long_about = "Find cells related to construction quantities.

Every cell is matched case-insensitively against the keyword list (first
keyword wins), then the whole sheet is dumped row by row.

DEFAULT KEYWORDS:
  형틀, 갱폼, 알폼, 철근, 콘크리트, 물량, M2, TON, M3")]
    /// Search cells for quantity keywords, then dump the sheet
    Keywords {
        #[command(flatten)]
        input: FileArg,

        /// Comma-separated keyword list (replaces the defaults)
        #[arg(short, long, value_delimiter = ',')]
        keywords: Option<Vec<String>>,
    },

    /// List worksheet names
    Sheets {
        #[command(flatten)]
        input: FileArg,
    },
}

fn init_tracing(verbose: bool) {
    let default_filter = if verbose {
        "sheet_inspect=info"
    } else {
        "sheet_inspect=warn"
    };
    tracing_subscriber::fmt()
        .with_writer(std::io::stderr)
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| default_filter.into()),
        )
        .init();
}

fn main() -> InspectResult<()> {
    let cli = Cli::parse();
    init_tracing(cli.verbose);

    if cli.no_color {
        colored::control::set_override(false);
    }
    let options = RenderOptions {
        format: cli.format,
        color: !cli.no_color,
    };

    let mut overrides = ConfigOverrides {
        sheet: cli.sheet,
        ..Default::default()
    };
    let base = InspectConfig::load(cli.config.as_deref())?;

    let result = match cli.command {
        Commands::Headers { input, rows } => {
            overrides.file = input.file;
            overrides.header_rows = rows;
            cli::headers(&base.with_overrides(overrides)?, options)
        }

        Commands::Ranges {
            input,
            columns,
            rows,
            types,
        } => {
            overrides.file = input.file;
            overrides.header_rows = rows;
            overrides.report_columns = columns;
            cli::ranges(&base.with_overrides(overrides)?, types, options)
        }

        Commands::Keywords { input, keywords } => {
            overrides.file = input.file;
            overrides.keywords = keywords;
            cli::keywords(&base.with_overrides(overrides)?, options)
        }

        Commands::Sheets { input } => {
            overrides.file = input.file;
            cli::sheets(&base.with_overrides(overrides)?)
        }
    };

    if let Err(ref e) = result {
        tracing::error!(kind = e.kind(), "{}", e);
    }
    result
}
