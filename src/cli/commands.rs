use crate::config::InspectConfig;
use crate::error::InspectResult;
use crate::excel::{Worksheet, WorkbookLoader};
use crate::report::{
    locate_keywords, render_colored, render_plain, report_ranges, scan_headers, Report,
};
use clap::ValueEnum;
use serde::Serialize;
use tracing::info;

/// How reports are written to stdout
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, ValueEnum)]
pub enum OutputFormat {
    /// Human-readable sections
    #[default]
    Text,
    /// Pretty-printed JSON
    Json,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct RenderOptions {
    pub format: OutputFormat,
    /// Colored headings in text output
    pub color: bool,
}

/// The three inspection routines
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Mode {
    Headers,
    Ranges { show_types: bool },
    Keywords,
}

/// Load the configured worksheet and build the report for `mode`
pub fn inspect(mode: Mode, config: &InspectConfig, options: RenderOptions) -> InspectResult<String> {
    let sheet = WorkbookLoader::new(&config.file).load(config.sheet.as_deref())?;
    render_mode(mode, &sheet, config, options)
}

/// Build and render a report from an already loaded worksheet
pub fn render_mode(
    mode: Mode,
    sheet: &Worksheet,
    config: &InspectConfig,
    options: RenderOptions,
) -> InspectResult<String> {
    let widths = config.truncate;
    match mode {
        Mode::Headers => {
            let report = scan_headers(sheet, config.header_rows, widths.headers);
            emit(&report, options)
        }
        Mode::Ranges { show_types } => {
            let columns = config.report_column_indices()?;
            let report = report_ranges(sheet, &columns, config.header_rows, widths.ranges)
                .with_types(show_types);
            emit(&report, options)
        }
        Mode::Keywords => {
            let report = locate_keywords(sheet, &config.keywords, widths.keywords);
            info!(matches = report.matches.len(), "keyword search finished");
            emit(&report, options)
        }
    }
}

fn emit<R: Report + Serialize>(report: &R, options: RenderOptions) -> InspectResult<String> {
    match options.format {
        OutputFormat::Text if options.color => Ok(render_colored(&report.lines())),
        OutputFormat::Text => Ok(render_plain(&report.lines())),
        OutputFormat::Json => {
            let mut json = serde_json::to_string_pretty(report)?;
            json.push('\n');
            Ok(json)
        }
    }
}

/// Execute the headers command
pub fn headers(config: &InspectConfig, options: RenderOptions) -> InspectResult<()> {
    print!("{}", inspect(Mode::Headers, config, options)?);
    Ok(())
}

/// Execute the ranges command
pub fn ranges(config: &InspectConfig, show_types: bool, options: RenderOptions) -> InspectResult<()> {
    print!("{}", inspect(Mode::Ranges { show_types }, config, options)?);
    Ok(())
}

/// Execute the keywords command
pub fn keywords(config: &InspectConfig, options: RenderOptions) -> InspectResult<()> {
    print!("{}", inspect(Mode::Keywords, config, options)?);
    Ok(())
}

/// Execute the sheets command - list worksheet names, one per line
pub fn sheets(config: &InspectConfig) -> InspectResult<()> {
    for name in WorkbookLoader::new(&config.file).sheet_names()? {
        println!("{}", name);
    }
    Ok(())
}
