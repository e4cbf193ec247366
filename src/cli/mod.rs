//! CLI command handlers

pub mod commands;

pub use commands::{
    headers, inspect, keywords, ranges, render_mode, sheets, Mode, OutputFormat, RenderOptions,
};
