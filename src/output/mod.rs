//
//  floe-cli
//  output/mod.rs
//
//  Created by Ngonidzashe Mangudya on 2026/02/20.
//  Copyright (c) 2026 IAMNGONI. All rights reserved.
//

//! # Output Module
//!
//! Output formatting for the Floe CLI, supporting three formats:
//!
//! - **Table**: human-readable tabular output for interactive terminal use
//! - **JSON**: machine-readable output for scripting and automation
//! - **YAML**: machine-readable output favoured by pipeline tooling
//!
//! ## Architecture
//!
//! - [`table`]: table rendering via `comfy_table`
//! - [`json`]: JSON serialization via `serde_json`
//! - [`yaml`]: YAML serialization via `serde_yaml`
//!
//! Entities implement [`TableOutput`] to describe their columns; JSON and
//! YAML rendering need only `Serialize`.

mod json;
mod table;
mod yaml;

pub use json::*;
pub use table::*;
pub use yaml::*;

use anyhow::Result;
use clap::ValueEnum;
use serde::Serialize;

/// The available output formats, selectable with `-o/--output`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, ValueEnum)]
pub enum OutputFormat {
    /// Human-readable table (the default).
    #[default]
    Table,
    /// Pretty-printed JSON.
    Json,
    /// YAML.
    Yaml,
}

/// A type that can be rendered as a table.
pub trait TableOutput {
    /// Column headers.
    fn headers() -> Vec<&'static str>;

    /// One table row for this value.
    fn row(&self) -> Vec<String>;
}

/// Writes entities to stdout in the selected format.
#[derive(Debug, Clone, Copy)]
pub struct OutputWriter {
    format: OutputFormat,
}

impl OutputWriter {
    /// Creates a writer for the given format.
    pub fn new(format: OutputFormat) -> Self {
        Self { format }
    }

    /// Writes a list of entities.
    pub fn write_list<T: Serialize + TableOutput>(&self, items: &[T]) -> Result<()> {
        match self.format {
            OutputFormat::Table => print!("{}", render_table(items)),
            OutputFormat::Json => println!("{}", to_json_pretty(items)?),
            OutputFormat::Yaml => print!("{}", to_yaml(items)?),
        }
        Ok(())
    }

    /// Writes a single entity.
    pub fn write_item<T: Serialize + TableOutput>(&self, item: &T) -> Result<()> {
        match self.format {
            OutputFormat::Table => print!("{}", render_item_table(item)),
            OutputFormat::Json => println!("{}", to_json_pretty(item)?),
            OutputFormat::Yaml => print!("{}", to_yaml(item)?),
        }
        Ok(())
    }

    /// Writes a styled success message to stdout (table format only; the
    /// machine formats stay parseable).
    pub fn write_success(&self, message: &str) {
        if self.format == OutputFormat::Table {
            println!("{} {}", console::style("✓").green().bold(), message);
        }
    }
}
