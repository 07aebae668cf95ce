// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! CLI definitions for the essentia command-line interface.
//!
//! Three subcommands: `search` to rank products, `suggest` to preview
//! search-as-you-type completions, and `inspect` to summarize a catalog file.
//! Every command reads the catalog fresh, so editing the JSON and re-running
//! is the whole workflow.

pub mod display;
pub mod output;

use clap::{Parser, Subcommand};
use std::path::PathBuf;

#[derive(Parser)]
#[command(
    name = "essentia",
    about = "Fuzzy product search and autosuggest for essential-oil catalogs",
    version
)]
pub struct Cli {
    /// TOML file overriding the built-in search configuration
    #[arg(long, global = true)]
    pub config: Option<PathBuf>,

    /// Log debug output to stderr (overrides RUST_LOG)
    #[arg(short, long, global = true)]
    pub verbose: bool,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Search a catalog and display ranked products
    Search {
        /// Path to the catalog JSON file
        catalog: PathBuf,

        /// Search query
        query: String,

        /// Only products in this category ("all" for no filter)
        #[arg(long)]
        category: Option<String>,

        /// Only products in this collection ("all" for no filter)
        #[arg(long)]
        collection: Option<String>,

        /// Maximum number of results (capped by the configured maximum)
        #[arg(short, long)]
        limit: Option<usize>,

        /// Skip computing suggestions alongside results
        #[arg(long)]
        no_suggestions: bool,

        /// Print the response as JSON
        #[arg(long)]
        json: bool,
    },

    /// Show suggestions for a partial query
    Suggest {
        /// Path to the catalog JSON file
        catalog: PathBuf,

        /// Partial query; omit for the popular terms
        #[arg(default_value = "")]
        query: String,

        /// Maximum number of suggestions (never more than 20)
        #[arg(short, long)]
        limit: Option<usize>,

        /// Skip related categories
        #[arg(long)]
        no_categories: bool,

        /// Print the response as JSON
        #[arg(long)]
        json: bool,
    },

    /// Summarize a catalog: product count, categories, collections
    Inspect {
        /// Path to the catalog JSON file
        catalog: PathBuf,
    },
}
