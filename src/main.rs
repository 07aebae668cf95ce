// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

use anyhow::Context;
use clap::Parser;
use essentia::{Catalog, ProductIndex, SearchConfig, SearchOptions, SuggestOptions};
use std::path::Path;
use std::sync::Arc;

mod cli;
use cli::display::{themed_stderr, use_colors_stderr, Color};
use cli::{output, Cli, Commands};

fn main() {
    let cli = Cli::parse();
    init_tracing(cli.verbose);

    if let Err(e) = run(cli) {
        eprintln!("{}: {e:#}", themed_stderr(Color::Red, "error"));
        std::process::exit(1);
    }
}

/// Logs go to stderr. `RUST_LOG` wins unless `--verbose` is given; the
/// default is warnings only.
fn init_tracing(verbose: bool) {
    let filter = if verbose {
        tracing_subscriber::EnvFilter::new("essentia=debug")
    } else {
        tracing_subscriber::EnvFilter::try_from_default_env()
            .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("warn"))
    };
    tracing_subscriber::fmt()
        .with_writer(std::io::stderr)
        .with_ansi(use_colors_stderr())
        .with_env_filter(filter)
        .init();
}

fn run(cli: Cli) -> anyhow::Result<()> {
    let config = SearchConfig::load(cli.config.as_deref()).context("loading search configuration")?;

    match cli.command {
        Commands::Search {
            catalog,
            query,
            category,
            collection,
            limit,
            no_suggestions,
            json,
        } => {
            let index = open_index(&catalog, config)?;
            warn_unknown_facets(index.catalog(), category.as_deref(), collection.as_deref());

            let options = SearchOptions {
                category,
                collection,
                limit,
                include_suggestions: !no_suggestions,
            };
            let response = index.search(&query, &options)?;
            if json {
                println!("{}", serde_json::to_string_pretty(&response)?);
            } else {
                output::print_search(query.trim(), &response);
            }
        }

        Commands::Suggest {
            catalog,
            query,
            limit,
            no_categories,
            json,
        } => {
            let index = open_index(&catalog, config)?;
            let options = SuggestOptions {
                limit,
                include_categories: !no_categories,
            };
            let response = index.suggest(&query, &options);
            if json {
                println!("{}", serde_json::to_string_pretty(&response)?);
            } else {
                output::print_suggest(&query, &response);
            }
        }

        Commands::Inspect { catalog } => {
            let loaded = load_catalog(&catalog)?;
            output::print_inspect(&catalog.display().to_string(), &loaded, &config);
        }
    }

    Ok(())
}

fn load_catalog(path: &Path) -> anyhow::Result<Catalog> {
    Catalog::from_path(path).with_context(|| format!("loading catalog {}", path.display()))
}

fn open_index(path: &Path, config: SearchConfig) -> anyhow::Result<ProductIndex> {
    let catalog = Arc::new(load_catalog(path)?);
    Ok(ProductIndex::new(catalog, config)?)
}

/// A typo in a facet silently filters everything out, so say so.
fn warn_unknown_facets(catalog: &Catalog, category: Option<&str>, collection: Option<&str>) {
    let category = category.filter(|c| *c != essentia::search::ALL);
    let collection = collection.filter(|c| *c != essentia::search::ALL);
    let hints = [
        ("category", category.and_then(|c| catalog.similar_category(c).map(|s| (c, s)))),
        ("collection", collection.and_then(|c| catalog.similar_collection(c).map(|s| (c, s)))),
    ];
    for (facet, (typed, similar)) in hints.into_iter().filter_map(|(f, h)| h.map(|h| (f, h))) {
        let note = format!("unknown {facet} `{typed}`, did you mean `{similar}`?");
        eprintln!("{}", themed_stderr(Color::Yellow, &note));
    }
}
