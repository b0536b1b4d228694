// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

use std::path::{Path, PathBuf};

use anyhow::{bail, Context, Result};
use clap::Parser;
use serde::Serialize;
use tracing_subscriber::EnvFilter;
use tracuu::{highlight, load_corpus, search_with_options, Corpus, SearchOptions};

mod cli;
use cli::{display, Cli, Commands};

/// One search hit as printed by `search --json`.
#[derive(Serialize)]
struct HitView<'a> {
    section: &'a str,
    id: u32,
    score: f64,
    match_percent: u32,
    question: &'a str,
    answer: &'a str,
    question_html: String,
    answer_html: String,
}

fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_env("TRACUU_LOG").unwrap_or_else(|_| EnvFilter::new("warn")),
        )
        .with_writer(std::io::stderr)
        .init();

    if let Err(e) = run(Cli::parse()) {
        eprintln!("❌ {:#}", e);
        std::process::exit(1);
    }
}

fn run(cli: Cli) -> Result<()> {
    display::set_plain(cli.plain);

    match cli.command {
        Commands::Search {
            query,
            limit,
            sections,
            json,
        } => {
            let corpus = open_corpus(cli.corpus.as_deref())?;
            let mut options = SearchOptions::default().with_limit(limit);
            if !sections.is_empty() {
                for label in &sections {
                    if corpus.section(label).is_none() {
                        bail!("unknown section '{}'", label);
                    }
                }
                options = options.with_sections(sections);
            }

            let results = search_with_options(&corpus, &query, &options);
            if json {
                let hits: Vec<HitView<'_>> = results
                    .iter()
                    .map(|hit| HitView {
                        section: hit.section,
                        id: hit.record.id,
                        score: hit.score,
                        match_percent: hit.match_percent(),
                        question: &hit.record.question,
                        answer: &hit.record.answer,
                        question_html: highlight(&hit.record.question, &query),
                        answer_html: highlight(&hit.record.answer, &query),
                    })
                    .collect();
                println!("{}", serde_json::to_string_pretty(&hits)?);
            } else {
                display::print_results(&query, &results);
            }
        }

        Commands::Highlight { text, query, html } => {
            if html {
                println!("{}", highlight(&text, &query));
            } else {
                println!("{}", display::highlight_terminal(&text, &query));
            }
        }

        Commands::Sections => {
            let corpus = open_corpus(cli.corpus.as_deref())?;
            display::print_sections(corpus.sections());
        }

        Commands::Show { label, id } => {
            let corpus = open_corpus(cli.corpus.as_deref())?;
            let record = corpus
                .record(&label, id)
                .with_context(|| format!("no record {} in section '{}'", id, label))?;
            display::print_record(record);
        }
    }

    Ok(())
}

fn open_corpus(path: Option<&Path>) -> Result<Corpus> {
    let path: PathBuf = match path {
        Some(path) => path.to_path_buf(),
        None => bail!("no corpus given; pass --corpus or set TRACUU_CORPUS"),
    };
    load_corpus(&path).with_context(|| format!("failed to load corpus {}", path.display()))
}
