// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! CLI definitions for the tracuu command-line interface.
//!
//! Four subcommands: `search` to rank a corpus against a query, `highlight`
//! to mark one piece of text, `sections` to list the corpus tabs, and `show`
//! to print a single record. The corpus path comes from `--corpus` or the
//! `TRACUU_CORPUS` environment variable.

pub mod display;

use std::path::PathBuf;

use clap::{Parser, Subcommand};

#[derive(Parser)]
#[command(
    name = "tracuu",
    about = "Accent-insensitive lookup over a Vietnamese question/answer corpus",
    version
)]
pub struct Cli {
    /// Path to the corpus JSON file
    #[arg(short, long, global = true, env = "TRACUU_CORPUS")]
    pub corpus: Option<PathBuf>,

    /// Disable colors even on a TTY
    #[arg(long, global = true)]
    pub plain: bool,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Search the corpus and display ranked, highlighted results
    Search {
        /// Search query
        query: String,

        /// Maximum number of results to return (at most 20)
        #[arg(short, long, default_value = "20")]
        limit: usize,

        /// Restrict the search to these section labels (repeatable)
        #[arg(short, long = "section")]
        sections: Vec<String>,

        /// Print results as JSON instead of a table
        #[arg(long)]
        json: bool,
    },

    /// Highlight query matches in a piece of text
    Highlight {
        /// Text to highlight
        text: String,

        /// Query whose tokens should be marked
        query: String,

        /// Use HTML <mark> tags instead of terminal colors
        #[arg(long)]
        html: bool,
    },

    /// List section labels and record counts
    Sections,

    /// Print one record
    Show {
        /// Section label, e.g. P1
        label: String,

        /// Record id within the section
        id: u32,
    },
}
