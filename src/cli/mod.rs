// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! CLI definitions for the sift command-line interface.
//!
//! Two subcommands: `search` runs a query against an index file exactly the
//! way the browser widget would, and `inspect` summarizes what an index
//! contains. Both exist so site authors can sanity-check a generated
//! `search-index.json` without opening a browser.

pub mod display;

use clap::{Parser, Subcommand};

#[derive(Parser)]
#[command(
    name = "sift",
    about = "In-browser article search for static sites",
    version
)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Search an index file and display ranked results
    Search {
        /// Path to the search-index.json file
        index: String,

        /// Search query
        query: String,

        /// Maximum number of results to show
        #[arg(short, long, default_value = "8")]
        limit: usize,

        /// Emit results as a JSON array instead of a table
        #[arg(long)]
        json: bool,
    },

    /// Summarize the contents of an index file
    Inspect {
        /// Path to the search-index.json file
        index: String,
    },
}
