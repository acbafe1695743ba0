//! # pathsift - flat-file path indexing and multi-term filtering
//!
//! pathsift walks directory trees into plain-text indexes (one absolute path
//! per line) and narrows them with three Aho-Corasick passes:
//!
//! - **search**: every term must occur in the path
//! - **include**: at least one term must occur
//! - **exclude**: no term may occur
//!
//! Survivors can then be restricted to files, folders or symlinks.
//!
//! ## Quick Start
//!
//! ```bash
//! # Index a tree
//! pathsift index ~/data -o data.idx
//!
//! # Paths under a "raw" folder containing "2023" but no ".tmp"
//! pathsift search --db data.idx -s /raw/ -s 2023 -e .tmp
//! ```

pub mod cli;
pub mod config;
pub mod error;
pub mod filter;
pub mod index;
pub mod matcher;
pub mod progress;
pub mod shared;

pub use cli::{Cli, Output};
pub use config::SiftConfig;
pub use error::{Result, SiftError};
