//! wetref - Extract Dutch legal references from plain text.
//!
//! This crate finds references to Dutch and EU legal sources in running
//! text: fixed-format identifiers (BWB, CVDR, ECLI, CELEX), gazette and
//! parliamentary citations, and free-form "artikel 5.1, tweede lid, aanhef
//! en onder i, van de Woo" style article references, which are resolved by
//! growing a match outward from the "artikel" anchor.
//!
//! # Example
//!
//! ```
//! use wetref::references::{find_references, FindOptions};
//!
//! let matches = find_references("Zie ECLI:NL:HR:2020:123.", &FindOptions::default());
//! assert_eq!(matches[0].text, "ECLI:NL:HR:2020:123");
//! ```
//!
//! # Architecture
//!
//! The extractor is organized into several modules:
//!
//! - [`config`]: Tunable constants and offset helpers
//! - [`types`]: Core data types (Match, ReferenceKind, details records)
//! - [`error`]: Error types and Result alias
//! - [`pattern`]: Regex fragment builders shared by the matchers
//! - [`ordinal`]: Dutch ordinal words and ordinal-list parsing
//! - [`identifier`]: Fixed-format identifier matchers
//! - [`semistructured`]: Parliamentary and EU journal citation matchers
//! - [`lexicon`]: Statute-name lexicon and suffix matching
//! - [`resolver`]: Anchor-and-grow article reference resolver
//! - [`references`]: Combined extraction over all families
//! - [`abbrev`]: Bracketed-abbreviation discovery
//! - [`annotate`]: Token-level entity annotation
//! - [`cli`]: Command-line interface

pub mod abbrev;
pub mod annotate;
pub mod cli;
pub mod config;
pub mod error;
pub mod identifier;
pub mod lexicon;
pub mod ordinal;
pub mod pattern;
pub mod references;
pub mod resolver;
pub mod semistructured;
pub mod types;

// Re-export main functions
pub use references::{find_references, FindOptions};

// Re-export commonly used items
pub use error::{ExtractError, Result};
pub use lexicon::{global_lexicon, init_global_lexicon, Lexicon};
pub use types::{ArtikelDetails, Details, Match, ReferenceKind};
