//! leaguemap-cli
//! =============
//!
//! Command-line interface for the `leaguemap-core` map builder.
//!
//! This crate primarily provides a binary (`leaguemap`). We include a small
//! library target so that docs.rs renders a documentation page and shows this
//! overview.
//!
//! Quick start
//! -----------
//!
//! ```text
//! cargo install leaguemap-cli
//! leaguemap --help
//! leaguemap render                      # WinnerLeague.geojson -> index.html
//! leaguemap -i players.geojson stats
//! leaguemap search cohen
//! ```
//!
//! For programmatic access, use the [`leaguemap-core`] crate directly.
//!
#![cfg_attr(docsrs, feature(doc_cfg))]

// This library target intentionally exposes no API; the binary is the primary
// deliverable.
