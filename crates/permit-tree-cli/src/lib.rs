//! permit-tree-cli
//! ===============
//!
//! Command-line interface for the `permit-tree-core` crate.
//!
//! This crate primarily provides a binary (`permit-tree`). We include a small
//! library target so that docs.rs renders a documentation page and shows this
//! overview.
//!
//! Quick start
//! -----------
//!
//! ```text
//! cargo install permit-tree-cli
//! permit-tree --help
//! permit-tree --input BuildPermit.csv build
//! permit-tree stats
//! permit-tree zip 90210
//! ```
//!
//! For programmatic access to the loader, aggregator and tree types, use the
//! [`permit-tree-core`] crate directly.
#![cfg_attr(docsrs, feature(doc_cfg))]

// This library target intentionally exposes no API; the binary is the primary
// deliverable.
