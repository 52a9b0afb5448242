//! Signposted line extraction.
//!
//! # Module Structure
//!
//! - `tags`: tag constants, [`TagClass`] and the injected [`TagCatalog`]
//! - `lines`: the [`Line`] output unit and its serialized forms
//! - `walker`: the recursive DOM walk ([`SignpostExtractor`])
//! - `pruning`: exclusion selectors, hard-coded kills and the before-h1 filter
//!
//! # Usage
//!
//! ```rust
//! use rs_signpost::dom;
//! use rs_signpost::extractor::{pruning, SignpostExtractor, DEFAULT_CATALOG};
//! use rs_signpost::text::DEFAULT_NOISE;
//!
//! let doc = dom::parse("<nav>Menu</nav><h1>Paris</h1><p>Guide</p>");
//! let body = dom::body_or_root(&doc);
//! pruning::prune_selectors(&body, &["nav"]);
//!
//! let lines = SignpostExtractor::new(&DEFAULT_CATALOG, &DEFAULT_NOISE).extract(&body);
//! assert_eq!(lines.len(), 2);
//! ```

pub mod lines;
pub mod pruning;
pub mod tags;
pub mod walker;

pub use lines::Line;
pub use pruning::PruneReport;
pub use tags::{TagCatalog, TagClass, DEFAULT_CATALOG};
pub use walker::{extract_lines, SignpostExtractor};
