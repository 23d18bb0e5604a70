//! Side-by-side comparison of two JSON payloads.
//!
//! Two resources are fetched concurrently into a single tri-state load,
//! summarized into a fixed set of comparison facts, and rendered as
//! collapsible text trees with a summary panel.

pub mod cli;
pub mod clipboard;
pub mod config;
pub mod loader;
pub mod location;
pub mod provider;
pub mod summary;
pub mod tree;
pub mod view;

pub use config::{ViewConfig, ViewOverrides};
pub use loader::{DocumentPair, LoadError, LoadState, Loader};
pub use location::ResourceLocation;
pub use provider::{DefaultProvider, FileProvider, HttpProvider, ResourceProvider};
pub use summary::{DocumentFacts, SummaryFacts, summarize};
pub use tree::{NodeKind, RenderOptions, TreeNode, build_tree, render_lines};
