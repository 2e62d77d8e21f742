//! # tablegrid
//!
//! Reconstructs a tabular grid (rows of cells) from a flat collection of
//! positioned text fragments extracted from a paginated document.
//!
//! Each fragment carries a baseline coordinate pair, a bounding width/height,
//! and optional font metadata, but no inherent row/column identity — that
//! structure is inferred purely from geometry and typography:
//!
//! ```text
//! RawToken[] (per page, from the extraction collaborator)
//!     ↓
//! [Token Normalizer] (drop empty/malformed fragments)
//!     ↓
//! [Row Tolerance Estimator] (adaptive vertical clustering radius)
//!     ↓
//! [Row Grouper] (quantized baselines → rows, descending page order)
//!     ↓
//! [Column Boundary Estimator] (diagnostic x-clustering)
//!     ↓
//! [Header Detector] (typography deviation per row)
//!     ↓
//! [Table Assembler] (separators, page markers, concatenation)
//!     ↓
//! TableGrid (ordered rows of cell strings, ready for a sheet writer)
//! ```
//!
//! The pipeline never fails: document-level failures degrade to a fixed,
//! clearly labeled fallback grid, page-level failures degrade to inline error
//! rows, so the caller always has a file-writable result.
//!
//! ## Quick Start
//!
//! ```no_run
//! use std::sync::Arc;
//! use tablegrid::{GridPipeline, PageProvider, SourceFile};
//!
//! # fn open_provider() -> Arc<dyn PageProvider> { unimplemented!() }
//! let provider: Arc<dyn PageProvider> = open_provider();
//! let source = SourceFile::new("report.pdf").with_size(48_213);
//!
//! let pipeline = GridPipeline::new();
//! let grid = pipeline.convert(provider, &source);
//! for row in grid.rows() {
//!     // feed each cell array to the sheet writer
//!     println!("{:?}", row);
//! }
//! ```
//!
//! Decoding of the source document, rendering, OCR, and output file
//! containers are external collaborators; this crate only infers structure
//! from text geometry.

#![warn(missing_docs)]

// Error handling
pub mod error;

// Configuration
pub mod config;

// Data model
pub mod grid;
pub mod token;

// Inference stages
pub mod analyzer;
pub mod columns;
pub mod headers;
pub mod rows;

// Assembly and degradation paths
pub mod assembler;
pub mod fallback;

// Orchestration
pub mod bounded;
pub mod metrics;
pub mod pipeline;
pub mod provider;

// Re-export main types
pub use analyzer::{analyze_page, estimate_row_tolerance, PageAnalysis};
pub use assembler::TableAssembler;
pub use bounded::{run_bounded, Bounded};
pub use columns::estimate_column_boundaries;
pub use config::GridConfig;
pub use error::{Error, Result};
pub use fallback::fallback_grid;
pub use grid::TableGrid;
pub use headers::is_header_row;
pub use metrics::PageMetrics;
pub use pipeline::GridPipeline;
pub use provider::{PageProvider, SourceFile};
pub use rows::{bucket_key, group_into_rows, Row};
pub use token::{normalize_tokens, RawToken, Token};
