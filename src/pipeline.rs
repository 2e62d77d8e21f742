//! The document-level reconstruction pipeline.
//!
//! Processing is single-threaded and page-sequential: page N's inference
//! completes fully before page N+1 begins. Every collaborator call is
//! timeout-bounded; document-level expiry degrades to the fallback grid,
//! page-level expiry degrades to an inline error row. The pipeline never
//! fails and never panics on provider misbehavior — the caller always gets a
//! file-writable grid.

use std::sync::Arc;
use std::time::Instant;

use crate::analyzer::analyze_page;
use crate::assembler::TableAssembler;
use crate::bounded::{run_bounded, Bounded};
use crate::config::GridConfig;
use crate::fallback::{fallback_grid, local_timestamp};
use crate::grid::TableGrid;
use crate::metrics::PageMetrics;
use crate::provider::{PageProvider, SourceFile};
use crate::token::normalize_tokens;

/// Orchestrates the full reconstruction of one document.
///
/// # Examples
///
/// ```no_run
/// use std::sync::Arc;
/// use tablegrid::{GridPipeline, PageProvider, SourceFile};
///
/// # fn open_provider() -> Arc<dyn PageProvider> { unimplemented!() }
/// let provider = open_provider();
/// let pipeline = GridPipeline::new();
/// let grid = pipeline.convert(provider, &SourceFile::new("report.pdf"));
/// assert!(!grid.is_empty());
/// ```
pub struct GridPipeline {
    config: GridConfig,
}

impl Default for GridPipeline {
    fn default() -> Self {
        Self::new()
    }
}

impl GridPipeline {
    /// Create a pipeline with the reference configuration.
    pub fn new() -> Self {
        Self::with_config(GridConfig::new())
    }

    /// Create a pipeline with a custom configuration.
    pub fn with_config(config: GridConfig) -> Self {
        Self { config }
    }

    /// The pipeline's configuration.
    pub fn config(&self) -> &GridConfig {
        &self.config
    }

    /// Reconstruct the document into a grid.
    ///
    /// Infallible: document-level failures return the fallback grid,
    /// page-level failures become inline error rows.
    pub fn convert(&self, provider: Arc<dyn PageProvider>, source: &SourceFile) -> TableGrid {
        self.convert_with_observer(provider, source, |_, _| {}).0
    }

    /// Reconstruct the document, reporting progress and collecting per-page
    /// metrics.
    ///
    /// The observer is invoked once per page with `(page_number, total)`,
    /// page numbers one-based, before that page is processed. Metrics are
    /// recorded only for pages that were actually analyzed (failed and empty
    /// pages produce none).
    pub fn convert_with_observer(
        &self,
        provider: Arc<dyn PageProvider>,
        source: &SourceFile,
        mut progress: impl FnMut(usize, usize),
    ) -> (TableGrid, Vec<PageMetrics>) {
        if !provider.is_ready() {
            log::warn!("extraction backend not ready; producing fallback grid");
            return (fallback_grid(source), Vec::new());
        }

        let total_pages = {
            let p = Arc::clone(&provider);
            match run_bounded(self.config.document_timeout, move || p.page_count()) {
                Bounded::Completed(count) => count,
                Bounded::TimedOut => {
                    log::warn!(
                        "document acquisition timed out after {:?}; producing fallback grid",
                        self.config.document_timeout
                    );
                    return (fallback_grid(source), Vec::new());
                }
                Bounded::Failed(err) => {
                    log::warn!("document acquisition failed ({}); producing fallback grid", err);
                    return (fallback_grid(source), Vec::new());
                }
            }
        };

        log::info!("document loaded: {} pages", total_pages);

        let mut assembler = TableAssembler::new(self.config.clone());
        let mut metrics = Vec::with_capacity(total_pages);

        assembler.note(format!("Data extracted from \"{}\"", source.name));
        assembler.note(format!("Total pages: {}", total_pages));
        assembler.blank();

        for page_index in 0..total_pages {
            let page_number = page_index + 1;
            progress(page_number, total_pages);
            assembler.note(format!("--- Page {} ---", page_number));

            let started = Instant::now();

            let opened = {
                let p = Arc::clone(&provider);
                run_bounded(self.config.page_timeout, move || p.open_page(page_index))
            };
            if let Err(reason) = settle(opened, "page load timed out") {
                log::warn!("page {}: {}", page_number, reason);
                assembler.note(format!("[error processing page {}: {}]", page_number, reason));
                continue;
            }

            let fetched = {
                let p = Arc::clone(&provider);
                run_bounded(self.config.page_timeout, move || p.page_tokens(page_index))
            };
            let raw = match settle(fetched, "text extraction timed out") {
                Ok(raw) => raw,
                Err(reason) => {
                    log::warn!("page {}: {}", page_number, reason);
                    assembler.note(format!("[error processing page {}: {}]", page_number, reason));
                    continue;
                }
            };

            if raw.is_empty() {
                log::debug!("page {}: no extractable text", page_number);
                assembler.note("No text could be extracted from this page");
                continue;
            }

            let tokens = normalize_tokens(raw);
            if tokens.is_empty() {
                log::debug!("page {}: no usable fragments after normalization", page_number);
                assembler.note("No usable text fragments were found on this page");
                continue;
            }

            let analysis = analyze_page(page_index, tokens, &self.config);
            assembler.append_page(&analysis);

            metrics.push(PageMetrics {
                page_index,
                token_count: analysis.token_count,
                tolerance: analysis.tolerance,
                column_count: analysis.column_count(),
                elapsed_ms: started.elapsed().as_millis() as u64,
            });

            if page_number < total_pages {
                assembler.page_break();
            }
        }

        assembler.blank();
        assembler.note("Conversion details");
        assembler.row(vec!["Converted at".to_string(), local_timestamp()]);
        assembler.row(vec!["File size".to_string(), source.size_label()]);
        assembler.row(vec![
            "Engine version".to_string(),
            env!("CARGO_PKG_VERSION").to_string(),
        ]);
        assembler.row(vec![
            "Extraction mode".to_string(),
            "live extraction".to_string(),
        ]);

        (assembler.finish(), metrics)
    }
}

/// Collapse a bounded outcome into the value or a displayable reason.
fn settle<T>(outcome: Bounded<T>, timeout_label: &str) -> std::result::Result<T, String> {
    match outcome {
        Bounded::Completed(value) => Ok(value),
        Bounded::TimedOut => Err(timeout_label.to_string()),
        Bounded::Failed(err) => Err(err.to_string()),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::Error;

    #[test]
    fn test_settle_maps_outcomes() {
        assert_eq!(settle(Bounded::Completed(5), "slow"), Ok(5));
        assert_eq!(settle::<u32>(Bounded::TimedOut, "slow"), Err("slow".to_string()));
        let reason = settle::<u32>(
            Bounded::Failed(Error::DocumentLoad("bad".to_string())),
            "slow",
        )
        .unwrap_err();
        assert!(reason.contains("bad"));
    }
}
