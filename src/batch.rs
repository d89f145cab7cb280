//! Batch driver: one independent layout task per room.

use crate::error::PipelineError;
use crate::report::{BatchSummary, RoomErrorReport, RoomStatus};
use millwork_executor::{Executor, ExecutorImpl};
use millwork_layout::{ConsistencyResult, LayoutResult, MillworkConfig, RoomSpec, compute_layout};
use millwork_render_core::{DrawingRenderer, GenerationPolicy, ShopDrawingGenerator};
use std::collections::HashSet;
use std::path::{Path, PathBuf};
use std::sync::Arc;

/// Field used for rooms rejected because their id was already seen.
pub const DUPLICATE_ROOM_ID: &str = "duplicate_room_id";

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct BatchOptions {
    /// Only rooms without consistency errors are offered for drawing.
    pub strict: bool,
}

/// Everything a batch produced.
#[derive(Debug, Clone)]
pub struct BatchOutcome {
    /// One layout per unique room, in input order.
    pub layouts: Vec<LayoutResult>,
    /// Rooms with errors or warnings, including rejected duplicates.
    pub reports: Vec<RoomErrorReport>,
    pub summary: BatchSummary,
    strict: bool,
}

impl BatchOutcome {
    /// Layouts eligible for drawing: all of them, or only consistent ones in
    /// strict mode.
    pub fn drawable(&self) -> impl Iterator<Item = &LayoutResult> + '_ {
        let strict = self.strict;
        self.layouts
            .iter()
            .filter(move |layout| !strict || layout.is_consistent())
    }

    pub fn layout(&self, room_id: &str) -> Option<&LayoutResult> {
        self.layouts.iter().find(|layout| layout.room_id == room_id)
    }

    pub fn report(&self, room_id: &str) -> Option<&RoomErrorReport> {
        self.reports.iter().find(|report| report.room_id == room_id)
    }

    pub fn is_strict(&self) -> bool {
        self.strict
    }
}

/// Lays out many rooms against one shared configuration snapshot.
#[derive(Debug, Clone)]
pub struct BatchProcessor {
    config: Arc<MillworkConfig>,
    executor: ExecutorImpl,
    options: BatchOptions,
    sheet_extension: String,
}

impl BatchProcessor {
    /// Rejects an invalid configuration before any room is touched.
    pub fn new(config: MillworkConfig) -> Result<Self, PipelineError> {
        config.ensure_valid()?;
        Ok(Self::with_config(Arc::new(config)))
    }

    /// Uses `config` as is, without range validation.
    pub fn with_config(config: Arc<MillworkConfig>) -> Self {
        Self {
            config,
            executor: ExecutorImpl::default(),
            options: BatchOptions::default(),
            sheet_extension: "pdf".to_string(),
        }
    }

    pub fn with_executor(mut self, executor: ExecutorImpl) -> Self {
        self.executor = executor;
        self
    }

    pub fn with_options(mut self, options: BatchOptions) -> Self {
        self.options = options;
        self
    }

    /// File extension for sheets saved by [`Self::draw_all`].
    pub fn with_sheet_extension(mut self, extension: impl Into<String>) -> Self {
        self.sheet_extension = extension.into();
        self
    }

    pub fn config(&self) -> &MillworkConfig {
        &self.config
    }

    pub fn options(&self) -> BatchOptions {
        self.options
    }

    /// Computes every room. Rooms whose id repeats an earlier one are skipped
    /// and reported; everything else gets a layout, consistent or not.
    pub fn process(&self, rooms: Vec<RoomSpec>) -> BatchOutcome {
        let total = rooms.len();
        let mut seen = HashSet::with_capacity(total);
        let mut unique = Vec::with_capacity(total);
        let mut duplicates = Vec::new();

        for room in rooms {
            if seen.insert(room.room_id.clone()) {
                unique.push(room);
            } else {
                log::warn!("Skipping duplicate room_id '{}'", room.room_id);
                duplicates.push(duplicate_report(&room));
            }
        }

        log::debug!(
            "Laying out {} rooms on {} (parallelism {})",
            unique.len(),
            self.executor.name(),
            self.executor.parallelism()
        );
        let config = Arc::clone(&self.config);
        let layouts = self
            .executor
            .execute_all(unique, move |room| compute_layout(&room, &config));

        let mut summary = BatchSummary::new(total);
        let mut reports = Vec::new();
        for layout in &layouts {
            match RoomErrorReport::from_consistency(&layout.room_id, &layout.consistency) {
                Some(report) => {
                    if report.is_failure() {
                        summary.record_failure(&report);
                    } else {
                        summary.record_success();
                    }
                    reports.push(report);
                }
                None => summary.record_success(),
            }
        }
        for report in duplicates {
            summary.record_failure(&report);
            reports.push(report);
        }

        log::info!(
            "Batch complete: {}/{} rooms consistent ({:.1}%)",
            summary.successful_rooms,
            summary.total_rooms,
            summary.success_rate * 100.0
        );

        BatchOutcome {
            layouts,
            reports,
            summary,
            strict: self.options.strict,
        }
    }

    /// A generator bound to this batch's configuration, strictness and sheet
    /// extension.
    pub fn generator(&self) -> ShopDrawingGenerator<'_> {
        ShopDrawingGenerator::new(&self.config)
            .with_policy(GenerationPolicy {
                strict: self.options.strict,
            })
            .with_extension(self.sheet_extension.as_str())
    }

    /// Draws and saves every drawable layout with a fresh renderer per room.
    ///
    /// Drawing is sequential; a failure on one room is returned in its slot
    /// and does not stop the others.
    pub fn draw_all<R, F>(
        &self,
        outcome: &BatchOutcome,
        output_dir: &Path,
        mut make_renderer: F,
    ) -> Vec<Result<PathBuf, PipelineError>>
    where
        R: DrawingRenderer,
        F: FnMut(&LayoutResult) -> R,
    {
        let generator = self.generator();
        outcome
            .drawable()
            .map(|layout| {
                let mut renderer = make_renderer(layout);
                generator
                    .generate(&mut renderer, layout, output_dir)
                    .map_err(|err| {
                        log::warn!("Drawing failed for room '{}': {}", layout.room_id, err);
                        PipelineError::from(err)
                    })
            })
            .collect()
    }
}

fn duplicate_report(room: &RoomSpec) -> RoomErrorReport {
    let mut result = ConsistencyResult::new();
    result.add_error(
        DUPLICATE_ROOM_ID,
        format!("Duplicate room_id: {}", room.room_id),
        room.room_id.as_str(),
        Some(&room.room_id),
    );
    RoomErrorReport {
        room_id: room.room_id.clone(),
        status: RoomStatus::Failed,
        errors: result.errors,
        warnings: Vec::new(),
    }
}
