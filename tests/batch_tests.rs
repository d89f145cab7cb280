mod common;

use common::fixtures::{mixed_batch, project_config_json, room};
use common::{TestResult, init_logging};
use millwork::{
    BatchOptions, BatchProcessor, DUPLICATE_ROOM_ID, Executor, ExecutorImpl, MillworkConfig,
    PipelineError, RoomStatus, SyncExecutor,
};
use std::sync::Arc;

fn processor() -> Result<BatchProcessor, PipelineError> {
    let config = MillworkConfig::from_value(project_config_json())?;
    BatchProcessor::new(config)
}

#[test]
fn test_mixed_batch_summary() -> TestResult {
    init_logging();
    let outcome = processor()?.process(mixed_batch());

    // The duplicate R101 is skipped, the other three are laid out.
    assert_eq!(outcome.layouts.len(), 3);
    assert_eq!(outcome.summary.total_rooms, 4);
    assert_eq!(outcome.summary.successful_rooms, 2);
    assert_eq!(outcome.summary.failed_rooms, 2);
    assert_eq!(outcome.summary.success_rate, 0.5);
    assert_eq!(outcome.summary.error_breakdown.get(DUPLICATE_ROOM_ID), Some(&1));
    assert_eq!(
        outcome.summary.error_breakdown.get("total_length_validation"),
        Some(&1)
    );
    assert_eq!(outcome.summary.messages.len(), 2);

    let r103 = outcome.report("R103").ok_or("R103 report")?;
    assert_eq!(r103.status, RoomStatus::Failed);
    assert!(outcome.report("R102").is_none());
    Ok(())
}

#[test]
fn test_layouts_keep_input_order() -> TestResult {
    let outcome = processor()?.process(mixed_batch());
    let ids: Vec<&str> = outcome.layouts.iter().map(|l| l.room_id.as_str()).collect();
    assert_eq!(ids, vec!["R101", "R102", "R103"]);

    // The first R101 wins.
    let r101 = outcome.layout("R101").ok_or("R101 layout")?;
    assert_eq!(r101.modules.len(), 4);
    Ok(())
}

#[test]
fn test_strict_mode_filters_drawable_layouts() -> TestResult {
    let permissive = processor()?.process(mixed_batch());
    assert_eq!(permissive.drawable().count(), 3);

    let strict = processor()?
        .with_options(BatchOptions { strict: true })
        .process(mixed_batch());
    assert!(strict.is_strict());
    let drawable: Vec<&str> = strict.drawable().map(|l| l.room_id.as_str()).collect();
    assert_eq!(drawable, vec!["R101", "R102"]);

    // Strictness never changes the computed geometry.
    assert_eq!(strict.layouts.len(), 3);
    Ok(())
}

#[test]
fn test_sequential_and_parallel_agree() -> TestResult {
    let rooms: Vec<_> = (0..40)
        .map(|i| {
            let widths = [24.0 + i as f64, 30.0, 36.0];
            let total: f64 = widths.iter().sum::<f64>() + 1.5;
            room(&format!("R{i:03}"), total, &widths, 1.5, 0.0)
        })
        .collect();

    let sequential = processor()?
        .with_executor(ExecutorImpl::Sync(SyncExecutor::new()))
        .process(rooms.clone());
    let parallel = processor()?
        .with_executor(ExecutorImpl::with_threads(Some(4))?)
        .process(rooms);

    assert_eq!(sequential.summary, parallel.summary);
    for (a, b) in sequential.layouts.iter().zip(&parallel.layouts) {
        assert_eq!(a.room_id, b.room_id);
        assert_eq!(a.modules, b.modules);
        assert_eq!(a.fillers, b.fillers);
        assert_eq!(a.countertop, b.countertop);
        assert_eq!(a.ada_geometry, b.ada_geometry);
    }
    assert_eq!(sequential.summary.successful_rooms, 40);
    Ok(())
}

#[test]
fn test_invalid_config_is_rejected() {
    let mut config = MillworkConfig::default();
    config.base_depth = 0.0;
    let err = BatchProcessor::new(config).expect_err("zero depth");
    assert!(matches!(err, PipelineError::Config(_)));
}

#[test]
fn test_shared_config_is_not_revalidated() {
    let mut config = MillworkConfig::default();
    config.scale_plan = 0.0;
    let processor = BatchProcessor::with_config(Arc::new(config));
    let outcome = processor.process(vec![room("R1", 36.0, &[36.0], 0.0, 0.0)]);
    assert_eq!(outcome.summary.successful_rooms, 1);
    assert_eq!(processor.config().scale_plan, 0.0);
}

#[test]
fn test_empty_batch() -> TestResult {
    let outcome = processor()?.process(Vec::new());
    assert!(outcome.layouts.is_empty());
    assert_eq!(outcome.summary.total_rooms, 0);
    assert_eq!(outcome.summary.success_rate, 0.0);
    Ok(())
}

#[test]
fn test_reports_serialize() -> TestResult {
    let outcome = processor()?.process(mixed_batch());
    let summary: serde_json::Value = serde_json::from_str(&outcome.summary.to_json_string()?)?;
    assert_eq!(summary["failed_rooms"], 2);

    let report: serde_json::Value =
        serde_json::from_str(&outcome.report("R103").ok_or("report")?.to_json_string()?)?;
    assert_eq!(report["status"], "failed");
    assert_eq!(report["errors"][0]["field"], "total_length_validation");
    assert_eq!(report["errors"][0]["row_id"], "R103");
    Ok(())
}

#[test]
fn test_executor_name_is_reported() {
    let executor = ExecutorImpl::Sync(SyncExecutor::new());
    assert_eq!(executor.name(), "SyncExecutor");
}
