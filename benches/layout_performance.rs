//! Layout engine micro-benchmarks
//!
//! Measures single-room layout cost by module count, and batch throughput by
//! executor.

use criterion::{BenchmarkId, Criterion, criterion_group, criterion_main};
use millwork::{
    AdaConfig, BatchProcessor, DrawingMetadata, ExecutorImpl, MillworkConfig, RecordingRenderer,
    RoomSpec, ShopDrawingGenerator, SyncExecutor, compute_layout,
};
use std::hint::black_box;
use std::sync::Arc;

fn room_with_modules(room_id: &str, count: usize) -> RoomSpec {
    let widths: Vec<f64> = (0..count).map(|i| 18.0 + (i % 5) as f64 * 6.0).collect();
    let total = widths.iter().sum::<f64>() + 3.0;
    RoomSpec::new(room_id, total, widths, "PLAM-1", "WD-1").with_fillers(1.5, 1.5)
}

fn benchmark_single_room(c: &mut Criterion) {
    let mut group = c.benchmark_group("layout_single_room");
    let config = MillworkConfig::default().with_ada(AdaConfig::standard());

    for module_count in [1, 8, 64] {
        let room = room_with_modules("BENCH", module_count);
        group.bench_with_input(
            BenchmarkId::new("modules", module_count),
            &room,
            |b, room| b.iter(|| compute_layout(black_box(room), black_box(&config))),
        );
    }

    group.finish();
}

fn benchmark_batch(c: &mut Criterion) {
    let mut group = c.benchmark_group("layout_batch");
    let config = Arc::new(MillworkConfig::default().with_ada(AdaConfig::standard()));
    let rooms: Vec<RoomSpec> = (0..200)
        .map(|i| room_with_modules(&format!("R{i:04}"), 4 + i % 12))
        .collect();

    let executors = [
        ("sync", ExecutorImpl::Sync(SyncExecutor::new())),
        ("default", ExecutorImpl::default()),
    ];
    for (name, executor) in executors {
        let processor = BatchProcessor::with_config(Arc::clone(&config)).with_executor(executor);
        group.bench_with_input(BenchmarkId::new("rooms_200", name), &rooms, |b, rooms| {
            b.iter(|| processor.process(rooms.clone()))
        });
    }

    group.finish();
}

fn benchmark_sheet_composition(c: &mut Criterion) {
    let config = MillworkConfig::default().with_ada(AdaConfig::standard());
    let layout = compute_layout(&room_with_modules("SHEET", 12), &config);
    let metadata = DrawingMetadata::for_layout(&layout);
    let generator = ShopDrawingGenerator::new(&config);

    c.bench_function("sheet_composition_12_modules", |b| {
        b.iter(|| {
            let mut renderer = RecordingRenderer::new();
            generator
                .draw(&mut renderer, black_box(&layout), &metadata)
                .expect("Failed to draw sheet");
            renderer
        })
    });
}

criterion_group!(
    benches,
    benchmark_single_room,
    benchmark_batch,
    benchmark_sheet_composition
);
criterion_main!(benches);
