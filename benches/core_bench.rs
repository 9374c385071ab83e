use barycentric_explorer::{
    clamp_difference, render_scene, AppController, AppIntent, AppState, ClickKind, ModeKind,
    Point2D, RecordingSurface, WeightKind, WeightTriple,
};
use criterion::{criterion_group, criterion_main, BenchmarkId, Criterion};
use std::hint::black_box;

fn bench_weight_clamping(c: &mut Criterion) {
    c.bench_function("clamp_difference_sweep", |b| {
        b.iter(|| {
            let mut acc = 0.0;
            for step in 0..=100 {
                let edited = step as f64 / 100.0;
                let clamped = clamp_difference(black_box(edited), 0.2, 0.47);
                acc += clamped.other1 + clamped.other2;
            }
            black_box(acc)
        })
    });

    c.bench_function("with_edit_chain", |b| {
        b.iter(|| {
            let mut weights = WeightTriple::default();
            for step in 0..300 {
                let kind = WeightKind::ALL[step % 3];
                let value = ((step * 37) % 101) as f64 / 100.0;
                weights = weights.with_edit(kind, black_box(value));
            }
            black_box(weights.sum())
        })
    });
}

fn build_state(mode: ModeKind, derived_count: usize) -> AppState {
    let mut controller = AppController::new();
    let mut state = AppState::new();
    let vertices = [(20.0, 20.0), (380.0, 40.0), (200.0, 360.0), (40.0, 300.0)];

    let intents = std::iter::once(AppIntent::ModeSwitchRequested { mode })
        .chain(vertices.iter().map(|&(x, y)| AppIntent::CanvasClicked {
            position: Point2D::new(x, y),
            kind: ClickKind::Primary,
        }))
        .chain((0..derived_count).map(|i| AppIntent::WeightEdited {
            weight: WeightKind::ALL[i % 3],
            value: (i % 100) as f64 / 100.0,
        }));

    for intent in intents {
        controller
            .handle_intent(&mut state, intent)
            .expect("Benchmark-Setup fehlgeschlagen");
    }
    state
}

fn bench_scene_rendering(c: &mut Criterion) {
    let mut group = c.benchmark_group("scene_rendering");
    let controller = AppController::new();

    for &derived in &[100usize, 10_000usize] {
        let state = build_state(ModeKind::Barycentric, derived);
        let scene = controller.build_render_scene(&state);

        group.bench_with_input(
            BenchmarkId::new("triangle_with_derived", derived),
            &scene,
            |b, scene| {
                let mut surface = RecordingSurface::new();
                b.iter(|| {
                    render_scene(black_box(scene), &mut surface);
                    black_box(surface.take().len())
                })
            },
        );
    }

    let quad = controller.build_render_scene(&build_state(ModeKind::Edges, 0));
    group.bench_function("quad_edges", |b| {
        let mut surface = RecordingSurface::new();
        b.iter(|| {
            render_scene(black_box(&quad), &mut surface);
            black_box(surface.take().len())
        })
    });

    group.finish();
}

criterion_group!(benches, bench_weight_clamping, bench_scene_rendering);
criterion_main!(benches);
