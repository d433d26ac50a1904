use criterion::{black_box, criterion_group, criterion_main, Criterion};
use blockfall::core::{get_shape, is_valid_placement, GameSession, GameSnapshot, Grid};
use blockfall::term::{FrameBuffer, GameView, Viewport};
use blockfall::types::{Color, PieceKind};

fn bench_tick(c: &mut Criterion) {
    let mut session = GameSession::new(12345);
    session.start();

    c.bench_function("session_tick", |b| {
        b.iter(|| {
            if !session.is_running() {
                session.reset();
                session.start();
            }
            black_box(session.tick());
        })
    });
}

fn bench_line_clear(c: &mut Criterion) {
    let full = Grid::from_pattern(
        &[
            "##########",
            "##########",
            "##########",
            "##########",
        ],
        Color::new(128, 128, 128),
    )
    .unwrap_or_default();

    c.bench_function("clear_4_lines", |b| {
        b.iter(|| {
            let mut grid = full.clone();
            black_box(grid.clear_lines());
        })
    });
}

fn bench_placement(c: &mut Criterion) {
    let grid = Grid::new();
    let shape = get_shape(PieceKind::T).rotate_cw();

    c.bench_function("is_valid_placement", |b| {
        b.iter(|| black_box(is_valid_placement(&shape, black_box(4), black_box(10), &grid)))
    });
}

fn bench_hard_drop_cycle(c: &mut Criterion) {
    let mut session = GameSession::new(12345);
    session.start();

    c.bench_function("hard_drop_and_lock", |b| {
        b.iter(|| {
            if !session.is_running() {
                session.reset();
                session.start();
            }
            session.move_left();
            session.rotate();
            black_box(session.hard_drop());
            black_box(session.tick());
        })
    });
}

fn bench_render(c: &mut Criterion) {
    let mut session = GameSession::new(12345);
    session.start();
    let view = GameView::default();
    let mut snap = GameSnapshot::default();
    let mut fb = FrameBuffer::new(80, 24);

    c.bench_function("snapshot_and_render", |b| {
        b.iter(|| {
            session.snapshot_into(&mut snap);
            view.render_into(&snap, Viewport::new(80, 24), &mut fb);
            black_box(fb.cells().len());
        })
    });
}

criterion_group!(
    benches,
    bench_tick,
    bench_line_clear,
    bench_placement,
    bench_hard_drop_cycle,
    bench_render
);
criterion_main!(benches);
