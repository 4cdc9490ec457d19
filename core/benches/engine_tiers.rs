use criterion::{BenchmarkId, Criterion, criterion_group, criterion_main};
use std::hint::black_box;
use sweeper_core::*;

const TIERS: [(Coord, u8); 3] = [(10, 15), (50, 20), (200, 10)];

fn bench_generate(c: &mut Criterion) {
    let mut group = c.benchmark_group("generate");
    for (side, density) in TIERS {
        let config = BoardConfig::new((side, side), density).unwrap();
        group.bench_with_input(BenchmarkId::from_parameter(side), &config, |b, &config| {
            b.iter(|| RandomLayoutGenerator::new(black_box(42)).generate(config))
        });
    }
    group.finish();
}

fn bench_flood_fill(c: &mut Criterion) {
    let mut group = c.benchmark_group("flood_fill");
    for (side, _) in TIERS {
        let layout = MineLayout::from_mine_coords((side, side), &[]).unwrap();
        group.bench_with_input(BenchmarkId::from_parameter(side), &layout, |b, layout| {
            b.iter(|| {
                let mut engine = GameEngine::new(layout.clone());
                engine.apply(MoveAction::Reveal, black_box((0, 0))).unwrap()
            })
        });
    }
    group.finish();
}

fn bench_snapshot(c: &mut Criterion) {
    let config = BoardConfig::new((200, 200), 20).unwrap();
    let layout = RandomLayoutGenerator::new(7).generate(config);
    let history: Vec<(Coord2, MoveState)> = (0..200)
        .flat_map(|x| (0..200).map(move |y| ((x, y), MoveState::Cleared)))
        .collect();

    c.bench_function("snapshot_200", |b| {
        b.iter(|| {
            let log = MoveLog::from_newest_first(history.iter());
            let engine = GameEngine::replay(layout.clone(), SessionState::Active, &log);
            (Hint::from_layout(engine.mine_layout()).rows(), log.len())
        })
    });
}

criterion_group!(benches, bench_generate, bench_flood_fill, bench_snapshot);
criterion_main!(benches);
