use criterion::{criterion_group, criterion_main, BatchSize, Criterion};
use game_2048::config::GameConfig;
use game_2048::engine::{GameBoard, Move};
use game_2048::policy::{Greedy, Policy};
use rand::rngs::StdRng;
use std::hint::black_box;

fn corpus(size: usize) -> Vec<GameBoard<StdRng>> {
    let mut b = GameBoard::seeded(GameConfig::with_size(size), 42).unwrap();
    b.start();
    let mut boards = vec![b.clone()];
    // Derive a variety of densities deterministically
    let seq = [Move::Left, Move::Up, Move::Right, Move::Down];
    for i in 0..20 {
        b.move_cells(seq[i % seq.len()]);
        boards.push(b.clone());
    }
    boards
}

fn bench_preview(c: &mut Criterion) {
    for size in [4, 6] {
        let boards = corpus(size);
        for dir in Move::ALL {
            c.bench_function(&format!("preview/{size}x{size}/{dir:?}"), |bch| {
                bch.iter(|| {
                    let mut acc = 0u64;
                    for bd in &boards {
                        acc ^= bd.preview(dir).iter().map(|&v| u64::from(v)).sum::<u64>();
                    }
                    black_box(acc)
                })
            });
        }
    }
}

fn bench_generate_and_move(c: &mut Criterion) {
    c.bench_function("board/generate_fill_4x4", |bch| {
        bch.iter_batched(
            || GameBoard::seeded(GameConfig::default(), 7).unwrap(),
            |mut bd| {
                for _ in 0..16 {
                    bd.generate();
                }
                black_box(bd)
            },
            BatchSize::SmallInput,
        )
    });
    c.bench_function("board/move_cells_greedy_64", |bch| {
        bch.iter_batched(
            || {
                let mut bd = GameBoard::seeded(GameConfig::default(), 9).unwrap();
                bd.start();
                bd
            },
            |mut bd| {
                for _ in 0..64 {
                    match Greedy.next_move(&bd) {
                        Some(dir) => {
                            bd.move_cells(dir);
                        }
                        None => break,
                    }
                }
                black_box(bd)
            },
            BatchSize::SmallInput,
        )
    });
}

fn bench_queries(c: &mut Criterion) {
    let boards = corpus(4);
    c.bench_function("query/is_game_over", |bch| {
        bch.iter(|| {
            let mut acc = 0usize;
            for bd in &boards {
                acc += usize::from(bd.is_game_over());
            }
            black_box(acc)
        })
    });
    c.bench_function("query/score", |bch| {
        bch.iter(|| {
            let mut acc = 0u64;
            for bd in &boards {
                acc = acc.wrapping_add(bd.score());
            }
            black_box(acc)
        })
    });
}

criterion_group!(engine_ops, bench_preview, bench_generate_and_move, bench_queries);
criterion_main!(engine_ops);
