use std::time::Duration;

use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion};

use garnet_chess::search::search_engine::{SearchEngine, INFINITY};
use garnet_chess::utils::fen::{parse_fen, STARTING_POSITION_FEN};

#[derive(Clone, Copy)]
struct BenchCase {
    name: &'static str,
    fen: &'static str,
}

const CASES: &[BenchCase] = &[
    BenchCase {
        name: "startpos",
        fen: STARTING_POSITION_FEN,
    },
    BenchCase {
        name: "open_middlegame",
        fen: "r1bqkb1r/pppp1ppp/2n2n2/4p3/2B1P3/5N2/PPPP1PPP/RNBQK2R w KQkq - 0 1",
    },
    BenchCase {
        name: "rook_endgame",
        fen: "8/2p5/3p4/1P5r/1R3p1k/8/4P1P1/4K3 w - - 0 1",
    },
];

fn bench_movegen(c: &mut Criterion) {
    let mut group = c.benchmark_group("movegen");
    group.warm_up_time(Duration::from_secs(1));
    group.measurement_time(Duration::from_secs(4));

    for case in CASES {
        let board = parse_fen(case.fen).expect("benchmark FEN should parse");
        group.bench_with_input(BenchmarkId::from_parameter(case.name), &board, |b, board| {
            b.iter(|| {
                let mut board = board.probe_clone();
                black_box(board.generate_moves().len())
            });
        });
    }

    group.finish();
}

fn bench_alpha_beta(c: &mut Criterion) {
    let mut group = c.benchmark_group("alpha_beta_d3");
    group.warm_up_time(Duration::from_secs(1));
    group.measurement_time(Duration::from_secs(8));
    group.sample_size(10);

    for case in CASES {
        let board = parse_fen(case.fen).expect("benchmark FEN should parse");
        group.bench_with_input(BenchmarkId::from_parameter(case.name), &board, |b, board| {
            b.iter(|| {
                let mut board = board.probe_clone();
                let mut search = SearchEngine::new();
                let score = search
                    .alpha_beta(black_box(&mut board), -INFINITY, INFINITY, 3)
                    .expect("search should run");
                black_box(score)
            });
        });
    }

    group.finish();
}

criterion_group!(search_benches, bench_movegen, bench_alpha_beta);
criterion_main!(search_benches);
