use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion};

use plum_rules::rules::check_detector::would_be_in_check;
use plum_rules::utils::algebraic::parse_square;
use plum_rules::{Board, Chess, Square};

#[derive(Clone, Copy)]
struct BenchCase {
    name: &'static str,
    fen: &'static str,
    origin: &'static str,
    destination: &'static str,
}

const CASES: &[BenchCase] = &[
    BenchCase {
        name: "startpos_e2e4",
        fen: "rnbqkbnr/pppppppp/8/8/8/8/PPPPPPPP/RNBQKBNR w KQkq - 0 1",
        origin: "e2",
        destination: "e4",
    },
    BenchCase {
        name: "kiwipete_e2a6",
        fen: "r3k2r/p1ppqpb1/bn2pnp1/3PN3/1p2P3/2N2Q1p/PPPBBPPP/R3K2R w KQkq - 0 1",
        origin: "e2",
        destination: "a6",
    },
    BenchCase {
        name: "pinned_bishop",
        fen: "k3r3/8/8/8/8/8/4B3/4K3 w - - 0 1",
        origin: "e2",
        destination: "d3",
    },
];

fn squares(case: &BenchCase) -> (Square, Square) {
    (
        parse_square(case.origin).expect("bench origin should parse"),
        parse_square(case.destination).expect("bench destination should parse"),
    )
}

fn bench_would_be_in_check(c: &mut Criterion) {
    let mut group = c.benchmark_group("would_be_in_check");

    for case in CASES {
        let board = Board::from_fen(case.fen).expect("bench FEN should parse");
        let (origin, destination) = squares(case);

        group.bench_with_input(BenchmarkId::from_parameter(case.name), &board, |b, board| {
            b.iter(|| would_be_in_check(black_box(board), origin, destination))
        });
    }

    group.finish();
}

fn bench_move_and_undo(c: &mut Criterion) {
    let mut group = c.benchmark_group("move_then_undo");

    for case in CASES {
        let chess = Chess::from_fen(case.fen).expect("bench FEN should parse");
        let (origin, destination) = squares(case);

        group.bench_with_input(BenchmarkId::from_parameter(case.name), &chess, |b, chess| {
            b.iter(|| {
                let mut game = chess.clone();
                let outcome = game.move_piece(origin, destination);
                if outcome.is_ok() || outcome.is_err_and(|e| e.is_committed()) {
                    let _ = game.undo();
                }
                black_box(game)
            })
        });
    }

    group.finish();
}

criterion_group!(benches, bench_would_be_in_check, bench_move_and_undo);
criterion_main!(benches);
