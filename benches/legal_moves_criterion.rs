use std::time::Duration;

use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion, Throughput};

use breakroom_chess::game_state::board::Board;
use breakroom_chess::game_state::chess_rules::STARTING_POSITION_FEN;
use breakroom_chess::game_state::chess_types::Color;
use breakroom_chess::move_generation::legal_move_generator::legal_moves;
use breakroom_chess::utils::fen::parse_fen;

#[derive(Clone, Copy)]
struct BenchCase {
    name: &'static str,
    fen: &'static str,
    /// Total legal destinations for the side to move, summed over all of its
    /// pieces; validated before timing so a rules regression fails loudly.
    expected_total: usize,
}

const CASES: &[BenchCase] = &[
    BenchCase {
        name: "startpos",
        fen: STARTING_POSITION_FEN,
        expected_total: 20,
    },
    BenchCase {
        name: "open_middlegame",
        fen: "r1bqk2r/pppp1ppp/2n2n2/2b1p3/2B1P3/2N2N2/PPPP1PPP/R1BQK2R w",
        expected_total: 35,
    },
    BenchCase {
        name: "sparse_endgame",
        fen: "8/5k2/8/3q4/8/2K5/8/8 b",
        expected_total: 33,
    },
];

fn enumerate_side(board: &Board, side: Color) -> usize {
    let mut total = 0usize;
    for (from, piece) in board.iter_pieces() {
        if piece.is_own(side) {
            total += legal_moves(board, &from).len();
        }
    }
    total
}

fn bench_legal_moves(c: &mut Criterion) {
    let mut group = c.benchmark_group("legal_moves");
    group.measurement_time(Duration::from_secs(5));

    for case in CASES {
        let (board, side) = parse_fen(case.fen).expect("bench FEN should parse");
        assert_eq!(
            enumerate_side(&board, side),
            case.expected_total,
            "unexpected move count for {}",
            case.name
        );

        group.throughput(Throughput::Elements(1));
        group.bench_with_input(
            BenchmarkId::from_parameter(case.name),
            &(board, side),
            |b, (board, side)| {
                b.iter(|| enumerate_side(black_box(board), *side));
            },
        );
    }

    group.finish();
}

criterion_group!(benches, bench_legal_moves);
criterion_main!(benches);
