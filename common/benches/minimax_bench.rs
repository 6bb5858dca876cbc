use criterion::{criterion_group, criterion_main, Criterion};
use std::hint::black_box;
use common::games::SessionRng;
use common::games::tictactoe::{
    calculate_minimax_move, calculate_move, check_win, Difficulty, Mark, CELL_COUNT,
};

fn bench_minimax_after_corner_opening() {
    let mut cells = [Mark::Empty; CELL_COUNT];
    cells[0] = Mark::X;
    black_box(calculate_minimax_move(black_box(&cells), Mark::O));
}

fn bench_minimax_empty_board() {
    let cells = [Mark::Empty; CELL_COUNT];
    black_box(calculate_minimax_move(black_box(&cells), Mark::O));
}

fn bench_hard_self_play() {
    let mut rng = SessionRng::new(0);
    let mut cells = [Mark::Empty; CELL_COUNT];
    let mut current_mark = Mark::X;

    while check_win(&cells).is_none() {
        let Some(index) = calculate_move(Difficulty::Hard, &cells, current_mark, &mut rng) else {
            break;
        };
        cells[index] = current_mark;
        let Some(next_mark) = current_mark.opponent() else {
            break;
        };
        current_mark = next_mark;
    }
    black_box(cells);
}

fn minimax_bench(c: &mut Criterion) {
    let mut group = c.benchmark_group("minimax");

    group.bench_function("after_corner_opening", |b| {
        b.iter(bench_minimax_after_corner_opening)
    });

    group.bench_function("empty_board", |b| b.iter(bench_minimax_empty_board));

    group.bench_function("hard_self_play", |b| b.iter(bench_hard_self_play));

    group.finish();
}

criterion_group!(benches, minimax_bench);
criterion_main!(benches);
