//! Property tests for board bookkeeping, evaluation and search.

use proptest::prelude::*;

use runline::search::{Searcher, SCORE_INF};
use runline::{evaluate, select_best_move, AIEngine, Board, DepthSchedule, Pos, Stone};

/// Unpruned, uncached minimax used as the reference value.
fn reference_minimax(board: &mut Board, depth: u8, maximizing: bool) -> i32 {
    let empty = board.empty_cells();
    if depth == 0 || empty.is_empty() {
        return evaluate(board).net;
    }
    let stone = if maximizing { Stone::Ai } else { Stone::Human };
    let scores = empty.into_iter().map(|pos| {
        board.place_stone(pos, stone);
        let score = reference_minimax(board, depth - 1, !maximizing);
        board.remove_stone(pos);
        score
    });
    if maximizing {
        scores.max().unwrap_or(0)
    } else {
        scores.min().unwrap_or(0)
    }
}

/// Board of the given size with each cell drawn from `cells` (0 empty, 1 X, 2 O).
fn board_from_cells(size: usize, cells: &[u8]) -> Board {
    let mut board = Board::new(size).unwrap();
    for (idx, &cell) in cells.iter().enumerate() {
        let stone = match cell {
            1 => Stone::Human,
            2 => Stone::Ai,
            _ => Stone::Empty,
        };
        board.place_stone(Pos::from_index(idx, size), stone);
    }
    board
}

fn small_board() -> impl Strategy<Value = Board> {
    (3usize..=4).prop_flat_map(|size| {
        prop::collection::vec(0u8..3, size * size)
            .prop_map(move |cells| board_from_cells(size, &cells))
    })
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(64))]

    /// Empty cells are exactly the cells holding no stone, each listed once.
    #[test]
    fn prop_empty_cells_complement(board in small_board()) {
        let empty = board.empty_cells();
        prop_assert_eq!(empty.len() + board.stone_count(), board.cell_count());
        for pair in empty.windows(2) {
            prop_assert!(pair[0] < pair[1]);
        }
        for pos in &empty {
            prop_assert_eq!(board.get(*pos), Stone::Empty);
        }
    }

    #[test]
    fn prop_evaluate_is_pure(board in small_board()) {
        let before = board.clone();
        let first = evaluate(&board);
        prop_assert_eq!(first, evaluate(&board));
        prop_assert_eq!(first.net, first.ai - first.human);
        prop_assert!(first.human >= 0 && first.ai >= 0);
        prop_assert_eq!(board, before);
    }

    /// Pruning and caching never change the value of a position.
    #[test]
    fn prop_alpha_beta_matches_minimax(
        board in small_board(),
        depth in 1u8..=3,
        maximizing in any::<bool>(),
    ) {
        let mut pruned = board.clone();
        let mut searcher = Searcher::new();
        let value = searcher.minimax(&mut pruned, depth, -SCORE_INF, SCORE_INF, maximizing);
        prop_assert_eq!(&pruned, &board);

        let mut plain = board.clone();
        prop_assert_eq!(value, reference_minimax(&mut plain, depth, maximizing));
    }

    /// The chosen move is always one of the empty cells, and the input board
    /// is left untouched.
    #[test]
    fn prop_selected_move_is_empty(board in small_board()) {
        let before = board.clone();
        let mut engine = AIEngine::with_schedule(DepthSchedule::fixed(1..3));
        match engine.get_move(&board) {
            Some(pos) => prop_assert!(board.empty_cells().contains(&pos)),
            None => prop_assert!(board.is_full()),
        }
        prop_assert_eq!(board, before);
    }
}

#[test]
fn test_full_depth_3x3_search_matches_minimax() {
    let board = Board::from_rows(&["...", ".X.", "..."]).unwrap();

    let mut pruned = board.clone();
    let value = Searcher::new().minimax(&mut pruned, 8, -SCORE_INF, SCORE_INF, true);

    let mut plain = board.clone();
    assert_eq!(value, reference_minimax(&mut plain, 8, true));
}

#[test]
fn test_one_empty_cell_is_chosen() {
    let board = Board::from_rows(&["XOX", "OX.", "OXO"]).unwrap();
    assert_eq!(select_best_move(&board), Some(Pos::new(1, 2)));
}

#[test]
fn test_full_board_has_no_move() {
    let board = Board::from_rows(&["XOX", "OXO", "OXO"]).unwrap();
    assert_eq!(select_best_move(&board), None);
}

#[test]
fn test_ai_row_scores_for_ai() {
    let board = Board::from_rows(&["OOO", "X.X", "..."]).unwrap();
    let eval = evaluate(&board);
    assert!(eval.net >= 1);
    assert_eq!(eval.human, 0);
}

#[test]
fn test_ai_completes_its_row() {
    let board = Board::from_rows(&["OO.", "X..", "X.."]).unwrap();
    assert_eq!(select_best_move(&board), Some(Pos::new(0, 2)));
}
