use fifteen_solver::input::parse_board;
use fifteen_solver::{solve, solve_bounded, Move, Puzzle, SearchStats, SolveError};
use rand::{rngs::StdRng, SeedableRng};

const UNSOLVED: &str = "
 1  2  3  4
 5  6  7  8
 9 10 11  0
13 14 15 12
";

#[test]
fn parsed_board_solves_in_one_move() {
    let start = parse_board(UNSOLVED).unwrap();
    assert!(start.is_valid());
    assert!(start.is_solvable());

    let solution = solve(&start).unwrap();
    assert_eq!(solution.moves, vec![Move::Down]);
    assert_eq!(solution.cost, 1);
    assert!(solution.state.is_solved());
}

#[test]
fn deeper_board_is_solved_optimally() {
    // Three blank moves away from the goal
    let start = parse_board(
        "
 1  2  3  4
 5  6  0  8
 9 10  7 11
13 14 15 12",
    )
    .unwrap();
    let solution = solve(&start).unwrap();
    assert_eq!(solution.moves, vec![Move::Down, Move::Right, Move::Down]);
    assert!(solution.stats.explored >= solution.moves.len());
}

#[test]
fn replay_from_fresh_copy_reaches_goal() {
    let start = parse_board(
        "
 2  3  4  8
 1  6  7 12
 5 10 11  0
 9 13 14 15",
    )
    .unwrap();
    let solution = start.solve().unwrap();

    let mut fresh = start.snapshot();
    for &dir in &solution.moves {
        assert!(fresh.apply_move(dir), "illegal move {dir} in solution");
    }
    assert!(fresh.is_solved());
    assert_eq!(solution.replay(&start).last(), Some(&fresh));
}

#[test]
fn random_boards_split_on_parity() {
    let mut rng = StdRng::seed_from_u64(15);
    let mut rejected = 0;
    for _ in 0..64 {
        let board = Puzzle::random_with(&mut rng);
        assert!(board.is_valid());
        if !board.is_solvable() {
            rejected += 1;
            assert_eq!(solve(&board).unwrap_err(), SolveError::Unsolvable);
        }
    }
    assert!(rejected > 0 && rejected < 64);
}

#[test]
fn unsolvable_and_exhausted_read_differently() {
    let unsolvable = SolveError::Unsolvable.to_string();
    let stats = SearchStats {
        explored: 10,
        ..SearchStats::default()
    };
    let exhausted = SolveError::ExhaustedFrontier { stats }.to_string();
    assert_ne!(unsolvable, exhausted);
    assert!(exhausted.contains("10"));
}

#[test]
fn capped_search_reports_limit_instead_of_running_on() {
    let start = parse_board(
        "
 2  3  4  8
 1  6  7 12
 5 10 11  0
 9 13 14 15",
    )
    .unwrap();
    let err = solve_bounded(&start, Some(10)).unwrap_err();
    assert!(matches!(err, SolveError::StateLimit { limit: 10, .. }));
    assert!(err.to_string().contains("limit 10"));

    // generous enough for this board
    let solution = solve_bounded(&start, Some(1_000_000)).unwrap();
    assert!(solution.state.is_solved());
}
