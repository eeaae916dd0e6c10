use crate::game::{Board, Cell, GameState, Player};

use super::agent::Agent;

/// Score for a position the root player has already won; an opponent win is
/// the negation. Dominates anything the heuristic can produce.
pub const WIN_SCORE: i64 = 1_000_000;

/// Search depth used when none is configured.
pub const DEFAULT_DEPTH: usize = 4;

/// Trait for evaluating a board position from a player's perspective.
pub trait Heuristic: Send {
    fn evaluate(&self, board: &Board, player: Player) -> i64;
}

/// Default heuristic that scans all 4-cell windows and scores threats, with
/// a bonus for pieces in the center column.
pub struct WindowHeuristic;

impl WindowHeuristic {
    fn score_window(window: [Cell; 4], player: Player) -> i64 {
        let own_cell = player.to_cell();
        let opp_cell = player.other().to_cell();

        let own = window.iter().filter(|&&c| c == own_cell).count();
        let opp = window.iter().filter(|&&c| c == opp_cell).count();
        let empty = window.iter().filter(|&&c| c == Cell::Empty).count();

        let mut score = 0;
        if own == 4 {
            score += 100;
        } else if own == 3 && empty == 1 {
            score += 5;
        } else if own == 2 && empty == 2 {
            score += 2;
        }
        // The opponent-threat penalty applies independently of the branch
        // above, not as another arm of it.
        if opp == 3 && empty == 1 {
            score -= 4;
        }

        score
    }
}

impl Heuristic for WindowHeuristic {
    fn evaluate(&self, board: &Board, player: Player) -> i64 {
        let own_cell = player.to_cell();
        let mut score = 0;

        // Center column bonus
        let center = board.cols() / 2;
        for row in 0..board.rows() {
            if board.get(row, center) == own_cell {
                score += 3;
            }
        }

        // Scan all 4-cell windows

        // Horizontal
        for row in 0..board.rows() {
            for col in 0..board.cols().saturating_sub(3) {
                let window = std::array::from_fn(|i| board.get(row, col + i));
                score += Self::score_window(window, player);
            }
        }

        // Vertical
        for col in 0..board.cols() {
            for row in 0..board.rows().saturating_sub(3) {
                let window = std::array::from_fn(|i| board.get(row + i, col));
                score += Self::score_window(window, player);
            }
        }

        // Diagonal / (up-right)
        for row in 3..board.rows() {
            for col in 0..board.cols().saturating_sub(3) {
                let window = std::array::from_fn(|i| board.get(row - i, col + i));
                score += Self::score_window(window, player);
            }
        }

        // Diagonal \ (down-right)
        for row in 0..board.rows().saturating_sub(3) {
            for col in 0..board.cols().saturating_sub(3) {
                let window = std::array::from_fn(|i| board.get(row + i, col + i));
                score += Self::score_window(window, player);
            }
        }

        score
    }
}

/// Result of one search call: the chosen column, if any move was examined,
/// and the position's score. `column` is `None` at terminal positions and
/// when no column is playable; callers must not drop a piece with it.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SearchOutcome {
    pub column: Option<usize>,
    pub score: i64,
}

/// Depth-limited minimax with alpha-beta pruning.
///
/// The board is mutated in place while simulating moves and restored before
/// returning; the net effect on `board` is none. `root_player` fixes the
/// perspective for terminal and heuristic scores across the whole tree,
/// while `maximizing` says whose turn it is at this ply.
pub fn minimax(
    board: &mut Board,
    depth: usize,
    mut alpha: i64,
    mut beta: i64,
    maximizing: bool,
    root_player: Player,
    heuristic: &dyn Heuristic,
) -> SearchOutcome {
    let opponent = root_player.other();

    // Terminal checks, in priority order: a decided game outranks the
    // depth / full-board cutoff.
    if board.has_connect_four(root_player.to_cell()) {
        return SearchOutcome {
            column: None,
            score: WIN_SCORE,
        };
    }
    if board.has_connect_four(opponent.to_cell()) {
        return SearchOutcome {
            column: None,
            score: -WIN_SCORE,
        };
    }
    if board.is_full() || depth == 0 {
        return SearchOutcome {
            column: None,
            score: heuristic.evaluate(board, root_player),
        };
    }

    let mover = if maximizing { root_player } else { opponent };

    if maximizing {
        let mut best = i64::MIN;
        let mut best_column = None;
        for col in 0..board.cols() {
            if board.drop_piece(col, mover.to_cell()).is_err() {
                continue;
            }
            let value =
                minimax(board, depth - 1, alpha, beta, false, root_player, heuristic).score;
            board.undo_drop(col);

            // Strict comparison: ties keep the lowest column
            if value > best {
                best = value;
                best_column = Some(col);
            }
            alpha = alpha.max(value);
            if alpha >= beta {
                break;
            }
        }
        SearchOutcome {
            column: best_column,
            score: best,
        }
    } else {
        let mut best = i64::MAX;
        let mut best_column = None;
        for col in 0..board.cols() {
            if board.drop_piece(col, mover.to_cell()).is_err() {
                continue;
            }
            let value =
                minimax(board, depth - 1, alpha, beta, true, root_player, heuristic).score;
            board.undo_drop(col);

            if value < best {
                best = value;
                best_column = Some(col);
            }
            beta = beta.min(value);
            if alpha >= beta {
                break;
            }
        }
        SearchOutcome {
            column: best_column,
            score: best,
        }
    }
}

/// Minimax agent with alpha-beta pruning.
pub struct MinimaxAgent {
    max_depth: usize,
    heuristic: Box<dyn Heuristic>,
}

impl MinimaxAgent {
    pub fn new(max_depth: usize) -> Self {
        MinimaxAgent {
            max_depth,
            heuristic: Box::new(WindowHeuristic),
        }
    }

    pub fn with_heuristic(max_depth: usize, heuristic: Box<dyn Heuristic>) -> Self {
        MinimaxAgent {
            max_depth,
            heuristic,
        }
    }

    /// Best column for `player` on this board, or `None` when no column is
    /// playable. The board is used as the search's scratch space and is
    /// left exactly as it was.
    pub fn best_column(&self, board: &mut Board, player: Player) -> Option<usize> {
        minimax(
            board,
            self.max_depth,
            i64::MIN,
            i64::MAX,
            true,
            player,
            self.heuristic.as_ref(),
        )
        .column
    }
}

impl Agent for MinimaxAgent {
    fn select_column(&mut self, state: &GameState) -> usize {
        let mut scratch = state.board().clone();
        self.best_column(&mut scratch, state.current_player())
            .expect("no playable column")
    }

    fn name(&self) -> &str {
        "Minimax"
    }
}
