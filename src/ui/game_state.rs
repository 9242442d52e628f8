//! Game state management for the GUI
//!
//! Turn order, move validation, the deferred AI turn and end-of-game
//! scoring live here, independent of any rendering.

use std::sync::mpsc::{channel, Receiver, TryRecvError};
use std::thread;
use std::time::{Duration, Instant};

use derive_more::{Display, Error};
use log::{debug, info, warn};

use crate::{evaluate, AIEngine, Board, BoardError, Evaluation, MoveResult, Pos, Stone};

/// Pause between a human move and the start of the AI search, so the
/// human move is on screen before the search runs.
pub const AI_MOVE_DELAY: Duration = Duration::from_millis(500);

/// Reason a human move was rejected
#[derive(Debug, Clone, PartialEq, Eq, Display, Error)]
pub enum MoveError {
    #[display("Game is over")]
    GameOver,
    #[display("AI is thinking")]
    AiThinking,
    #[display("Not your turn")]
    NotYourTurn,
    #[display("Invalid move: {_0}")]
    Board(BoardError),
}

impl From<BoardError> for MoveError {
    fn from(err: BoardError) -> Self {
        MoveError::Board(err)
    }
}

/// AI computation state
pub enum AiState {
    Idle,
    /// Waiting for the move delay to pass
    Scheduled { due: Instant },
    Thinking {
        receiver: Receiver<MoveResult>,
        start_time: Instant,
    },
}

/// Final scores of a full board
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct GameOutcome {
    pub human: i32,
    pub ai: i32,
}

impl GameOutcome {
    pub fn from_evaluation(eval: &Evaluation) -> Self {
        Self {
            human: eval.human,
            ai: eval.ai,
        }
    }

    /// Winning side, `None` for a draw
    pub fn winner(&self) -> Option<Stone> {
        Evaluation {
            net: self.ai - self.human,
            human: self.human,
            ai: self.ai,
        }
        .winner()
    }

    pub fn verdict(&self) -> &'static str {
        match self.winner() {
            Some(Stone::Human) => "You win!",
            Some(_) => "AI wins!",
            None => "It's a draw!",
        }
    }

    /// Multi-line text for the game over window
    pub fn summary(&self) -> String {
        format!(
            "Final Scores:\nYou: {}\nAI: {}\n{}",
            self.human,
            self.ai,
            self.verdict()
        )
    }
}

/// Main game state
pub struct GameState {
    pub board: Board,
    pub human_turn: bool,
    pub outcome: Option<GameOutcome>,
    pub last_move: Option<Pos>,
    pub move_history: Vec<(Pos, Stone)>,
    pub last_ai_result: Option<MoveResult>,
    pub ai_state: AiState,
    pub message: Option<String>,

    // AI configuration
    engine: AIEngine,
    ai_delay: Duration,
}

impl GameState {
    /// Start a game on an empty `size`×`size` board with the human to move.
    pub fn new(size: usize) -> Result<Self, BoardError> {
        Ok(Self::with_engine(Board::new(size)?, AIEngine::new()))
    }

    pub fn with_engine(board: Board, engine: AIEngine) -> Self {
        Self {
            board,
            human_turn: true,
            outcome: None,
            last_move: None,
            move_history: Vec::new(),
            last_ai_result: None,
            ai_state: AiState::Idle,
            message: None,
            engine,
            ai_delay: AI_MOVE_DELAY,
        }
    }

    pub fn set_ai_delay(&mut self, delay: Duration) {
        self.ai_delay = delay;
    }

    pub fn reset(&mut self) {
        self.board.clear();
        self.human_turn = true;
        self.outcome = None;
        self.last_move = None;
        self.move_history.clear();
        self.last_ai_result = None;
        self.ai_state = AiState::Idle;
        self.message = None;
    }

    pub fn is_human_turn(&self) -> bool {
        self.human_turn && self.outcome.is_none()
    }

    pub fn is_ai_thinking(&self) -> bool {
        matches!(self.ai_state, AiState::Thinking { .. })
    }

    pub fn is_game_over(&self) -> bool {
        self.outcome.is_some()
    }

    /// Current run totals (mid-game or final)
    pub fn live_scores(&self) -> Evaluation {
        evaluate(&self.board)
    }

    /// Attempt to place the human's mark at the given position
    pub fn try_place_stone(&mut self, pos: Pos) -> Result<(), MoveError> {
        if self.outcome.is_some() {
            return Err(MoveError::GameOver);
        }
        if self.is_ai_thinking() {
            return Err(MoveError::AiThinking);
        }
        if !self.human_turn {
            return Err(MoveError::NotYourTurn);
        }

        self.board.try_place(pos, Stone::Human)?;
        info!("Player moved to {pos}");
        self.record_move(pos, Stone::Human);

        self.human_turn = false;
        self.check_status();
        if self.outcome.is_none() {
            self.ai_state = AiState::Scheduled {
                due: Instant::now() + self.ai_delay,
            };
        }
        Ok(())
    }

    fn record_move(&mut self, pos: Pos, stone: Stone) {
        self.move_history.push((pos, stone));
        self.last_move = Some(pos);
        self.message = None;
    }

    /// End the game once the board is full.
    fn check_status(&mut self) {
        if !self.board.is_full() {
            return;
        }
        let outcome = GameOutcome::from_evaluation(&evaluate(&self.board));
        info!("Final Scores: You {} AI {}", outcome.human, outcome.ai);
        info!("{}", outcome.verdict());
        self.outcome = Some(outcome);
    }

    /// Advance the AI turn: start the search once its delay has passed and
    /// collect the result when it is ready. Call once per frame.
    pub fn update(&mut self, now: Instant) {
        if let AiState::Scheduled { due } = self.ai_state {
            if now >= due {
                self.start_ai_thinking();
            }
        }
        self.check_ai_result();
    }

    /// Time left before a scheduled AI search starts
    pub fn ai_due_in(&self, now: Instant) -> Option<Duration> {
        match self.ai_state {
            AiState::Scheduled { due } => Some(due.saturating_duration_since(now)),
            _ => None,
        }
    }

    /// Run the engine on a worker thread
    pub fn start_ai_thinking(&mut self) {
        if self.human_turn || self.is_ai_thinking() || self.outcome.is_some() {
            return;
        }

        let board = self.board.clone();
        let mut engine = self.engine.clone();
        let (tx, rx) = channel();

        // The search has no interruption point. A worker whose game was
        // reset or dropped runs to completion and its result is discarded.
        thread::spawn(move || {
            let result = engine.get_move_with_stats(&board);
            if tx.send(result).is_err() {
                debug!("game ended while the AI was thinking, discarding its move");
            }
        });

        self.ai_state = AiState::Thinking {
            receiver: rx,
            start_time: Instant::now(),
        };
    }

    /// Check if AI has finished thinking
    pub fn check_ai_result(&mut self) {
        let result = match &self.ai_state {
            AiState::Thinking {
                receiver,
                start_time,
            } => match receiver.try_recv() {
                Ok(result) => Some((result, start_time.elapsed())),
                Err(TryRecvError::Empty) => None,
                Err(TryRecvError::Disconnected) => {
                    warn!("AI worker stopped without a result");
                    self.ai_state = AiState::Idle;
                    self.human_turn = true;
                    self.message = Some("AI error".to_string());
                    return;
                }
            },
            _ => None,
        };

        if let Some((move_result, elapsed)) = result {
            self.apply_ai_result(move_result, elapsed);
        }
    }

    fn apply_ai_result(&mut self, move_result: MoveResult, elapsed: Duration) {
        self.ai_state = AiState::Idle;
        info!("AI thinking time: {:.3}s", elapsed.as_secs_f64());

        match move_result.best_move {
            Some(pos) if self.board.is_empty(pos) => {
                self.board.place_stone(pos, Stone::Ai);
                info!("AI moved to {pos}");
                self.record_move(pos, Stone::Ai);
            }
            Some(pos) => {
                warn!("AI chose occupied cell {pos}, skipping its turn");
                self.message = Some("AI could not find a move".to_string());
            }
            None => {
                self.message = Some("AI could not find a move".to_string());
            }
        }

        self.last_ai_result = Some(move_result);
        self.human_turn = true;
        self.check_status();
    }

    /// Get AI thinking elapsed time
    pub fn ai_thinking_elapsed(&self) -> Option<Duration> {
        match &self.ai_state {
            AiState::Thinking { start_time, .. } => Some(start_time.elapsed()),
            _ => None,
        }
    }
}
