//! Tic-tac-toe built from a state machine and pluggable move strategies.
//!
//! # Architecture
//!
//! - **Board**: fixed-size grid with move validation and incremental win detection
//! - **State**: `GameState` enum and the `GameContext` that owns it
//! - **Players**: `PlayerStrategy` trait with interactive and scripted implementations
//! - **Game**: `TicTacToeGame` turn loop tying the pieces together
//!
//! # Example
//!
//! ```
//! use tictactoe_patterns::{Outcome, Position, ScriptedStrategy, Symbol, TicTacToeGame};
//!
//! # fn example() -> Result<(), tictactoe_patterns::GameError> {
//! let x = ScriptedStrategy::new("X", [(0, 0), (0, 1), (0, 2)].map(|(r, c)| Position::new(r, c)));
//! let o = ScriptedStrategy::new("O", [(1, 0), (1, 1)].map(|(r, c)| Position::new(r, c)));
//!
//! let mut game = TicTacToeGame::new(Box::new(x), Box::new(o));
//! let outcome = game.play(&mut std::io::sink())?;
//! assert_eq!(outcome, Outcome::Winner(Symbol::X));
//! # Ok(())
//! # }
//! # example().unwrap();
//! ```

#![warn(missing_docs)]
#![forbid(unsafe_code)]

// Private module declarations
mod config;
mod games;
mod players;

// Crate-level exports - Configuration
pub use config::{ConfigError, GameConfig, PlayerConfig, parse_script};

// Crate-level exports - Players
pub use players::{
    InteractiveStrategy, LineSource, Player, PlayerStrategy, ScriptedStrategy, StdinLines,
};

// Crate-level exports - Game types (tic-tac-toe)
pub use games::tictactoe::{
    Board, Cell, DEFAULT_SIZE, GameContext, GameError, GameState, Invariant, InvariantSet,
    InvariantViolation, Move, Outcome, Position, Symbol, TicTacToeGame, TicTacToeInvariants,
};

// Crate-level exports - Rules and invariants
pub use games::tictactoe::invariants::{
    MonotonicBoardInvariant, MoveCountInvariant, TurnAgreementInvariant,
};
pub use games::tictactoe::rules::{is_full, is_winning_cell};
