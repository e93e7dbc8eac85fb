//! Grid snake arcade game.
//!
//! [`GameEngine`] owns the board, the tick step and the session timer. It draws through
//! [`RenderSurface`], reports scores through [`ScoreDisplay`] and keeps best scores in a
//! [`ScoreStore`], so it runs headless in tests and inside a macroquad window in the binary.

pub mod config;
pub mod controls;
pub mod difficulty;
pub mod engine;
pub mod hud;
pub mod input;
pub mod logging;
pub mod render;
pub mod store;
pub mod timer;
pub mod view;

pub use difficulty::Difficulty;
pub use engine::{Cell, Direction, EngineConfig, GameEngine, GameStatus, Snake, TickOutcome};
pub use hud::{Hud, ScoreDisplay};
pub use input::InputEvent;
pub use render::{Canvas, Paint, RenderSurface, Square};
pub use store::{JsonFileStore, MemoryStore, ScoreStore, StoreError};
pub use timer::{TickTimer, TimerState};
