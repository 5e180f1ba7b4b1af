use wasm_bindgen::prelude::*;

pub mod board;
pub mod config;
pub mod error;
pub mod game;
mod log;
pub mod types;
mod wasm;

pub use board::Board;
pub use config::{GameConfig, Layout, VictoryPolicy};
pub use error::GameError;
pub use game::{CaptureCounts, GameInstance};
pub use types::{Cell, GameResult, GameState, Outcome, Player, Position};
pub use wasm::ReversiGame;

#[wasm_bindgen]
pub fn wasm_ready() -> bool {
    true
}

/// Routes Rust panics to the browser console. Compiled in with the
/// `console_error_panic_hook` feature (default).
#[wasm_bindgen(js_name = initPanicHook)]
pub fn init_panic_hook() {
    #[cfg(feature = "console_error_panic_hook")]
    console_error_panic_hook::set_once();
}
