mod session_rng;

pub mod number_guess;
pub mod tictactoe;

pub use session_rng::SessionRng;
