//! Top-level screens.

pub mod game_view;
pub mod welcome_view;

pub use game_view::GameView;
pub use welcome_view::WelcomeView;
