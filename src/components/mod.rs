pub mod app;
pub mod controls_panel;
pub mod game_view;
pub mod register_view;
pub mod results_view;
pub mod scoreboard_panel;

pub use app::App;
