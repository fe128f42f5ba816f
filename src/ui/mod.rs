pub mod layout;
pub mod renderer;
pub mod terminal;

pub use terminal::{run_ui, App, AppAction};
