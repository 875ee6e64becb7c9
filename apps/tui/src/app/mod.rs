// App module for the film stats dashboard
// Handles application state and user actions

pub mod actions;
pub mod input;
pub mod state;

#[cfg(test)]
pub mod testing;

pub use input::{handle_input, handle_mouse};
pub use state::App;
