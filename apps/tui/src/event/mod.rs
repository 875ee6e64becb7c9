// Event loop and headless runner

mod loop_handler;

pub use loop_handler::{run, run_headless};
