pub mod generation;
pub mod providers;

pub use generation::{generate_ideas, generate_script};
