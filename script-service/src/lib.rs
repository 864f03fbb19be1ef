//! Script-service library.
//!
//! Serves the static frontend and two JSON endpoints that proxy to
//! generative-text providers: one turns a topic into four one-line video
//! ideas, the other expands a chosen idea into a full script.

pub mod config;
pub mod handlers;
pub mod services;
pub mod startup;
