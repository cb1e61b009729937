//! Core of a Sokoban-style box pusher: grid model, move resolution, win
//! detection, and per-level best-score tracking. The console frontend in
//! [`console_interface`] is a thin driver over this API; any other frontend
//! can drive it the same way.

pub mod console_interface;
pub mod core;
pub mod error;
pub mod level;
pub mod models;
pub mod session;

#[cfg(test)]
mod test;
