#![warn(
    clippy::all,
    clippy::pedantic,
    clippy::nursery,
    clippy::unwrap_used,
    clippy::expect_used
)]
#![allow(
    clippy::module_name_repetitions,
    clippy::cast_possible_wrap,    // board area is capped by Settings::validate
)]
pub mod config;
pub mod engine;
pub mod grid;
pub mod strategies;
