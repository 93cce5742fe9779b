#![warn(clippy::pedantic)]

pub mod format;
pub mod log;
