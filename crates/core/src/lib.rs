//! Domain model, line parser, and ports for the quote-site generator.

pub mod application;
pub mod domain;
pub mod error;
pub mod parser;
pub mod ports;
