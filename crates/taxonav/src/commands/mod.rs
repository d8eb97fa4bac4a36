//! Command handlers. Each handler owns one subcommand end to end:
//! load inputs, run the core pipeline, format, print.

pub mod categories;
pub mod render;
