// Command layer: renders clock readings and parse results for the `tempo` binary.

pub mod commands;
