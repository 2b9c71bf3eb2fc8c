//! Sprite565 - command-line tool for compiling sprites into RGB565 tables

use std::process::ExitCode;

use sprite565::cli;

fn main() -> ExitCode {
    cli::run()
}
