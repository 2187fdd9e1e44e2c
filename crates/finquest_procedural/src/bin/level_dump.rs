//! # Level Dump
//!
//! Command-line tool to print generated curriculum as JSON.
//!
//! ```text
//! level_dump <world> [level]        one level with its lessons
//! level_dump --all <world>          all eight levels of a world
//! level_dump --lessons <level_id>   lessons of one level
//! level_dump --catalog <file.toml>  ... use a custom content file
//! ```
//!
//! Set `RUST_LOG=finquest_procedural=debug` to trace generation.

use std::process::ExitCode;

use finquest_procedural::{ContentCatalog, Curriculum, GenerationError, LevelContentGenerator};
use serde::Serialize;
use tracing_subscriber::EnvFilter;

const USAGE: &str = "Usage: level_dump [--catalog <file.toml>] <world> [level]
       level_dump [--catalog <file.toml>] --all <world>
       level_dump [--catalog <file.toml>] --lessons <level_id>";

fn main() -> ExitCode {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .with_writer(std::io::stderr)
        .init();

    let args: Vec<String> = std::env::args().skip(1).collect();

    match run(args) {
        Ok(json) => {
            println!("{json}");
            ExitCode::SUCCESS
        }
        Err(message) => {
            eprintln!("Error: {message}");
            ExitCode::FAILURE
        }
    }
}

/// Removes `flag <value>` from `args`, returning the value.
fn take_option(args: &mut Vec<String>, flag: &str) -> Result<Option<String>, String> {
    let Some(position) = args.iter().position(|a| a == flag) else {
        return Ok(None);
    };
    args.remove(position);
    if position < args.len() {
        Ok(Some(args.remove(position)))
    } else {
        Err(USAGE.to_string())
    }
}

fn is_flag(arg: &str) -> bool {
    arg.starts_with("--")
}

fn run(mut args: Vec<String>) -> Result<String, String> {
    let catalog_path = take_option(&mut args, "--catalog")?;
    let catalog = match catalog_path.as_deref() {
        Some(path) => ContentCatalog::from_path(path),
        None => ContentCatalog::bundled(),
    }
    .map_err(|e| e.to_string())?;
    let curriculum = Curriculum::new(LevelContentGenerator::new(catalog));

    match args.as_slice() {
        [flag, world] if flag == "--all" && !is_flag(world) => {
            to_json(&curriculum.list_levels(world))
        }
        [flag, level_id] if flag == "--lessons" && !is_flag(level_id) => {
            to_json(&curriculum.list_lessons(level_id))
        }
        [world] if !is_flag(world) => to_json(&curriculum.generator().generate(world, 1)),
        [world, level] if !is_flag(world) => {
            let level_number: u32 = level
                .parse()
                .map_err(|_| format!("level must be a positive number, got {level:?}"))?;
            to_json(&curriculum.generator().generate(world, level_number))
        }
        _ => Err(USAGE.to_string()),
    }
}

fn to_json<T: Serialize>(result: &Result<T, GenerationError>) -> Result<String, String> {
    match result {
        Ok(value) => serde_json::to_string_pretty(value).map_err(|e| e.to_string()),
        Err(e) => Err(e.to_string()),
    }
}
