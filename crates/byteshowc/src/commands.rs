//! CLI command implementations.

use std::io::Read;

use byteshow_core::{escape_char, escape_exact, escape_lossy, EscapeError, Mode};

/// `byteshow string <file|-> [--lossy] [--bare]`
pub fn run_string(args: &[String]) {
    let mut mode = Mode::Quoted;
    let mut lossy = false;
    let mut input = None;

    for arg in args {
        match arg.as_str() {
            "--bare" => mode = Mode::Bare,
            "--lossy" => lossy = true,
            "--exact" => lossy = false,
            other if other != "-" && other.starts_with('-') => {
                eprintln!("error: unknown option `{other}`");
                eprintln!("Usage: byteshow string <file|-> [--lossy] [--bare]");
                std::process::exit(1);
            }
            other => {
                if input.replace(other).is_some() {
                    eprintln!("error: more than one input given");
                    std::process::exit(1);
                }
            }
        }
    }

    let Some(path) = input else {
        eprintln!("error: missing input");
        eprintln!("Usage: byteshow string <file|-> [--lossy] [--bare]");
        std::process::exit(1);
    };

    let bytes = read_input(path);
    tracing::debug!(len = bytes.len(), lossy, ?mode, "escaping buffer");

    let mut out = String::new();
    let rendered = if lossy {
        escape_lossy(&bytes, mode, &mut out)
    } else {
        escape_exact(&bytes, mode, &mut out)
    };
    if rendered.is_err() {
        eprintln!("error: failed to render escaped output");
        std::process::exit(1);
    }
    println!("{out}");
}

/// `byteshow char <codepoint> [--bare]`
pub fn run_char(args: &[String]) {
    let mut mode = Mode::Quoted;
    let mut spec = None;

    for arg in args {
        match arg.as_str() {
            "--bare" => mode = Mode::Bare,
            other if other.starts_with("--") => {
                eprintln!("error: unknown option `{other}`");
                eprintln!("Usage: byteshow char <codepoint> [--bare]");
                std::process::exit(1);
            }
            other => {
                if spec.replace(other).is_some() {
                    eprintln!("error: more than one codepoint given");
                    std::process::exit(1);
                }
            }
        }
    }

    let Some(spec) = spec else {
        eprintln!("error: missing codepoint");
        eprintln!("Usage: byteshow char <codepoint> [--bare]");
        std::process::exit(1);
    };
    let Some(cp) = parse_codepoint(spec) else {
        eprintln!("error: `{spec}` is not a codepoint (try U+200D, 0x200d, or 8205)");
        std::process::exit(1);
    };
    tracing::debug!(cp, ?mode, "escaping scalar value");

    let mut out = String::new();
    match escape_char(cp, mode, &mut out) {
        Ok(()) => println!("{out}"),
        Err(err @ EscapeError::CodepointTooLarge(_)) => {
            eprintln!("error: {err}");
            std::process::exit(1);
        }
        Err(EscapeError::Sink(_)) => {
            eprintln!("error: failed to render escaped output");
            std::process::exit(1);
        }
    }
}

/// Read the named file, or stdin for `-`.
fn read_input(path: &str) -> Vec<u8> {
    if path == "-" {
        let mut bytes = Vec::new();
        if let Err(err) = std::io::stdin().read_to_end(&mut bytes) {
            eprintln!("error: failed to read stdin: {err}");
            std::process::exit(1);
        }
        return bytes;
    }
    match std::fs::read(path) {
        Ok(bytes) => bytes,
        Err(err) => {
            eprintln!("error: failed to read `{path}`: {err}");
            std::process::exit(1);
        }
    }
}

/// Accepts `U+XXXX`, `0xXXXX`, or decimal.
fn parse_codepoint(spec: &str) -> Option<u32> {
    if let Some(hex) = spec.strip_prefix("U+").or_else(|| spec.strip_prefix("u+")) {
        return u32::from_str_radix(hex, 16).ok();
    }
    if let Some(hex) = spec.strip_prefix("0x").or_else(|| spec.strip_prefix("0X")) {
        return u32::from_str_radix(hex, 16).ok();
    }
    spec.parse().ok()
}
