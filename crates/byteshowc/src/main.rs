//! byteshow CLI
//!
//! Renders bytes and scalar values as source-literal escaped text for
//! debugging and logging. The engine lives in `byteshow_core`; this binary
//! only parses argv, moves bytes in and out, and picks exit codes.

use std::sync::Once;

mod commands;

static TRACING_INIT: Once = Once::new();

/// Initialize tracing for debug output.
///
/// Call this once at startup. Safe to call multiple times.
/// Enable with `RUST_LOG=byteshow=debug`.
fn init_tracing() {
    TRACING_INIT.call_once(|| {
        use tracing_subscriber::{fmt, prelude::*, EnvFilter};

        // Only initialize if RUST_LOG is set
        if std::env::var("RUST_LOG").is_ok() {
            let filter = EnvFilter::from_default_env();
            tracing_subscriber::registry()
                .with(fmt::layer().with_target(true).with_level(true))
                .with(filter)
                .init();
        }
    });
}

fn print_usage() {
    eprintln!("Usage: byteshow <command> [options]");
    eprintln!();
    eprintln!("Commands:");
    eprintln!("  string <file|->     Escape the bytes of a file (or stdin)");
    eprintln!("  char <codepoint>    Escape a single scalar value (U+XXXX, 0xXXXX, or decimal)");
    eprintln!("  help                Show this message");
    eprintln!();
    eprintln!("Options:");
    eprintln!("  --lossy    string: replace undecodable bytes with U+FFFD");
    eprintln!("  --bare     omit the surrounding quotes");
}

fn main() {
    init_tracing();

    let args: Vec<String> = std::env::args().collect();
    if args.len() < 2 {
        print_usage();
        std::process::exit(1);
    }

    match args[1].as_str() {
        "string" => commands::run_string(&args[2..]),
        "char" => commands::run_char(&args[2..]),
        "help" | "--help" | "-h" => print_usage(),
        other => {
            // Unrecognized commands and mode flags are caller errors, not
            // data errors: report and die rather than guess.
            eprintln!("error: unknown command `{other}`");
            print_usage();
            std::process::exit(1);
        }
    }
}
