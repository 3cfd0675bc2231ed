//! Shared utilities for argument processing.

/// What: Determine the log level from command-line arguments.
///
/// Output:
/// - Log level string (trace, debug, info, warn, error).
///
/// Details:
/// - `--verbose` overrides `--log-level`. `RUST_LOG`, when set, is applied
///   later by the logger and wins over both.
pub fn determine_log_level(args: &crate::args::Args) -> String {
    if args.verbose {
        "debug".to_string()
    } else {
        args.log_level.clone()
    }
}
