//! ffcut CLI entry point.

fn main() {
    if let Err(e) = ffcut::run() {
        ffcut::cli::help::report_error(&e);
        std::process::exit(e.exit_code());
    }
}
