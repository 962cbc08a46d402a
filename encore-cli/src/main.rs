//! Entry point for the `encore` command-line interface.
#![forbid(unsafe_code)]

#[expect(
    clippy::print_stderr,
    reason = "the binary reports fatal errors on stderr"
)]
fn main() {
    if let Err(err) = encore_cli::run() {
        eprintln!("encore: {err}");
        std::process::exit(1);
    }
}
