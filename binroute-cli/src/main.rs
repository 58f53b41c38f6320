//! Entry point for the `binroute` command-line interface.
#![forbid(unsafe_code)]

use binroute_cli::CliError;

fn main() {
    env_logger::init();
    match binroute_cli::run() {
        Ok(()) => {}
        Err(CliError::ArgumentParsing(err)) => err.exit(),
        Err(err) => report_and_exit(&err),
    }
}

#[expect(
    clippy::print_stderr,
    reason = "the binary reports fatal errors on stderr"
)]
fn report_and_exit(err: &CliError) -> ! {
    eprintln!("binroute: {err}");
    std::process::exit(1);
}
