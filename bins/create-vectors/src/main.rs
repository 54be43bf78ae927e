//! Prints the `CREATE` address test vectors to standard output.
use color_eyre::eyre::Result;
use create_address::{test_nonces, write_test_cases, TEST_SENDER};
use tracing::debug;
use tracing_subscriber::EnvFilter;

fn main() -> Result<()> {
    color_eyre::install()?;

    if std::env::var_os("RUST_BACKTRACE").is_none() {
        std::env::set_var("RUST_BACKTRACE", "1");
    }

    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")),
        )
        .with_writer(std::io::stderr)
        .init();

    let written = write_test_cases(std::io::stdout().lock(), TEST_SENDER, test_nonces())?;
    debug!(written, sender = TEST_SENDER, "done");

    Ok(())
}
