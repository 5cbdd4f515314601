use anyhow::Result;
use buildenv_cli::{format_error, Logger};

fn main() -> Result<()> {
    if let Err(e) = buildenv_cli::run() {
        Logger::new().error(format_error(&e));
        std::process::exit(1);
    }
    Ok(())
}
