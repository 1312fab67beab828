use txclean::{config::Config, logging::init_logging, pipeline::run};

use anyhow::Context;
use std::io::stdout;

fn main() -> anyhow::Result<()> {
    init_logging();

    let config = Config::default();
    run(&config, stdout().lock())
        .with_context(|| format!("failed to clean {}", config.input_path.display()))?;

    Ok(())
}
