use std::error::Error;
use std::io;
use subnet_inspect::config::Config;
use subnet_inspect::logging::init_logging;
use subnet_inspect::session::run_session;

fn main() -> Result<(), Box<dyn Error>> {
    // Do as little as possible in main.rs as it can't contain any tests
    let config = Config::from_env()?;
    init_logging(&config.log_config)?;
    log::info!("#Start main()");

    let stdin = io::stdin();
    let mut input = stdin.lock();
    let mut output = io::stdout();
    run_session(&mut input, &mut output, &config)?;

    Ok(())
}
