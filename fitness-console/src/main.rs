use std::error::Error;

use fitness_console::config::Config;
use fitness_console::console::StdConsole;
use fitness_console::FitnessCenter;
use log::info;

fn main() -> Result<(), Box<dyn Error>> {
    let config = Config::from_env();
    if config.log_config.exists() {
        log4rs::init_file(&config.log_config, Default::default())?;
    }

    info!("Starting session");
    let profile = FitnessCenter::new(Box::new(StdConsole::new())).run()?;
    info!(
        "Session ended, user {}",
        if profile.is_registered() {
            "registered"
        } else {
            "not registered"
        }
    );

    Ok(())
}
