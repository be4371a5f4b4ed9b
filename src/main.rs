use anyhow::Context;
use driver::{console::ConsoleDriver, Driver};
use log::{error, info};

use config::{GameConfig, CONFIG_FILENAME};
use dictionary::{
    source::executable_dir, FileWordSource, PrefixIndex, WordSource, WordSourceError,
};
use game::{Forfeit, Game, Rules};

mod config;
mod dictionary;
mod driver;
mod game;

fn main() {
    env_logger::try_init().unwrap_or(());

    match run() {
        Ok(forfeit) => info!("Finished: {}", forfeit),
        Err(e) => {
            // Everything that reaches here is fatal
            if let Some(path) = e.downcast_ref::<WordSourceError>().and_then(|e| e.path()) {
                error!("Failed to load word list {:?}", path);
            }
            error!("{:?}", e);
            println!("{}", e);
            std::process::exit(1);
        }
    }
}

fn run() -> anyhow::Result<Forfeit> {
    let config_path = executable_dir()
        .context("Fatal error: could not locate the executable")?
        .join(CONFIG_FILENAME);
    let config = GameConfig::load_or_default(&config_path)
        .with_context(|| format!("Fatal error while reading config {:?}", config_path))?;

    let words = FileWordSource::beside_executable(&config.word_source)?.words()?;
    let index = PrefixIndex::build(&words);

    let game = Game::new(index, Rules::from(&config));
    let stdin = std::io::stdin();
    let mut driver = ConsoleDriver::new(game, stdin.lock(), std::io::stdout());
    Ok(driver.play()?)
}
