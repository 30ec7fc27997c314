use dotenv::dotenv;
use opi::commands::Command;
use opi::config::Config;
use opi::{logger, Result};
use requester::OsuApi;
use std::env;

#[tokio::main]
async fn main() -> Result<()> {
    dotenv().ok();
    let config = Config::from_env()?;
    logger::init(config.level_filter()?, config.log_dir.as_deref())?;

    let command = Command::parse(env::args().skip(1))?;
    let mode = config.play_mode()?;
    let api = OsuApi::new(&config.api_key).base_url(&config.base_url);

    let output = command.run(&api, mode).await?;
    println!("{}", output);

    Ok(())
}
