use lattice_app::{app::App, cli, config::Config};
use lattice_core::Token;

use clap::Parser;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    dotenv::dotenv().ok();
    env_logger::init();

    let config = Config::parse();
    let catalog = config.load_catalog()?;
    let app = App::from_config(&config)?;
    let token = Token::new(config.token.clone());

    match cli::run(&app, &token, &catalog, config.command).await {
        Ok(output) => {
            println!("{output}");
            Ok(())
        }
        Err(error) if cli::is_usage_error(&error) => {
            eprintln!("{error}");
            std::process::exit(2);
        }
        Err(error) => Err(error.into()),
    }
}
