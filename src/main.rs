use anyhow::Result;
use datetime_selector::config::Config;
use datetime_selector::logger::Logger;
use datetime_selector::ui;

const USAGE: &str = "Usage: datetime-selector [--config <path>] [--generate-config [<path>]]";

#[tokio::main]
async fn main() -> Result<()> {
    let args: Vec<String> = std::env::args().skip(1).collect();

    let config = match args.first().map(String::as_str) {
        None => Config::load()?,
        Some("--config") => match args.get(1) {
            Some(path) => Config::load_from_file(path)?,
            None => {
                eprintln!("{}", USAGE);
                return Ok(());
            }
        },
        Some("--generate-config") => {
            let path = match args.get(1) {
                Some(path) => path.into(),
                None => Config::get_default_config_path()?,
            };
            return Config::generate_default_config(path);
        }
        Some(_) => {
            eprintln!("{}", USAGE);
            return Ok(());
        }
    };

    let logger = Logger::from_config(&config.logging)?;

    // Run the TUI application
    let changes = ui::run_app(&config).await?;

    if let Some(path) = logger.log_file() {
        eprintln!("Log written to {}", path.display());
    }

    // Print what was picked so the demo can be used from scripts
    for change in changes {
        println!("{}", serde_json::to_string(&change)?);
    }

    Ok(())
}
