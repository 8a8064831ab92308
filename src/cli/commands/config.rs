use crate::cli::parser::Commands;
use crate::config::Config;
use crate::core::config::ConfigLogic;
use crate::errors::AppResult;
use crate::ui::messages::{info, success};

/// Handle the `config` subcommand
pub fn handle(cmd: &Commands, cfg: &Config) -> AppResult<()> {
    if let Commands::Config {
        print_config,
        edit_config,
        editor,
    } = cmd
    {
        let path = Config::config_file();

        if *print_config {
            if path.exists() {
                ConfigLogic::print(&path)?;
            } else {
                info("No configuration file yet; effective defaults:");
                println!("{}", serde_yaml::to_string(cfg)?);
            }
        }

        if *edit_config {
            ConfigLogic::edit(&path, editor)?;
            success("Configuration file edited.");
        }
    }

    Ok(())
}
