use crate::cli::commands::{open_store, parse_date_arg};
use crate::cli::parser::Commands;
use crate::config::Config;
use crate::errors::AppResult;
use crate::ui::messages::{info, success, warning};

use std::io::{self, Write};

/// Ask a yes/no confirmation from the user
fn ask_confirmation(prompt: &str) -> bool {
    warning(prompt);
    print!("Confirm [y/N]: ");
    let _ = io::stdout().flush();

    let mut s = String::new();
    if io::stdin().read_line(&mut s).is_ok() {
        matches!(s.trim().to_lowercase().as_str(), "y" | "yes")
    } else {
        false
    }
}

pub fn handle(cmd: &Commands, cfg: &Config) -> AppResult<()> {
    if let Commands::Del {
        date: date_str,
        yes,
    } = cmd
    {
        let d = parse_date_arg(date_str)?;

        let (storage, mut store) = open_store(cfg)?;
        if store.get(d).is_none() {
            info(format!("No record for {}; nothing to delete.", d));
            return Ok(());
        }

        if !*yes
            && !ask_confirmation(&format!(
                "Delete the record for {}? This action is irreversible.",
                d
            ))
        {
            info("Operation cancelled.");
            return Ok(());
        }

        store.remove(d);
        storage.save(&store)?;
        success(format!("The record for {} has been deleted.", d));
    }

    Ok(())
}
