use crate::cli::commands::open_store;
use crate::cli::parser::Commands;
use crate::config::Config;
use crate::errors::{AppError, AppResult};
use crate::export::ExportLogic;
use crate::utils::date::bounds_from_period;
use chrono::NaiveDate;
use std::path::Path;

pub fn handle(cmd: &Commands, cfg: &Config) -> AppResult<()> {
    if let Commands::Export {
        format,
        file,
        range,
        project,
        force,
    } = cmd
    {
        let bounds = match range {
            Some(r) => bounds_from_period(r).map_err(AppError::InvalidDate)?,
            None => (NaiveDate::MIN, NaiveDate::MAX),
        };

        let (_, store) = open_store(cfg)?;
        ExportLogic::export(
            &store,
            *format,
            Path::new(file),
            bounds,
            project.as_deref(),
            *force,
            &cfg.rules(),
        )?;
    }
    Ok(())
}
