use crate::cli::commands::{date_or_today, open_store};
use crate::cli::parser::{Commands, PunchAction};
use crate::config::Config;
use crate::core::Aggregator;
use crate::core::punch::{PunchDefaults, PunchLogic};
use crate::errors::{AppError, AppResult};
use crate::ui::messages::{success, warnings};
use crate::utils::mins2readable;
use crate::utils::time::{format_time, parse_time};
use chrono::{NaiveTime, Timelike};

fn time_or_now(at: &Option<String>) -> AppResult<NaiveTime> {
    match at {
        Some(s) => parse_time(s).ok_or_else(|| AppError::InvalidTime(s.to_string())),
        None => {
            let now = chrono::Local::now().time();
            // minute precision, like manual entries
            Ok(NaiveTime::from_hms_opt(now.hour(), now.minute(), 0).unwrap_or(now))
        }
    }
}

pub fn handle(cmd: &Commands, cfg: &Config) -> AppResult<()> {
    if let Commands::Punch { action } = cmd {
        let (storage, mut store) = open_store(cfg)?;

        match action {
            PunchAction::In { date, at } => {
                let d = date_or_today(date)?;
                let t = time_or_now(at)?;
                let defaults = PunchDefaults {
                    hourly_rate: cfg.default_hourly_rate,
                    location: cfg.default_location.clone(),
                };
                PunchLogic::punch_in(&mut store, d, t, &defaults)?;
                storage.save(&store)?;
                success(format!("Clocked in on {} at {}", d, format_time(t)));
            }
            PunchAction::Out { at } => {
                let t = time_or_now(at)?;
                let record = PunchLogic::punch_out(&mut store, t, cfg.fixed_break_minutes)?;
                storage.save(&store)?;

                let total = Aggregator::daily_total(&store, record.date, &cfg.rules());
                success(format!(
                    "Clocked out on {} at {}: worked {}",
                    record.date,
                    format_time(t),
                    mins2readable(total.worked_minutes, false, true)
                ));
                warnings(&total.warnings);
            }
        }
    }

    Ok(())
}
