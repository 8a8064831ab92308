use crate::cli::commands::{open_store, parse_date_arg};
use crate::cli::parser::Commands;
use crate::config::Config;
use crate::core::Aggregator;
use crate::core::add::{AddLogic, BreakInput, RecordEdit};
use crate::errors::{AppError, AppResult};
use crate::ui::messages::{success, warnings};
use crate::utils::formatting::wage_or_dash;
use crate::utils::mins2readable;
use crate::utils::time::{parse_optional_time, parse_time};

/// Add or update the record for a day.
pub fn handle(cmd: &Commands, cfg: &Config) -> AppResult<()> {
    if let Commands::Add {
        date,
        start,
        end,
        break_minutes,
        break_start,
        break_end,
        rate,
        location,
        project,
        memo,
    } = cmd
    {
        //
        // 1. Parse date (mandatory)
        //
        let d = parse_date_arg(date)?;

        //
        // 2. Parse times (optional)
        //
        let clock_in = parse_optional_time(start.as_ref())?;
        let clock_out = parse_optional_time(end.as_ref())?;

        //
        // 3. Break: minutes or a start/end window
        //
        let break_input = match (break_minutes, break_start, break_end) {
            (Some(m), _, _) => Some(BreakInput::Minutes(*m)),
            (None, Some(bs), Some(be)) => Some(BreakInput::Window {
                start: parse_time(bs).ok_or_else(|| AppError::InvalidTime(bs.clone()))?,
                end: parse_time(be).ok_or_else(|| AppError::InvalidTime(be.clone()))?,
            }),
            _ => None,
        };

        if let Some(r) = rate
            && (!r.is_finite() || *r < 0.0)
        {
            return Err(AppError::InvalidRate(r.to_string()));
        }

        let (storage, mut store) = open_store(cfg)?;

        // The configured default location only applies to new days
        let location = match location {
            Some(l) => Some(l.clone()),
            None if store.get(d).is_none() && !cfg.default_location.is_empty() => {
                Some(cfg.default_location.clone())
            }
            None => None,
        };

        let edit = RecordEdit {
            clock_in,
            clock_out,
            break_input,
            hourly_rate: *rate,
            location,
            project: project.clone(),
            memo: memo.clone(),
        };

        //
        // 4. Apply and save
        //
        AddLogic::apply(&mut store, d, edit, cfg.default_hourly_rate)?;
        storage.save(&store)?;

        let total = Aggregator::daily_total(&store, d, &cfg.rules());
        success(format!(
            "Saved {}: worked {} | wage {}",
            d,
            mins2readable(total.worked_minutes, false, true),
            wage_or_dash(total.wage)
        ));
        warnings(&total.warnings);
    }

    Ok(())
}
