use crate::cli::commands::open_store;
use crate::cli::parser::Commands;
use crate::config::Config;
use crate::core::calculator::worked_minutes;
use crate::core::calculator::wage::record_wage;
use crate::errors::{AppError, AppResult};
use crate::utils::date::{self, weekday_str};
use crate::utils::formatting::{label_or_dash, wage_or_dash};
use crate::utils::mins2readable;
use crate::utils::table::{Column, Table};
use crate::utils::time::format_time;

pub fn handle(cmd: &Commands, cfg: &Config) -> AppResult<()> {
    if let Commands::List { period } = cmd {
        let (start, end) = match period {
            Some(p) => date::bounds_from_period(p).map_err(AppError::InvalidDate)?,
            None => date::current_month_bounds(),
        };

        let (_, store) = open_store(cfg)?;
        let records = store.range(start, end);

        if records.is_empty() {
            println!("No records in the selected period.");
            return Ok(());
        }

        let rules = cfg.rules();
        let mut table = Table::new(vec![
            Column::left("DATE", 10),
            Column::left("DAY", 3),
            Column::left("IN", 5),
            Column::left("OUT", 5),
            Column::right("BREAK", 5),
            Column::right("WORKED", 6),
            Column::right("WAGE", 10),
            Column::left("LOCATION", 12),
            Column::left("PROJECT", 12),
        ]);

        for r in records {
            let worked = worked_minutes(r, &rules).minutes;
            table.add_row(vec![
                r.date.to_string(),
                weekday_str(r.date).to_string(),
                r.clock_in.map(format_time).unwrap_or_else(|| "--:--".into()),
                r.clock_out.map(format_time).unwrap_or_else(|| "--:--".into()),
                r.break_minutes.to_string(),
                mins2readable(worked, false, true),
                wage_or_dash(record_wage(r, worked)),
                label_or_dash(&r.location).to_string(),
                label_or_dash(&r.project).to_string(),
            ]);
        }

        print!("{}", table.render());
    }
    Ok(())
}
