//! `day`, `week`, `month` and `totals` summaries.

use crate::cli::commands::{date_or_today, open_store};
use crate::cli::parser::Commands;
use crate::config::Config;
use crate::core::Aggregator;
use crate::errors::{AppError, AppResult};
use crate::models::{GroupBy, GroupTotal, Wage};
use crate::ui::messages::{header, info, warnings};
use crate::utils::date::{bounds_from_period, parse_month_or_date, today, weekday_str};
use crate::utils::formatting::wage_or_dash;
use crate::utils::mins2readable;
use crate::utils::table::{Column, Table};
use chrono::NaiveDate;

fn print_totals(worked: i64, wage: Option<Wage>, partial_rate: bool) {
    println!("Worked: {} ({} min)", mins2readable(worked, false, true), worked);
    println!("Wage:   {}", wage_or_dash(wage));
    if partial_rate {
        info("Wage estimate based on partial data: some days have no hourly rate.");
    }
}

fn print_groups(group_by: GroupBy, groups: &[GroupTotal]) {
    let label = match group_by {
        GroupBy::Location => "LOCATION",
        GroupBy::Project => "PROJECT",
    };
    let mut table = Table::new(vec![
        Column::left(label, 20),
        Column::right("DAYS", 4),
        Column::right("WORKED", 7),
    ]);
    for g in groups {
        table.add_row(vec![
            g.key.clone(),
            g.days.to_string(),
            mins2readable(g.worked_minutes, false, true),
        ]);
    }
    print!("{}", table.render());
}

pub fn handle(cmd: &Commands, cfg: &Config) -> AppResult<()> {
    let rules = cfg.rules();

    match cmd {
        Commands::Day { date } => {
            let d = date_or_today(date)?;
            let (_, store) = open_store(cfg)?;
            let total = Aggregator::daily_total(&store, d, &rules);

            header(format!("{} {}", d, weekday_str(d)));
            print_totals(total.worked_minutes, total.wage, false);
            if total.overtime.overtime_minutes > 0 {
                println!(
                    "Regular: {} | Overtime: {}",
                    mins2readable(total.overtime.regular_minutes, false, true),
                    mins2readable(total.overtime.overtime_minutes, false, true)
                );
            }
            warnings(&total.warnings);
        }

        Commands::Week { date } => {
            let d = date_or_today(date)?;
            let (_, store) = open_store(cfg)?;
            let total = Aggregator::weekly_total(&store, d, &rules);

            header(format!("Week {} .. {}", total.start, total.end));
            let mut table = Table::new(vec![
                Column::left("DATE", 10),
                Column::left("DAY", 3),
                Column::right("WORKED", 6),
                Column::right("WAGE", 10),
            ]);
            for day in &total.daily_breakdown {
                table.add_row(vec![
                    day.date.to_string(),
                    weekday_str(day.date).to_string(),
                    mins2readable(day.worked_minutes, false, true),
                    wage_or_dash(day.wage),
                ]);
            }
            print!("{}", table.render());
            print_totals(total.worked_minutes, total.wage, total.partial_rate);
            warnings(&total.warnings);
        }

        Commands::Month { date, by } => {
            let d = match date {
                Some(s) => parse_month_or_date(s).ok_or_else(|| AppError::InvalidDate(s.clone()))?,
                None => today(),
            };
            let (_, store) = open_store(cfg)?;
            let total = Aggregator::monthly_total(&store, d, &rules);

            header(format!("Month {} .. {}", total.start, total.end));
            if let Some(group_by) = by {
                print_groups(
                    *group_by,
                    &Aggregator::monthly_breakdown(&store, d, *group_by, &rules),
                );
            }
            print_totals(total.worked_minutes, total.wage, total.partial_rate);
            warnings(&total.warnings);
        }

        Commands::Totals { by, period } => {
            let (start, end) = match period {
                Some(p) => bounds_from_period(p).map_err(AppError::InvalidDate)?,
                None => (NaiveDate::MIN, NaiveDate::MAX),
            };
            let (_, store) = open_store(cfg)?;
            let groups = Aggregator::breakdown(&store, start, end, *by, &rules);

            match period {
                Some(p) => header(format!("Totals {}", p.trim())),
                None => header("Totals (all time)"),
            }
            if groups.is_empty() {
                println!("No records in the selected period.");
                return Ok(());
            }
            print_groups(*by, &groups);
            let worked: i64 = groups.iter().map(|g| g.worked_minutes).sum();
            println!("Worked: {} ({} min)", mins2readable(worked, false, true), worked);
        }

        _ => {}
    }

    Ok(())
}
