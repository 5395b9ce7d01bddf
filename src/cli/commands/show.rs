use crate::config::Config;
use crate::core::calculator;
use crate::errors::AppResult;
use crate::models::TimePair;
use crate::utils::table::{Column, Table};
use crate::utils::time::{format_minutes, format_total_short};

fn field_cell(value: &str) -> String {
    if value.is_empty() {
        "--:--".to_string()
    } else {
        value.to_string()
    }
}

fn duration_cell(pair: &TimePair) -> String {
    match calculator::pair_minutes(pair) {
        Some(mins) => format_minutes(mins),
        None => "--:--".to_string(),
    }
}

/// Render the pair table produced by the current session state.
pub fn render(pairs: &[TimePair], last_recorded_date: Option<&str>) -> String {
    let mut table = Table::new(vec![
        Column::new("#", 3),
        Column::new("Start", 7),
        Column::new("End", 7),
        Column::new("Duration", 8),
    ]);

    for (i, pair) in pairs.iter().enumerate() {
        table.add_row(vec![
            (i + 1).to_string(),
            field_cell(&pair.start),
            field_cell(&pair.end),
            duration_cell(pair),
        ]);
    }

    let total = calculator::total_hours(pairs);
    let mut footer = format!("Total: {} h", format_total_short(total));
    if let Some(date) = last_recorded_date {
        footer.push_str(&format!("   (last recorded: {})", date));
    }
    table.set_footer(footer);

    table.render()
}

pub fn handle(cfg: &Config) -> AppResult<()> {
    let session = super::open_session(cfg)?;
    print!("{}", render(session.pairs(), session.last_recorded_date()));
    Ok(())
}
