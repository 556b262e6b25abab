use comfy_table::{Cell, Color};

use crate::core::ChatStatistics;
use crate::output::format::{
    ViewOptions, create_styled_table, format_number, header_cell, right_cell,
};

const WEEKDAYS: [&str; 7] = [
    "Sunday",
    "Monday",
    "Tuesday",
    "Wednesday",
    "Thursday",
    "Friday",
    "Saturday",
];

const BAR_WIDTH: u64 = 30;

/// Horizontal bar scaled against the busiest bucket
fn bar(count: u64, max: u64) -> String {
    if max == 0 {
        return String::new();
    }
    let width = (count * BAR_WIDTH).div_ceil(max);
    "█".repeat(width as usize)
}

fn print_bucket_table(
    label: &str,
    rows: impl Iterator<Item = (String, u64)> + Clone,
    opts: ViewOptions<'_>,
) {
    let c = opts.use_color;
    let max = rows.clone().map(|(_, n)| n).max().unwrap_or(0);
    let bar_color = if c { Some(Color::Cyan) } else { None };

    let mut table = create_styled_table();
    let mut header = vec![header_cell(label, c), header_cell("Messages", c)];
    if !opts.compact {
        header.push(header_cell("", c));
    }
    table.set_header(header);
    for (key, count) in rows {
        let mut row = vec![Cell::new(key), right_cell(&format_number(count), None, false)];
        if !opts.compact {
            let mut cell = Cell::new(bar(count, max));
            if let Some(color) = bar_color {
                cell = cell.fg(color);
            }
            row.push(cell);
        }
        table.add_row(row);
    }
    println!("{table}");
}

pub(crate) fn print_activity_tables(stats: &ChatStatistics, opts: ViewOptions<'_>) {
    let activity = &stats.activity;

    print_bucket_table(
        "Hour",
        activity
            .per_hour
            .iter()
            .enumerate()
            .map(|(hour, n)| (format!("{hour:02}:00"), *n)),
        opts,
    );
    print_bucket_table(
        "Weekday",
        WEEKDAYS
            .iter()
            .zip(activity.per_weekday.iter())
            .map(|(day, n)| (day.to_string(), *n)),
        opts,
    );
    print_bucket_table(
        "Date",
        activity
            .per_date
            .iter()
            .map(|(date, n)| (date.format("%Y-%m-%d").to_string(), *n)),
        opts,
    );

    let c = opts.use_color;
    let mut authors = create_styled_table();
    authors.set_header(vec![
        header_cell("Author", c),
        header_cell("Messages", c),
        header_cell("Share", c),
    ]);
    for share in stats.author_shares() {
        authors.add_row(vec![
            Cell::new(share.user),
            right_cell(&format_number(share.messages), None, false),
            right_cell(&format!("{:.1}%", share.percentage), None, false),
        ]);
    }
    println!("{authors}");
}

pub(crate) fn activity_json(stats: &ChatStatistics) -> serde_json::Value {
    let activity = &stats.activity;
    let per_weekday: Vec<serde_json::Value> = WEEKDAYS
        .iter()
        .zip(activity.per_weekday.iter())
        .map(|(day, n)| serde_json::json!({ "day": day, "messages": n }))
        .collect();
    let per_date: Vec<serde_json::Value> = activity
        .per_date
        .iter()
        .map(|(date, n)| {
            serde_json::json!({ "date": date.format("%Y-%m-%d").to_string(), "messages": n })
        })
        .collect();
    let by_author: Vec<serde_json::Value> = stats
        .author_shares()
        .into_iter()
        .map(|s| {
            serde_json::json!({
                "user": s.user,
                "messages": s.messages,
                "percentage": s.percentage,
            })
        })
        .collect();

    serde_json::json!({
        "per_hour": activity.per_hour,
        "per_weekday": per_weekday,
        "per_date": per_date,
        "by_author": by_author,
    })
}
