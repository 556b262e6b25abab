use comfy_table::{Cell, Color};

use crate::core::{ChatStatistics, UserStats};
use crate::output::format::{
    ViewOptions, create_styled_table, format_number, format_top, header_cell, right_cell,
    styled_cell,
};

fn selected_users<'a>(
    stats: &'a ChatStatistics,
    user: Option<&'a str>,
) -> Vec<&'a UserStats> {
    match user {
        Some(name) => stats.users.get(name).into_iter().collect(),
        None => stats.users.iter().collect(),
    }
}

fn format_response(minutes: Option<f64>) -> String {
    minutes.map_or_else(|| "-".to_string(), |m| format!("{m:.1}m"))
}

pub(crate) fn print_users_table(stats: &ChatStatistics, opts: ViewOptions<'_>) {
    let c = opts.use_color;
    let mut table = create_styled_table();

    let mut header = vec![
        header_cell("User", c),
        header_cell("Messages", c),
        header_cell("Share", c),
        header_cell("Words", c),
        header_cell("Vocabulary", c),
        header_cell("Emoji", c),
    ];
    if !opts.compact {
        header.extend([
            header_cell("Avg reply", c),
            header_cell("Avg length", c),
            header_cell("Emoticons", c),
            header_cell("Links", c),
        ]);
    }
    table.set_header(header);

    let name_color = if c { Some(Color::Yellow) } else { None };
    for user in selected_users(stats, opts.user) {
        let share = stats.message_share(&user.name).unwrap_or(0.0);
        let mut row = vec![
            styled_cell(&user.name, name_color, false),
            right_cell(&format_number(user.message_count), None, false),
            right_cell(&format!("{share:.1}%"), None, false),
            right_cell(&format_number(user.word_count), None, false),
            right_cell(&format_number(user.vocabulary.len() as u64), None, false),
            right_cell(&format_number(user.emoji_count), None, false),
        ];
        if !opts.compact {
            row.extend([
                right_cell(&format_response(user.average_response_minutes()), None, false),
                right_cell(
                    &user
                        .average_message_length()
                        .map_or_else(|| "-".to_string(), |n| format!("{n:.1}")),
                    None,
                    false,
                ),
                Cell::new(format_top(&user.emoticon_histogram, opts.top, "-")),
                Cell::new(format_top(&user.link_domain_histogram, opts.top, "-")),
            ]);
        }
        table.add_row(row);
    }

    println!("{table}");
}

pub(crate) fn users_json(stats: &ChatStatistics, opts: ViewOptions<'_>) -> serde_json::Value {
    selected_users(stats, opts.user)
        .into_iter()
        .map(|u| {
            serde_json::json!({
                "user": u.name,
                "messages": u.message_count,
                "share": stats.message_share(&u.name),
                "words": u.word_count,
                "vocabulary": u.vocabulary.len(),
                "emoji_count": u.emoji_count,
                "night_messages": u.night_messages,
                "early_messages": u.early_messages,
                "long_messages": u.long_messages,
                "conversations_started": u.conversations_started,
                "conversations_ended": u.conversations_ended,
                "average_response_minutes": u.average_response_minutes(),
                "average_message_length": u.average_message_length(),
                "emoticons": u.emoticon_histogram,
                "link_domains": u.link_domain_histogram,
            })
        })
        .collect()
}
