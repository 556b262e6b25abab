use comfy_table::{Cell, Color};

use crate::core::{ChatStatistics, Histogram};
use crate::output::format::{
    ViewOptions, create_styled_table, format_number, format_top, header_cell, holder_text,
    right_cell, styled_cell,
};

/// Histograms of the selected user, or of the whole chat
fn selected_histograms<'a>(
    stats: &'a ChatStatistics,
    user: Option<&str>,
) -> (&'a Histogram, &'a Histogram) {
    match user.and_then(|name| stats.users.get(name)) {
        Some(u) => (&u.emoticon_histogram, &u.link_domain_histogram),
        None => (&stats.emoticon_histogram, &stats.link_domain_histogram),
    }
}

/// Extra context shown next to a few superlatives
fn superlative_detail(stats: &ChatStatistics, title: &str, holder: &str) -> String {
    match title {
        "Most talkative" => stats
            .message_share(holder)
            .map(|share| format!("{share:.1}%"))
            .unwrap_or_default(),
        "Emoji lover" => stats
            .users
            .get(holder)
            .map(|u| format!("{} emojis", format_number(u.emoji_count)))
            .unwrap_or_default(),
        _ => String::new(),
    }
}

pub(crate) fn print_summary_table(name: &str, stats: &ChatStatistics, opts: ViewOptions<'_>) {
    let c = opts.use_color;
    let value_color = if c { Some(Color::Green) } else { None };

    let mut totals = create_styled_table();
    totals.set_header(vec![header_cell("Chat", c), header_cell(name, c)]);
    let rows = [
        ("Messages", format_number(stats.total_messages)),
        ("Users", format_number(stats.total_users as u64)),
        ("Days", stats.days_span.to_string()),
        ("Messages per day", format!("{:.1}", stats.average_messages_per_day)),
        ("Words", format_number(stats.word_count)),
        ("Vocabulary", format_number(stats.vocabulary_size() as u64)),
        ("Emoji", format_number(stats.emoji_count)),
    ];
    for (label, value) in rows {
        totals.add_row(vec![Cell::new(label), right_cell(&value, value_color, false)]);
    }
    println!("{totals}");

    let mut titles = create_styled_table();
    let mut header = vec![header_cell("Superlative", c), header_cell("User", c)];
    if !opts.compact {
        header.push(header_cell("", c));
    }
    titles.set_header(header);
    for (title, holder) in stats.superlatives.titles() {
        let mut row = vec![
            Cell::new(title),
            styled_cell(&holder_text(holder), value_color, holder.is_some()),
        ];
        if !opts.compact {
            let detail = holder
                .map(|h| superlative_detail(stats, title, h))
                .unwrap_or_default();
            row.push(Cell::new(detail));
        }
        titles.add_row(row);
    }
    println!("{titles}");

    let (emoticons, links) = selected_histograms(stats, opts.user);
    let scope = opts.user.unwrap_or("All users");
    let mut favorites = create_styled_table();
    favorites.set_header(vec![header_cell("Favorites", c), header_cell(scope, c)]);
    favorites.add_row(vec![
        Cell::new("Most used emoticons"),
        Cell::new(format_top(emoticons, opts.top, "No emojis used")),
    ]);
    favorites.add_row(vec![
        Cell::new("Most sent links"),
        Cell::new(format_top(links, opts.top, "No links sent")),
    ]);
    println!("{favorites}");
}

fn top_json(histogram: &Histogram, n: usize) -> serde_json::Value {
    histogram
        .top(n)
        .into_iter()
        .map(|(key, count)| serde_json::json!({ "key": key, "count": count }))
        .collect()
}

pub(crate) fn summary_json(stats: &ChatStatistics, opts: ViewOptions<'_>) -> serde_json::Value {
    let (emoticons, links) = selected_histograms(stats, opts.user);
    let most_talkative_share = stats
        .superlatives
        .most_talkative
        .as_deref()
        .and_then(|u| stats.message_share(u));
    serde_json::json!({
        "total_messages": stats.total_messages,
        "total_users": stats.total_users,
        "days_span": stats.days_span,
        "average_messages_per_day": stats.average_messages_per_day,
        "word_count": stats.word_count,
        "vocabulary": stats.vocabulary_size(),
        "emoji_count": stats.emoji_count,
        "skipped_messages": stats.skipped_messages,
        "superlatives": stats.superlatives,
        "most_talkative_share": most_talkative_share,
        "user": opts.user,
        "emoticons": emoticons,
        "link_domains": links,
        "top_emoticons": top_json(emoticons, opts.top),
        "top_link_domains": top_json(links, opts.top),
    })
}
