//! Statistics aggregation over a parsed transcript
//!
//! One fold over the messages builds the per-user and global counters; the
//! conversation-boundary and response-time scans each add one more linear
//! pass since they look at neighbouring messages.

use crate::core::clock::Timestamp;
use crate::core::extract;
use crate::core::superlatives::Superlatives;
use crate::core::types::{ChatStatistics, Message, Users, round_one_decimal, text_length};
use crate::error::FormatError;
use crate::utils::debug_enabled;

/// Messages longer than this many UTF-16 units count as long-winded
const LONG_MESSAGE_UNITS: usize = 100;

/// What to do with a message whose timestamp does not parse
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub(crate) enum TimestampPolicy {
    /// Abort aggregation with the first `FormatError`
    #[default]
    Strict,
    /// Drop the message and count it in `skipped_messages`
    Skip,
}

#[derive(Debug, Default, Clone, Copy)]
pub(crate) struct Aggregator {
    policy: TimestampPolicy,
}

/// A message with its timestamp already parsed
struct Entry {
    message: Message,
    timestamp: Timestamp,
}

impl Aggregator {
    pub(crate) fn new() -> Self {
        Self::default()
    }

    pub(crate) fn timestamp_policy(mut self, policy: TimestampPolicy) -> Self {
        self.policy = policy;
        self
    }

    /// Aggregate messages in transcript order (consumes them into the user records)
    pub(crate) fn run(&self, messages: Vec<Message>) -> Result<ChatStatistics, FormatError> {
        let (entries, skipped) = self.resolve_timestamps(messages)?;

        let mut stats = ChatStatistics {
            skipped_messages: skipped,
            ..Default::default()
        };

        if let (Some(first), Some(last)) = (entries.first(), entries.last()) {
            stats.days_span = (last.timestamp.date - first.timestamp.date).num_days() + 1;
        }

        for entry in &entries {
            fold_message(&mut stats, entry);
        }
        count_conversation_boundaries(&entries, &mut stats.users);
        accumulate_response_times(&entries, &mut stats.users);

        for entry in entries {
            stats
                .users
                .get_or_create(&entry.message.user)
                .messages
                .push(entry.message);
        }

        stats.total_users = stats.users.len();
        if stats.days_span > 0 {
            stats.average_messages_per_day =
                round_one_decimal(stats.total_messages as f64 / stats.days_span as f64);
        }
        stats.superlatives = Superlatives::derive(&stats.users);
        Ok(stats)
    }

    fn resolve_timestamps(
        &self,
        messages: Vec<Message>,
    ) -> Result<(Vec<Entry>, u64), FormatError> {
        let mut entries = Vec::with_capacity(messages.len());
        let mut skipped = 0;
        for message in messages {
            match Timestamp::parse(&message.timestamp_text) {
                Ok(timestamp) => entries.push(Entry { message, timestamp }),
                Err(err) => match self.policy {
                    TimestampPolicy::Strict => return Err(err),
                    TimestampPolicy::Skip => {
                        if debug_enabled() {
                            eprintln!(
                                "[DEBUG] Skipping message from {}: {:?} is not a valid timestamp",
                                message.user,
                                err.input()
                            );
                        }
                        skipped += 1;
                    }
                },
            }
        }
        Ok((entries, skipped))
    }
}

/// Aggregate with the strict timestamp policy
#[cfg(test)]
pub(crate) fn aggregate(messages: Vec<Message>) -> Result<ChatStatistics, FormatError> {
    Aggregator::new().run(messages)
}

fn fold_message(stats: &mut ChatStatistics, entry: &Entry) {
    let text = entry.message.text.as_str();
    let hour = entry.timestamp.hour();

    stats.total_messages += 1;
    stats.activity.record(&entry.timestamp);

    let user = stats.users.get_or_create(&entry.message.user);
    user.message_count += 1;
    if hour <= 6 {
        user.night_messages += 1;
    }
    if (8..12).contains(&hour) {
        user.early_messages += 1;
    }
    if text_length(text) > LONG_MESSAGE_UNITS {
        user.long_messages += 1;
    }

    for emoji in extract::emojis(text) {
        user.emoji_count += 1;
        user.emoticon_histogram.add(emoji);
        stats.emoji_count += 1;
        stats.emoticon_histogram.add(emoji);
    }

    for domain in extract::link_domains(text) {
        user.link_domain_histogram.add(&domain);
        stats.link_domain_histogram.add(&domain);
    }

    let words = extract::words(text);
    user.word_count += words.len() as u64;
    stats.word_count += words.len() as u64;
    for word in words {
        user.vocabulary.insert(word.clone());
        stats.vocabulary.insert(word);
    }

    for emoticon in extract::emoticons(text) {
        user.emoticon_histogram.add(emoticon);
        stats.emoticon_histogram.add(emoticon);
    }
}

/// A message starts a conversation when it is the first one or its day of
/// month differs from the previous message's; ending is symmetric with the
/// next message. Only the day of month is compared, so the same day number in
/// consecutive months counts as one conversation.
fn count_conversation_boundaries(entries: &[Entry], users: &mut Users) {
    for (i, entry) in entries.iter().enumerate() {
        let day = entry.timestamp.day_of_month();
        let starts = i == 0 || entries[i - 1].timestamp.day_of_month() != day;
        let ends = i + 1 == entries.len() || entries[i + 1].timestamp.day_of_month() != day;
        if !starts && !ends {
            continue;
        }
        let user = users.get_or_create(&entry.message.user);
        if starts {
            user.conversations_started += 1;
            user.first_start_at.get_or_insert(i);
        }
        if ends {
            user.conversations_ended += 1;
            user.first_end_at.get_or_insert(i);
        }
    }
}

/// Response time is the time-of-day difference to the previous message from a
/// different sender. Dates are ignored, so replies across midnight go negative.
fn accumulate_response_times(entries: &[Entry], users: &mut Users) {
    for (i, pair) in entries.windows(2).enumerate() {
        let (prev, curr) = (&pair[0], &pair[1]);
        if prev.message.user == curr.message.user {
            continue;
        }
        let minutes = i64::from(curr.timestamp.minutes) - i64::from(prev.timestamp.minutes);
        let user = users.get_or_create(&curr.message.user);
        user.response_total_minutes += minutes;
        user.response_count += 1;
        user.first_response_at.get_or_insert(i + 1);
    }
}
