//! Core data types: parsed messages and the aggregated statistics snapshot

use chrono::{Datelike, NaiveDate};
use serde::ser::{Serialize, SerializeMap, Serializer};
use std::collections::{BTreeMap, HashMap, HashSet};

use crate::core::clock::Timestamp;
use crate::core::superlatives::Superlatives;

/// One transcript line that matched the grammar
#[derive(Debug, Clone, PartialEq, Eq)]
pub(crate) struct Message {
    /// Raw `DD.MM.YYYY, HH:MM` field, parsed lazily
    pub(crate) timestamp_text: String,
    pub(crate) user: String,
    pub(crate) text: String,
}

/// Text length in UTF-16 code units, so astral-plane emoji count twice
pub(crate) fn text_length(text: &str) -> usize {
    text.encode_utf16().count()
}

/// Round to one decimal place
pub(crate) fn round_one_decimal(value: f64) -> f64 {
    (value * 10.0).round() / 10.0
}

/// Symbol counts, iterated in first-insertion order
#[derive(Debug, Default, Clone, PartialEq, Eq)]
pub(crate) struct Histogram {
    entries: Vec<(String, u64)>,
    index: HashMap<String, usize>,
}

impl Histogram {
    pub(crate) fn add(&mut self, key: &str) {
        match self.index.get(key) {
            Some(&i) => self.entries[i].1 += 1,
            None => {
                self.index.insert(key.to_string(), self.entries.len());
                self.entries.push((key.to_string(), 1));
            }
        }
    }

    #[cfg(test)]
    pub(crate) fn get(&self, key: &str) -> u64 {
        self.index.get(key).map_or(0, |&i| self.entries[i].1)
    }

    pub(crate) fn len(&self) -> usize {
        self.entries.len()
    }

    pub(crate) fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub(crate) fn iter(&self) -> impl Iterator<Item = (&str, u64)> {
        self.entries.iter().map(|(k, v)| (k.as_str(), *v))
    }

    /// Highest counts first; equal counts keep insertion order
    pub(crate) fn top(&self, n: usize) -> Vec<(&str, u64)> {
        let mut sorted: Vec<(&str, u64)> = self.iter().collect();
        sorted.sort_by(|a, b| b.1.cmp(&a.1));
        sorted.truncate(n);
        sorted
    }
}

impl Serialize for Histogram {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let mut map = serializer.serialize_map(Some(self.len()))?;
        for (key, count) in self.iter() {
            map.serialize_entry(key, &count)?;
        }
        map.end()
    }
}

/// Per-user accumulated statistics
#[derive(Debug, Default, Clone, PartialEq)]
pub(crate) struct UserStats {
    pub(crate) name: String,
    pub(crate) message_count: u64,
    pub(crate) messages: Vec<Message>,
    pub(crate) emoji_count: u64,
    pub(crate) word_count: u64,
    /// Unicode emoji and ASCII emoticons together
    pub(crate) emoticon_histogram: Histogram,
    pub(crate) link_domain_histogram: Histogram,
    pub(crate) vocabulary: HashSet<String>,
    /// Messages sent between 00:00 and 06:59
    pub(crate) night_messages: u64,
    /// Messages sent between 08:00 and 11:59
    pub(crate) early_messages: u64,
    /// Messages longer than 100 UTF-16 units
    pub(crate) long_messages: u64,
    pub(crate) conversations_started: u64,
    pub(crate) conversations_ended: u64,
    pub(crate) response_total_minutes: i64,
    pub(crate) response_count: u64,
    /// Message index of the user's first conversation start
    pub(crate) first_start_at: Option<usize>,
    /// Message index of the user's first conversation end
    pub(crate) first_end_at: Option<usize>,
    /// Message index of the user's first response
    pub(crate) first_response_at: Option<usize>,
}

impl UserStats {
    fn new(name: &str) -> Self {
        UserStats {
            name: name.to_string(),
            ..Default::default()
        }
    }

    pub(crate) fn average_response_minutes(&self) -> Option<f64> {
        if self.response_count == 0 {
            return None;
        }
        Some(self.response_total_minutes as f64 / self.response_count as f64)
    }

    /// Mean message length in UTF-16 units
    pub(crate) fn average_message_length(&self) -> Option<f64> {
        if self.messages.is_empty() {
            return None;
        }
        let units: usize = self.messages.iter().map(|m| text_length(&m.text)).sum();
        Some(round_one_decimal(units as f64 / self.messages.len() as f64))
    }

    /// Messages per word; flags users who send many short messages
    pub(crate) fn messages_per_word(&self) -> f64 {
        self.message_count as f64 / self.word_count.max(1) as f64
    }
}

/// User arena in first-seen order with a name index
#[derive(Debug, Default, Clone, PartialEq)]
pub(crate) struct Users {
    stats: Vec<UserStats>,
    index: HashMap<String, usize>,
}

impl Users {
    pub(crate) fn get_or_create(&mut self, name: &str) -> &mut UserStats {
        let i = match self.index.get(name) {
            Some(&i) => i,
            None => {
                let i = self.stats.len();
                self.index.insert(name.to_string(), i);
                self.stats.push(UserStats::new(name));
                i
            }
        };
        &mut self.stats[i]
    }

    pub(crate) fn get(&self, name: &str) -> Option<&UserStats> {
        self.index.get(name).map(|&i| &self.stats[i])
    }

    pub(crate) fn iter(&self) -> std::slice::Iter<'_, UserStats> {
        self.stats.iter()
    }

    pub(crate) fn len(&self) -> usize {
        self.stats.len()
    }

    pub(crate) fn is_empty(&self) -> bool {
        self.stats.is_empty()
    }
}

/// Time-bucketed message counts for charting
#[derive(Debug, Clone, PartialEq, Eq)]
pub(crate) struct Activity {
    pub(crate) per_hour: [u64; 24],
    /// Sunday first
    pub(crate) per_weekday: [u64; 7],
    pub(crate) per_date: BTreeMap<NaiveDate, u64>,
}

impl Default for Activity {
    fn default() -> Self {
        Activity {
            per_hour: [0; 24],
            per_weekday: [0; 7],
            per_date: BTreeMap::new(),
        }
    }
}

impl Activity {
    pub(crate) fn record(&mut self, timestamp: &Timestamp) {
        self.per_hour[timestamp.hour() as usize] += 1;
        self.per_weekday[timestamp.date.weekday().num_days_from_sunday() as usize] += 1;
        *self.per_date.entry(timestamp.date).or_default() += 1;
    }
}

/// A user's share of all messages
#[derive(Debug, Clone, PartialEq)]
pub(crate) struct AuthorShare<'a> {
    pub(crate) user: &'a str,
    pub(crate) messages: u64,
    pub(crate) percentage: f64,
}

/// Statistics for one analyzed transcript
#[derive(Debug, Default, Clone, PartialEq)]
pub(crate) struct ChatStatistics {
    pub(crate) total_messages: u64,
    pub(crate) total_users: usize,
    /// Inclusive day count between the first and last message dates
    pub(crate) days_span: i64,
    pub(crate) average_messages_per_day: f64,
    pub(crate) emoji_count: u64,
    pub(crate) word_count: u64,
    pub(crate) vocabulary: HashSet<String>,
    pub(crate) emoticon_histogram: Histogram,
    pub(crate) link_domain_histogram: Histogram,
    pub(crate) superlatives: Superlatives,
    pub(crate) users: Users,
    pub(crate) activity: Activity,
    /// Messages dropped for a malformed timestamp
    pub(crate) skipped_messages: u64,
}

impl ChatStatistics {
    pub(crate) fn vocabulary_size(&self) -> usize {
        self.vocabulary.len()
    }

    /// Percentage of all messages sent by `user`, one decimal
    pub(crate) fn message_share(&self, user: &str) -> Option<f64> {
        let stats = self.users.get(user)?;
        if self.total_messages == 0 {
            return None;
        }
        Some(round_one_decimal(
            stats.message_count as f64 / self.total_messages as f64 * 100.0,
        ))
    }

    /// Users by message count, descending; ties keep first-seen order
    pub(crate) fn author_shares(&self) -> Vec<AuthorShare<'_>> {
        let mut shares: Vec<AuthorShare<'_>> = self
            .users
            .iter()
            .map(|u| AuthorShare {
                user: &u.name,
                messages: u.message_count,
                percentage: self.message_share(&u.name).unwrap_or(0.0),
            })
            .collect();
        shares.sort_by(|a, b| b.messages.cmp(&a.messages));
        shares
    }
}
