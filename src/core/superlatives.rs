//! Superlatives: the single user maximizing (or minimizing) a per-user metric
//!
//! Every scan replaces the running best only on a strictly better value, so a
//! metric that never leaves its starting bound (0, or infinity for the fastest
//! responder) leaves the title unset. Most scans walk users in first-seen
//! order and ties go to the earlier user. Starter and wrecker walk users in
//! the order of their first start or end event. A tied best response average
//! leaves the responder titles unset.

use serde::Serialize;

use crate::core::types::{UserStats, Users};

#[derive(Debug, Default, Clone, PartialEq, Eq, Serialize)]
pub(crate) struct Superlatives {
    pub(crate) most_talkative: Option<String>,
    pub(crate) night_owl: Option<String>,
    pub(crate) early_bird: Option<String>,
    pub(crate) conversation_wrecker: Option<String>,
    pub(crate) conversation_starter: Option<String>,
    pub(crate) professor: Option<String>,
    pub(crate) long_winded: Option<String>,
    pub(crate) slowest_responder: Option<String>,
    pub(crate) fastest_responder: Option<String>,
    pub(crate) emoji_lover: Option<String>,
    pub(crate) annoying: Option<String>,
}

impl Superlatives {
    pub(crate) fn derive(users: &Users) -> Self {
        Superlatives {
            most_talkative: leader(users.iter(), 0, |u| Some(u.message_count)),
            night_owl: leader(users.iter(), 0, |u| Some(u.night_messages)),
            early_bird: leader(users.iter(), 0, |u| Some(u.early_messages)),
            conversation_wrecker: leader(
                in_event_order(users, |u| u.first_end_at),
                0,
                |u| Some(u.conversations_ended),
            ),
            conversation_starter: leader(
                in_event_order(users, |u| u.first_start_at),
                0,
                |u| Some(u.conversations_started),
            ),
            professor: leader(users.iter(), 0, |u| Some(u.word_count)),
            long_winded: leader(users.iter(), 0, |u| Some(u.long_messages)),
            slowest_responder: sole_extreme(
                in_event_order(users, |u| u.first_response_at),
                0.0,
                |value, best| value > best,
            ),
            fastest_responder: sole_extreme(
                in_event_order(users, |u| u.first_response_at),
                f64::INFINITY,
                |value, best| value < best,
            ),
            emoji_lover: leader(users.iter(), 0, |u| Some(u.emoji_count)),
            annoying: leader(users.iter(), 0.0, |u| Some(u.messages_per_word())),
        }
    }

    /// (label, holder) pairs in display order
    pub(crate) fn titles(&self) -> [(&'static str, Option<&str>); 11] {
        [
            ("Most talkative", self.most_talkative.as_deref()),
            ("Night owl", self.night_owl.as_deref()),
            ("Early bird", self.early_bird.as_deref()),
            ("Conversation wrecker", self.conversation_wrecker.as_deref()),
            ("Conversation starter", self.conversation_starter.as_deref()),
            ("Professor", self.professor.as_deref()),
            ("Long-winded", self.long_winded.as_deref()),
            ("Slowest responder", self.slowest_responder.as_deref()),
            ("Fastest responder", self.fastest_responder.as_deref()),
            ("Emoji lover", self.emoji_lover.as_deref()),
            ("Most repetitive", self.annoying.as_deref()),
        ]
    }
}

/// Users that had an event, ordered by when they first had it
fn in_event_order<F>(users: &Users, first_at: F) -> Vec<&UserStats>
where
    F: Fn(&UserStats) -> Option<usize>,
{
    let mut ordered: Vec<&UserStats> = users
        .iter()
        .filter(|u| first_at(*u).is_some())
        .collect();
    ordered.sort_by_key(|u| first_at(*u));
    ordered
}

fn leader<'a, I, T, F>(users: I, floor: T, metric: F) -> Option<String>
where
    I: IntoIterator<Item = &'a UserStats>,
    T: PartialOrd + Copy,
    F: Fn(&UserStats) -> Option<T>,
{
    let mut best = floor;
    let mut winner = None;
    for user in users {
        if let Some(value) = metric(user)
            && value > best
        {
            best = value;
            winner = Some(user.name.clone());
        }
    }
    winner
}

/// Extreme average response time, unset when several users share it
fn sole_extreme<F>(users: Vec<&UserStats>, bound: f64, better: F) -> Option<String>
where
    F: Fn(f64, f64) -> bool,
{
    let mut best = bound;
    let mut winner: Option<&UserStats> = None;
    let mut tied = false;
    for user in users {
        let Some(value) = user.average_response_minutes() else {
            continue;
        };
        if better(value, best) {
            best = value;
            winner = Some(user);
            tied = false;
        } else if winner.is_some() && value == best {
            tied = true;
        }
    }
    if tied {
        return None;
    }
    winner.map(|u| u.name.clone())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_users_leave_everything_unset() {
        assert_eq!(Superlatives::derive(&Users::default()), Superlatives::default());
    }

    #[test]
    fn tie_goes_to_first_seen_user() {
        let mut users = Users::default();
        users.get_or_create("Alice").message_count = 2;
        users.get_or_create("Bob").message_count = 2;
        let s = Superlatives::derive(&users);
        assert_eq!(s.most_talkative.as_deref(), Some("Alice"));
    }

    #[test]
    fn zero_metric_leaves_title_unset() {
        let mut users = Users::default();
        let alice = users.get_or_create("Alice");
        alice.message_count = 1;
        alice.word_count = 1;
        let s = Superlatives::derive(&users);
        assert_eq!(s.night_owl, None);
        assert_eq!(s.emoji_lover, None);
        assert_eq!(s.long_winded, None);
        assert_eq!(s.slowest_responder, None);
        assert_eq!(s.fastest_responder, None);
        assert_eq!(s.annoying.as_deref(), Some("Alice"));
    }

    #[test]
    fn responders_use_average_minutes() {
        let mut users = Users::default();
        let alice = users.get_or_create("Alice");
        alice.response_total_minutes = 30;
        alice.response_count = 3;
        alice.first_response_at = Some(1);
        let bob = users.get_or_create("Bob");
        bob.response_total_minutes = 4;
        bob.response_count = 2;
        bob.first_response_at = Some(2);
        let s = Superlatives::derive(&users);
        assert_eq!(s.slowest_responder.as_deref(), Some("Alice"));
        assert_eq!(s.fastest_responder.as_deref(), Some("Bob"));
    }

    #[test]
    fn negative_averages_never_make_slowest() {
        let mut users = Users::default();
        let owl = users.get_or_create("Night");
        owl.response_total_minutes = -1438;
        owl.response_count = 1;
        owl.first_response_at = Some(1);
        let s = Superlatives::derive(&users);
        assert_eq!(s.slowest_responder, None);
        assert_eq!(s.fastest_responder.as_deref(), Some("Night"));
    }

    #[test]
    fn tied_response_averages_leave_responders_unset() {
        let mut users = Users::default();
        for (name, at) in [("X", 2), ("Y", 1)] {
            let user = users.get_or_create(name);
            user.response_total_minutes = 10;
            user.response_count = 2;
            user.first_response_at = Some(at);
        }
        let s = Superlatives::derive(&users);
        assert_eq!(s.slowest_responder, None);
        assert_eq!(s.fastest_responder, None);
    }

    #[test]
    fn tie_below_the_best_average_keeps_the_winner() {
        let mut users = Users::default();
        for (name, total, at) in [("A", 4, 1), ("B", 4, 2), ("C", 9, 3)] {
            let user = users.get_or_create(name);
            user.response_total_minutes = total;
            user.response_count = 1;
            user.first_response_at = Some(at);
        }
        let s = Superlatives::derive(&users);
        assert_eq!(s.slowest_responder.as_deref(), Some("C"));
        assert_eq!(s.fastest_responder, None);
    }

    #[test]
    fn starter_and_wrecker_ties_follow_first_event_order() {
        let mut users = Users::default();
        let first_seen = users.get_or_create("First");
        first_seen.conversations_started = 1;
        first_seen.first_start_at = Some(5);
        first_seen.conversations_ended = 1;
        first_seen.first_end_at = Some(3);
        let later = users.get_or_create("Later");
        later.conversations_started = 1;
        later.first_start_at = Some(2);
        later.conversations_ended = 1;
        later.first_end_at = Some(4);
        let s = Superlatives::derive(&users);
        assert_eq!(s.conversation_starter.as_deref(), Some("Later"));
        assert_eq!(s.conversation_wrecker.as_deref(), Some("First"));
    }

    #[test]
    fn annoying_prefers_more_messages_per_word() {
        let mut users = Users::default();
        let verbose = users.get_or_create("Verbose");
        verbose.message_count = 2;
        verbose.word_count = 40;
        let terse = users.get_or_create("Terse");
        terse.message_count = 5;
        terse.word_count = 5;
        let s = Superlatives::derive(&users);
        assert_eq!(s.annoying.as_deref(), Some("Terse"));
        assert_eq!(s.professor.as_deref(), Some("Verbose"));
    }

    #[test]
    fn titles_cover_all_eleven() {
        let s = Superlatives {
            night_owl: Some("Owl".to_string()),
            ..Default::default()
        };
        let titles = s.titles();
        assert_eq!(titles.len(), 11);
        assert_eq!(titles[1], ("Night owl", Some("Owl")));
        assert_eq!(titles[0].1, None);
    }
}
