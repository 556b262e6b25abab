//! Token extraction from message text: emoji, emoticons, links and words

use regex::Regex;
use std::sync::LazyLock;
use url::Url;

use crate::utils::debug_enabled;

static EMOJI: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(
        r"[\x{1F600}-\x{1F64F}\x{1F300}-\x{1F5FF}\x{1F680}-\x{1F6FF}\x{1F1E0}-\x{1F1FF}\x{2600}-\x{26FF}\x{2700}-\x{27BF}]",
    )
    .expect("valid emoji pattern")
});

static EMOTICON: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r":\)|:\(|:D|:P").expect("valid emoticon pattern"));

static LINK: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"https?://\S+").expect("valid link pattern"));

/// Single emoji code points from the common emoji blocks
pub(crate) fn emojis(text: &str) -> impl Iterator<Item = &str> {
    EMOJI.find_iter(text).map(|m| m.as_str())
}

/// ASCII emoticons `:)`, `:(`, `:D`, `:P`
pub(crate) fn emoticons(text: &str) -> impl Iterator<Item = &str> {
    EMOTICON.find_iter(text).map(|m| m.as_str())
}

/// Hostnames of every `http(s)://` link; links without a host are skipped
pub(crate) fn link_domains(text: &str) -> Vec<String> {
    LINK.find_iter(text)
        .filter_map(|m| match Url::parse(m.as_str()) {
            Ok(url) => url.host_str().map(str::to_string),
            Err(err) => {
                if debug_enabled() {
                    eprintln!("[DEBUG] Skipping link {}: {}", m.as_str(), err);
                }
                None
            }
        })
        .collect()
}

/// Lowercased whitespace-delimited tokens
pub(crate) fn words(text: &str) -> Vec<String> {
    text.to_lowercase()
        .split_whitespace()
        .map(str::to_string)
        .collect()
}
