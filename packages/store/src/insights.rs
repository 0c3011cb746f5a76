//! # Derived analytics for the dashboard charts
//!
//! Pure functions from the current entry list to chart input. Nothing is
//! cached: callers recompute from whatever list they hold.
//!
//! - [`mood_trend`] maps each entry to one [`MoodTrendPoint`], keeping fetch order.
//! - [`word_frequency`] counts words across all entries and returns the
//!   [`TOP_WORDS`] most frequent ones.
//!
//! ## Tokenization
//!
//! Text is lowercased, every character that is neither alphabetic nor
//! whitespace is dropped, and the remainder is split on whitespace. Tokens of
//! two characters or fewer and tokens in the stop-word set are discarded.
//!
//! ## Ordering
//!
//! Words are sorted by descending count. Words with equal counts keep the
//! order in which they were first seen, scanning entries in list order.

use std::collections::{HashMap, HashSet};
use std::fmt::Display;
use std::sync::OnceLock;

use chrono::{Local, TimeZone};

use crate::models::{DiaryEntry, MoodTrendPoint, WordFrequency};

/// Maximum number of words returned by [`word_frequency`].
pub const TOP_WORDS: usize = 50;

/// Date format used for trend labels (`3/14/2024`).
pub const TREND_DATE_FORMAT: &str = "%-m/%-d/%Y";

const STOP_WORDS: &[&str] = &[
    "about", "above", "after", "again", "against", "all", "also", "and", "any", "are", "aren",
    "because", "been", "before", "being", "below", "between", "both", "but", "can", "cant",
    "could", "did", "didnt", "does", "doesnt", "doing", "dont", "down", "during", "each", "few",
    "for", "from", "further", "had", "has", "have", "having", "her", "here", "hers", "herself",
    "him", "himself", "his", "how", "im", "into", "isnt", "its", "itself", "ive", "just", "more",
    "most", "myself", "nor", "not", "now", "off", "once", "only", "other", "our", "ours",
    "ourselves", "out", "over", "own", "same", "she", "should", "some", "such", "than", "that",
    "the", "their", "theirs", "them", "themselves", "then", "there", "these", "they", "this",
    "those", "through", "too", "under", "until", "very", "was", "wasnt", "were", "what", "when",
    "where", "which", "while", "who", "whom", "why", "will", "with", "would", "you", "your",
    "yours", "yourself", "yourselves",
];

fn stop_words() -> &'static HashSet<&'static str> {
    static SET: OnceLock<HashSet<&'static str>> = OnceLock::new();
    SET.get_or_init(|| STOP_WORDS.iter().copied().collect())
}

pub fn is_stop_word(word: &str) -> bool {
    stop_words().contains(word)
}

/// Split text into countable words.
pub fn tokenize(text: &str) -> Vec<String> {
    let cleaned: String = text
        .to_lowercase()
        .chars()
        .filter(|c| c.is_alphabetic() || c.is_whitespace())
        .collect();

    cleaned
        .split_whitespace()
        .filter(|word| word.chars().count() > 2 && !is_stop_word(word))
        .map(str::to_string)
        .collect()
}

/// Top [`TOP_WORDS`] words across all entries.
pub fn word_frequency(entries: &[DiaryEntry]) -> Vec<WordFrequency> {
    word_frequency_top(entries, TOP_WORDS)
}

/// Top `limit` words across all entries, never more than [`TOP_WORDS`].
pub fn word_frequency_top(entries: &[DiaryEntry], limit: usize) -> Vec<WordFrequency> {
    let mut index: HashMap<String, usize> = HashMap::new();
    let mut counts: Vec<WordFrequency> = Vec::new();

    for entry in entries {
        for word in tokenize(&entry.text_entry) {
            match index.get(&word) {
                Some(&i) => counts[i].value += 1,
                None => {
                    index.insert(word.clone(), counts.len());
                    counts.push(WordFrequency {
                        text: word,
                        value: 1,
                    });
                }
            }
        }
    }

    // sort_by is stable, so first-seen order survives among equal counts
    counts.sort_by(|a, b| b.value.cmp(&a.value));
    counts.truncate(limit.min(TOP_WORDS));
    counts
}

/// Mood trend labelled with dates in the local timezone.
pub fn mood_trend(entries: &[DiaryEntry]) -> Vec<MoodTrendPoint> {
    mood_trend_in(entries, &Local)
}

/// Mood trend labelled with dates in `tz`.
pub fn mood_trend_in<Tz>(entries: &[DiaryEntry], tz: &Tz) -> Vec<MoodTrendPoint>
where
    Tz: TimeZone,
    Tz::Offset: Display,
{
    entries
        .iter()
        .map(|entry| MoodTrendPoint {
            date: entry
                .created_at
                .with_timezone(tz)
                .format(TREND_DATE_FORMAT)
                .to_string(),
            sentiment_score: entry.sentiment_score,
        })
        .collect()
}
