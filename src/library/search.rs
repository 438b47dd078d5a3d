use super::Catalog;
use crate::domain::{Song, SongInfo};
use fuzzy_matcher::{FuzzyMatcher, skim::SkimMatcherV2};
use std::sync::Arc;
use unicode_normalization::{UnicodeNormalization, char::is_combining_mark};

pub const MATCH_THRESHOLD: i64 = 50;

/// Lowercase and strip diacritics so "Café" and "cafe" compare equal.
pub(crate) fn normalize(s: &str) -> String {
    s.nfkd()
        .filter(|c| !is_combining_mark(*c))
        .collect::<String>()
        .to_lowercase()
}

impl Catalog {
    /// Fuzzy title search. Results scoring above `threshold` are returned
    /// best match first; ties keep catalog order.
    pub fn search(&self, query: &str, threshold: i64) -> Vec<Arc<Song>> {
        let query = normalize(query.trim());
        if query.is_empty() {
            return Vec::new();
        }

        let matcher = SkimMatcherV2::default();

        let mut scored_songs: Vec<(Arc<Song>, i64)> = self
            .songs
            .values()
            .filter_map(|song| {
                matcher
                    .fuzzy_match(&normalize(song.get_title()), &query)
                    .filter(|&score| score > threshold)
                    .map(|score| (Arc::clone(song), score))
            })
            .collect();

        scored_songs.sort_by(|a, b| b.1.cmp(&a.1));

        scored_songs.into_iter().map(|i| i.0).collect()
    }
}
