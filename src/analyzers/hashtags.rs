use std::collections::HashMap;

use crate::config::HashtagSets;
use crate::{round3, HashtagCategory, PostInput};

/// Hashtag extraction, cross-post frequency ranking, density, and the
/// broad/branded/location/niche heuristic.
pub struct HashtagAnalyzer {
    config: HashtagSets,
}

impl HashtagAnalyzer {
    pub fn new(config: HashtagSets) -> Self {
        Self { config }
    }

    /// All `#tag` tokens, lowercased, deduplicated in first-occurrence order.
    pub fn extract(&self, text: &str) -> Vec<String> {
        let mut tags: Vec<String> = Vec::new();
        let mut chars = text.chars().peekable();
        while let Some(ch) = chars.next() {
            if ch != '#' {
                continue;
            }
            let mut tag = String::new();
            while let Some(&next) = chars.peek() {
                if next.is_alphanumeric() || next == '_' {
                    tag.push(next);
                    chars.next();
                } else {
                    break;
                }
            }
            if tag.is_empty() {
                continue;
            }
            let tag = tag.to_lowercase();
            if !tags.contains(&tag) {
                tags.push(tag);
            }
        }
        tags
    }

    /// Frequency of every hashtag across post captions, most used first.
    /// Ties keep first-encountered order.
    pub fn count_from_posts(&self, posts: &[PostInput]) -> Vec<(String, usize)> {
        let mut counts: HashMap<String, usize> = HashMap::new();
        let mut order: Vec<String> = Vec::new();

        for post in posts {
            for tag in self.extract(post.caption.as_deref().unwrap_or("")) {
                if !counts.contains_key(&tag) {
                    order.push(tag.clone());
                }
                *counts.entry(tag).or_insert(0) += 1;
            }
        }

        let mut ranked: Vec<(String, usize)> = order
            .into_iter()
            .map(|tag| {
                let count = counts[&tag];
                (tag, count)
            })
            .collect();
        ranked.sort_by(|a, b| b.1.cmp(&a.1));
        ranked
    }

    pub fn top_hashtags(&self, posts: &[PostInput], n: usize) -> Vec<String> {
        self.count_from_posts(posts)
            .into_iter()
            .take(n)
            .map(|(tag, _)| tag)
            .collect()
    }

    /// Distinct hashtags per whitespace-delimited word, 3 decimals.
    pub fn hashtag_density(&self, text: &str) -> f64 {
        if text.trim().is_empty() {
            return 0.0;
        }
        let words = text.split_whitespace().count();
        if words == 0 {
            return 0.0;
        }
        round3(self.extract(text).len() as f64 / words as f64)
    }

    /// Heuristic category. Order matters: the broad set is checked on the
    /// lowercased tag, then mixed case marks a brand, then location substrings.
    pub fn classify(&self, hashtag: &str) -> HashtagCategory {
        let raw = hashtag.trim_start_matches('#');
        let tag = raw.to_lowercase();
        if self.config.broad_tags.iter().any(|broad| broad == &tag) {
            return HashtagCategory::Broad;
        }
        if raw.chars().any(|c| c.is_uppercase()) {
            return HashtagCategory::Branded;
        }
        if self
            .config
            .location_hints
            .iter()
            .any(|hint| tag.contains(hint.as_str()))
        {
            return HashtagCategory::Location;
        }
        HashtagCategory::Niche
    }

    pub fn normalize(&self, hashtag: &str) -> String {
        hashtag.trim_start_matches('#').to_lowercase()
    }
}
