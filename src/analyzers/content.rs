use crate::config::{CtaPatterns, HookPatterns, HookScores};
use crate::{round3, HookResult, HookType};

/// Opaque semantic keyword extractor (a KeyBERT-style model behind a service
/// boundary). Injected at construction so the engine stays pure and testable.
pub trait KeywordExtractor: Send + Sync {
    fn extract(&self, text: &str, top_n: usize) -> Result<Vec<String>, String>;
}

/// Hook classification, CTA detection, and keyword extraction over one text.
pub struct ContentAnalyzer {
    hooks: HookPatterns,
    scores: HookScores,
    cta: CtaPatterns,
    keyword_extractor: Option<Box<dyn KeywordExtractor>>,
}

impl ContentAnalyzer {
    pub fn new(hooks: HookPatterns, scores: HookScores, cta: CtaPatterns) -> Self {
        Self {
            hooks,
            scores,
            cta,
            keyword_extractor: None,
        }
    }

    pub fn with_keyword_extractor(mut self, extractor: Box<dyn KeywordExtractor>) -> Self {
        self.keyword_extractor = Some(extractor);
        self
    }

    /// Score the opening of a text: first sentence (or first 200 chars)
    /// classified into an archetype, boosted for power words and penalized
    /// for weak intro phrases.
    pub fn analyze_hook(&self, text: &str) -> HookResult {
        let trimmed = text.trim();
        if trimmed.is_empty() {
            return HookResult {
                score: 0.0,
                hook_text: String::new(),
                hook_type: HookType::None,
                feedback: "No content to analyze".to_string(),
            };
        }

        let hook_text: String = first_sentence(trimmed).chars().take(200).collect();
        let hook_lower = hook_text.to_lowercase().trim().to_string();

        let hook_type = self.classify_hook(&hook_lower);
        let base_score = self.base_score(hook_type);

        // Each power word counts once no matter how often it repeats.
        let power_word_count = self
            .hooks
            .power_words
            .iter()
            .filter(|word| hook_lower.contains(word.as_str()))
            .count();
        let mut score = (base_score + power_word_count as f64 * 0.05).min(1.0);

        if self
            .hooks
            .weak_starters
            .iter()
            .any(|weak| hook_lower.starts_with(weak.as_str()))
        {
            score = (score - 0.2).max(0.1);
        }

        let score = round3(score);
        HookResult {
            score,
            hook_text,
            hook_type,
            feedback: self.feedback(hook_type, score),
        }
    }

    pub fn detect_cta(&self, text: &str) -> bool {
        if text.trim().is_empty() {
            return false;
        }
        let lower = text.to_lowercase();
        self.cta
            .phrases
            .iter()
            .any(|phrase| contains_phrase(&lower, phrase))
    }

    /// Delegates to the injected extractor. Short texts carry too little
    /// signal for keyphrases; extractor failure degrades to an empty list.
    pub fn extract_keywords(&self, text: &str, top_n: usize) -> Vec<String> {
        if text.chars().count() < 20 {
            return Vec::new();
        }
        match self.keyword_extractor.as_ref() {
            Some(extractor) => extractor.extract(text, top_n).unwrap_or_default(),
            None => Vec::new(),
        }
    }

    // Archetype order is fixed; the first archetype with a matching pattern wins.
    fn classify_hook(&self, hook: &str) -> HookType {
        let question = self
            .hooks
            .question_prefixes
            .iter()
            .any(|prefix| hook.starts_with(prefix.as_str()))
            || self
                .hooks
                .question_suffixes
                .iter()
                .any(|suffix| hook.ends_with(suffix.as_str()));
        if question {
            return HookType::Question;
        }
        if self.matches_stat(hook) {
            return HookType::Stat;
        }
        if starts_with_any(hook, &self.hooks.controversial_prefixes) {
            return HookType::Controversial;
        }
        if starts_with_any(hook, &self.hooks.story_prefixes) {
            return HookType::Story;
        }
        if starts_with_any(hook, &self.hooks.statement_prefixes) {
            return HookType::Statement;
        }
        HookType::None
    }

    // Stat hooks lead with a figure ("70% of..."), a count ("3 ways to..."),
    // or a timeframe ("in 30 days I...").
    fn matches_stat(&self, hook: &str) -> bool {
        if let Some(rest) = strip_leading_digits(hook) {
            if rest.starts_with('%') || rest.starts_with('$') {
                return true;
            }
            if let Some(tail) = rest.strip_prefix(' ') {
                if self
                    .hooks
                    .stat_count_words
                    .iter()
                    .any(|word| tail.starts_with(word.as_str()))
                {
                    return true;
                }
            }
        }

        self.hooks.stat_intro_words.iter().any(|word| {
            hook.strip_prefix(word.as_str())
                .and_then(|rest| rest.strip_prefix(' '))
                .map_or(false, |rest| rest.starts_with(|c: char| c.is_ascii_digit()))
        })
    }

    fn base_score(&self, hook_type: HookType) -> f64 {
        match hook_type {
            HookType::Question => self.scores.question,
            HookType::Stat => self.scores.stat,
            HookType::Controversial => self.scores.controversial,
            HookType::Story => self.scores.story,
            HookType::Statement => self.scores.statement,
            HookType::None => self.scores.none,
        }
    }

    fn feedback(&self, hook_type: HookType, score: f64) -> String {
        if score >= 0.8 {
            format!(
                "Strong {} hook. Creates immediate curiosity.",
                hook_type.label()
            )
        } else if score >= 0.6 {
            format!(
                "Decent {} hook. Could be stronger with a more specific or surprising opening.",
                hook_type.label()
            )
        } else if score >= 0.4 {
            "Weak hook detected. Try opening with a bold statement, surprising stat, or provocative question."
                .to_string()
        } else {
            "No effective hook. The first 3 seconds should grab attention: start with a pattern interrupt, not an intro."
                .to_string()
        }
    }
}

// Sentence boundary = sentence-ending punctuation followed by whitespace.
fn first_sentence(text: &str) -> &str {
    let mut chars = text.char_indices().peekable();
    while let Some((index, ch)) = chars.next() {
        if matches!(ch, '.' | '!' | '?') {
            if let Some(&(_, next)) = chars.peek() {
                if next.is_whitespace() {
                    return &text[..index + ch.len_utf8()];
                }
            }
        }
    }
    text
}

fn starts_with_any(hook: &str, prefixes: &[String]) -> bool {
    prefixes.iter().any(|prefix| hook.starts_with(prefix.as_str()))
}

fn strip_leading_digits(text: &str) -> Option<&str> {
    let end = text
        .find(|c: char| !c.is_ascii_digit())
        .unwrap_or(text.len());
    if end == 0 {
        None
    } else {
        Some(&text[end..])
    }
}

// Whole-word match: the phrase must sit on word boundaries on both sides so
// "follow" does not fire inside "following".
fn contains_phrase(text: &str, phrase: &str) -> bool {
    if phrase.is_empty() {
        return false;
    }
    let bytes = text.as_bytes();
    let mut offset = 0;
    while let Some(position) = text[offset..].find(phrase) {
        let begin = offset + position;
        let end = begin + phrase.len();
        let boundary_before = begin == 0 || !is_word_byte(bytes[begin - 1]);
        let boundary_after = end == text.len() || !is_word_byte(bytes[end]);
        if boundary_before && boundary_after {
            return true;
        }
        offset = begin + 1;
    }
    false
}

fn is_word_byte(byte: u8) -> bool {
    byte.is_ascii_alphanumeric() || byte == b'_'
}
