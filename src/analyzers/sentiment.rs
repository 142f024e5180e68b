use crate::{clamp_signed, mean, round4, CorrelationReport, PostSample, SentimentLabel};

/// External polarity scorer returning a compound score in [-1, 1].
pub trait PolarityScorer: Send + Sync {
    fn polarity(&self, text: &str) -> Result<f64, String>;
}

/// Compound-score wrapper plus the sentiment/engagement correlation.
pub struct SentimentAnalyzer {
    scorer: Box<dyn PolarityScorer>,
}

impl SentimentAnalyzer {
    pub fn new(scorer: Box<dyn PolarityScorer>) -> Self {
        Self { scorer }
    }

    /// Compound score for a text. Empty input and scorer failure both read
    /// as neutral; the engine never surfaces a scorer error.
    pub fn analyze(&self, text: &str) -> f64 {
        if text.trim().is_empty() {
            return 0.0;
        }
        match self.scorer.polarity(text) {
            Ok(score) => round4(clamp_signed(score)),
            Err(_) => 0.0,
        }
    }

    pub fn label(&self, score: f64) -> SentimentLabel {
        if score >= 0.05 {
            SentimentLabel::Positive
        } else if score <= -0.05 {
            SentimentLabel::Negative
        } else {
            SentimentLabel::Neutral
        }
    }

    /// Bucket engagement rates by caption sentiment and report which label
    /// performs best. Ties resolve positive, then neutral, then negative.
    pub fn analyze_engagement_correlation(&self, posts: &[PostSample]) -> CorrelationReport {
        let mut positive: Vec<f64> = Vec::new();
        let mut neutral: Vec<f64> = Vec::new();
        let mut negative: Vec<f64> = Vec::new();

        for post in posts {
            let score = self.analyze(post.caption.as_deref().unwrap_or(""));
            let engagement = post.engagement_rate.unwrap_or(0.0);
            match self.label(score) {
                SentimentLabel::Positive => positive.push(engagement),
                SentimentLabel::Neutral => neutral.push(engagement),
                SentimentLabel::Negative => negative.push(engagement),
            }
        }

        let positive_avg_engagement = round4(mean(&positive));
        let neutral_avg_engagement = round4(mean(&neutral));
        let negative_avg_engagement = round4(mean(&negative));

        let mut best_sentiment = SentimentLabel::Positive;
        let mut best_average = f64::NEG_INFINITY;
        let averages = [
            (SentimentLabel::Positive, positive_avg_engagement),
            (SentimentLabel::Neutral, neutral_avg_engagement),
            (SentimentLabel::Negative, negative_avg_engagement),
        ];
        for (label, average) in averages {
            if average > best_average {
                best_sentiment = label;
                best_average = average;
            }
        }

        CorrelationReport {
            best_sentiment,
            positive_avg_engagement,
            neutral_avg_engagement,
            negative_avg_engagement,
        }
    }
}

const POSITIVE_WORDS: &[&str] = &[
    "amazing", "awesome", "beautiful", "best", "excited", "favorite", "fun", "good", "great",
    "happy", "incredible", "love", "perfect", "proud", "success", "win", "wow",
];

const NEGATIVE_WORDS: &[&str] = &[
    "angry", "annoying", "awful", "bad", "boring", "broke", "fail", "failure", "hate", "lost",
    "problem", "sad", "scam", "terrible", "ugly", "worst", "wrong",
];

const NEGATION_WORDS: &[&str] = &[
    "not", "no", "never", "don't", "won't", "can't", "isn't", "wasn't", "didn't",
];

/// Built-in word-valence scorer used when no external polarity model is
/// wired in. A negation flips the next sentiment-bearing word; the running
/// total is squashed into (-1, 1) the way VADER normalizes its sum.
pub struct LexiconScorer;

impl PolarityScorer for LexiconScorer {
    fn polarity(&self, text: &str) -> Result<f64, String> {
        let mut total = 0.0f64;
        let mut negated = false;

        for raw in text.split_whitespace() {
            let word: String = raw
                .chars()
                .filter(|c| c.is_alphanumeric() || *c == '\'')
                .collect::<String>()
                .to_lowercase();
            if word.is_empty() {
                continue;
            }
            if NEGATION_WORDS.contains(&word.as_str()) {
                negated = true;
                continue;
            }

            let valence = if POSITIVE_WORDS.contains(&word.as_str()) {
                1.0
            } else if NEGATIVE_WORDS.contains(&word.as_str()) {
                -1.0
            } else {
                0.0
            };
            if valence != 0.0 {
                total += if negated { -valence } else { valence };
                negated = false;
            }
        }

        Ok(total / (total * total + 15.0).sqrt())
    }
}
