pub mod analyzers;
pub mod config;
pub mod gap;

use serde::{Deserialize, Serialize};

use crate::analyzers::{
    ContentAnalyzer, HashtagAnalyzer, KeywordExtractor, LexiconScorer, PolarityScorer,
    SentimentAnalyzer,
};
use crate::config::AnalyzerConfig;
use crate::gap::{CompetitorProfile, GapReport, UserMetrics};

const DEFAULT_KEYWORD_COUNT: usize = 10;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum HookType {
    Question,
    Stat,
    Controversial,
    Story,
    Statement,
    None,
}

impl HookType {
    pub fn label(self) -> &'static str {
        match self {
            HookType::Question => "question",
            HookType::Stat => "stat",
            HookType::Controversial => "controversial",
            HookType::Story => "story",
            HookType::Statement => "statement",
            HookType::None => "none",
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct HookResult {
    pub score: f64,
    pub hook_text: String,
    pub hook_type: HookType,
    pub feedback: String,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SentimentLabel {
    Positive,
    Neutral,
    Negative,
}

impl SentimentLabel {
    pub fn label(self) -> &'static str {
        match self {
            SentimentLabel::Positive => "positive",
            SentimentLabel::Neutral => "neutral",
            SentimentLabel::Negative => "negative",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum HashtagCategory {
    Broad,
    Branded,
    Location,
    Niche,
}

impl HashtagCategory {
    pub fn label(self) -> &'static str {
        match self {
            HashtagCategory::Broad => "broad",
            HashtagCategory::Branded => "branded",
            HashtagCategory::Location => "location",
            HashtagCategory::Niche => "niche",
        }
    }
}

/// One creator post submitted for analysis. Transcription happens upstream;
/// the transcript arrives here as plain text when available.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PostInput {
    pub id: String,
    pub caption: Option<String>,
    pub transcript: Option<String>,
    pub media_url: Option<String>,
}

impl PostInput {
    /// Caption and transcript combined; the transcript is appended only when present.
    pub fn analysis_text(&self) -> String {
        let caption = self.caption.as_deref().unwrap_or("");
        match self.transcript.as_deref().filter(|t| !t.trim().is_empty()) {
            Some(transcript) => format!("{} {}", caption, transcript).trim().to_string(),
            None => caption.trim().to_string(),
        }
    }

    /// Spoken openings matter more than captions when both exist.
    pub fn hook_source(&self) -> &str {
        self.transcript
            .as_deref()
            .filter(|t| !t.trim().is_empty())
            .or(self.caption.as_deref())
            .unwrap_or("")
    }
}

/// A scraped post from a public profile: caption, tags, and observed engagement.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PostSample {
    pub caption: Option<String>,
    #[serde(default)]
    pub hashtags: Vec<String>,
    pub engagement_rate: Option<f64>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PostAnalysis {
    pub post_id: String,
    pub hook_score: f64,
    pub hook_text: String,
    pub hook_type: HookType,
    pub cta_detected: bool,
    pub sentiment_score: f64,
    pub keywords: Vec<String>,
    pub hashtags: Vec<String>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct BatchAnalysis {
    pub hook_scores: Vec<f64>,
    pub sentiment_scores: Vec<f64>,
    pub cta_count: usize,
    pub post_analyses: Vec<PostAnalysis>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CorrelationReport {
    pub best_sentiment: SentimentLabel,
    pub positive_avg_engagement: f64,
    pub neutral_avg_engagement: f64,
    pub negative_avg_engagement: f64,
}

/// The scoring engine: hook, CTA, hashtag, and sentiment heuristics plus the
/// competitor gap analysis built on top of them. Stateless per call; external
/// dependencies (keyword extractor, polarity scorer) are injected at
/// construction and any failure from them degrades to an empty/zero signal.
pub struct AnalysisEngine {
    content: ContentAnalyzer,
    hashtags: HashtagAnalyzer,
    sentiment: SentimentAnalyzer,
}

impl AnalysisEngine {
    pub fn new(config: AnalyzerConfig) -> Self {
        Self::with_dependencies(config, Box::new(LexiconScorer), None)
    }

    pub fn with_dependencies(
        config: AnalyzerConfig,
        polarity: Box<dyn PolarityScorer>,
        keywords: Option<Box<dyn KeywordExtractor>>,
    ) -> Self {
        let mut content = ContentAnalyzer::new(config.hooks, config.hook_scores, config.cta);
        if let Some(extractor) = keywords {
            content = content.with_keyword_extractor(extractor);
        }
        Self {
            content,
            hashtags: HashtagAnalyzer::new(config.hashtags),
            sentiment: SentimentAnalyzer::new(polarity),
        }
    }

    pub fn content(&self) -> &ContentAnalyzer {
        &self.content
    }

    pub fn hashtags(&self) -> &HashtagAnalyzer {
        &self.hashtags
    }

    pub fn sentiment(&self) -> &SentimentAnalyzer {
        &self.sentiment
    }

    /// Run every per-post analyzer over a batch. Posts are independent; the
    /// aggregates are assembled in input order.
    pub fn analyze_posts(&self, posts: &[PostInput]) -> BatchAnalysis {
        let mut hook_scores = Vec::with_capacity(posts.len());
        let mut sentiment_scores = Vec::with_capacity(posts.len());
        let mut cta_count = 0usize;
        let mut post_analyses = Vec::with_capacity(posts.len());

        for post in posts {
            let text = post.analysis_text();
            let hook = self.content.analyze_hook(post.hook_source());
            let cta_detected = self.content.detect_cta(&text);
            if cta_detected {
                cta_count += 1;
            }
            let sentiment_score = self.sentiment.analyze(&text);
            let keywords = self.content.extract_keywords(&text, DEFAULT_KEYWORD_COUNT);
            let hashtags = self.hashtags.extract(&text);

            hook_scores.push(hook.score);
            sentiment_scores.push(sentiment_score);
            post_analyses.push(PostAnalysis {
                post_id: post.id.clone(),
                hook_score: hook.score,
                hook_text: hook.hook_text,
                hook_type: hook.hook_type,
                cta_detected,
                sentiment_score,
                keywords,
                hashtags,
            });
        }

        BatchAnalysis {
            hook_scores,
            sentiment_scores,
            cta_count,
            post_analyses,
        }
    }

    pub fn analyze_competitor_gap(
        &self,
        profile: &CompetitorProfile,
        posts: &[PostSample],
        user: &UserMetrics,
    ) -> GapReport {
        gap::analyze_competitor_gap(&self.content, &self.hashtags, profile, posts, user)
    }
}

pub(crate) fn round3(value: f64) -> f64 {
    (value * 1000.0).round() / 1000.0
}

pub(crate) fn round4(value: f64) -> f64 {
    (value * 10000.0).round() / 10000.0
}

pub(crate) fn mean(values: &[f64]) -> f64 {
    if values.is_empty() {
        return 0.0;
    }
    values.iter().sum::<f64>() / values.len() as f64
}

pub(crate) fn clamp_signed(value: f64) -> f64 {
    if value.is_nan() {
        return 0.0;
    }
    value.max(-1.0).min(1.0)
}
