pub mod content;
pub mod hashtags;
pub mod sentiment;

pub use content::{ContentAnalyzer, KeywordExtractor};
pub use hashtags::HashtagAnalyzer;
pub use sentiment::{LexiconScorer, PolarityScorer, SentimentAnalyzer};
