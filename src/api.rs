use serde::{Deserialize, Serialize};
use social_optimizer::gap::{
    CompetitorProfile, GapReport, HashtagDifference, TacticalAction, UserMetrics,
};
use social_optimizer::{BatchAnalysis, PostAnalysis, PostInput, PostSample};

#[derive(Debug, Deserialize)]
pub struct ApiPostBatchRequest {
    pub posts: Vec<PostInput>,
}

#[derive(Debug, Serialize)]
pub struct ApiPostBatchResponse {
    pub hook_scores: Vec<f64>,
    pub sentiment_scores: Vec<f64>,
    pub cta_count: usize,
    pub post_analyses: Vec<PostAnalysis>,
}

impl ApiPostBatchResponse {
    pub fn from_batch(batch: BatchAnalysis) -> Self {
        Self {
            hook_scores: batch.hook_scores,
            sentiment_scores: batch.sentiment_scores,
            cta_count: batch.cta_count,
            post_analyses: batch.post_analyses,
        }
    }
}

/// Competitor comparison request. Scraping is upstream; the competitor's
/// profile numbers and recent posts arrive already fetched.
#[derive(Debug, Deserialize)]
pub struct ApiCompetitorRequest {
    pub competitor_username: String,
    #[serde(default)]
    pub competitor_followers: u64,
    #[serde(default)]
    pub competitor_posts_per_week: f64,
    #[serde(default)]
    pub competitor_posts: Vec<PostSample>,
    pub user_engagement_rate: f64,
    pub user_posts_per_week: f64,
    #[serde(default)]
    pub user_hashtags: Vec<String>,
}

impl ApiCompetitorRequest {
    pub fn into_parts(self) -> (CompetitorProfile, Vec<PostSample>, UserMetrics) {
        let profile = CompetitorProfile {
            username: self.competitor_username,
            followers: self.competitor_followers,
            posts_per_week: self.competitor_posts_per_week,
        };
        let user = UserMetrics {
            engagement_rate: self.user_engagement_rate,
            posts_per_week: self.user_posts_per_week,
            hashtags: self.user_hashtags,
        };
        (profile, self.competitor_posts, user)
    }
}

#[derive(Debug, Serialize)]
pub struct ApiCompetitorResponse {
    pub competitor_username: String,
    pub competitor_followers: u64,
    pub competitor_avg_engagement: f64,
    pub competitor_posts_per_week: f64,
    pub competitor_top_hashtags: Vec<String>,
    pub competitor_avg_hook_score: f64,
    pub engagement_gap: f64,
    pub posting_frequency_gap: f64,
    pub hashtag_differences: Vec<HashtagDifference>,
    pub tactical_actions: Vec<TacticalAction>,
}

impl ApiCompetitorResponse {
    pub fn from_report(report: GapReport) -> Self {
        Self {
            competitor_username: report.competitor.username,
            competitor_followers: report.competitor.followers,
            competitor_avg_engagement: report.competitor.avg_engagement,
            competitor_posts_per_week: report.competitor.posts_per_week,
            competitor_top_hashtags: report.competitor.top_hashtags,
            competitor_avg_hook_score: report.competitor.avg_hook_score,
            engagement_gap: report.engagement_gap,
            posting_frequency_gap: report.posting_frequency_gap,
            hashtag_differences: report.hashtag_differences,
            tactical_actions: report.tactical_actions,
        }
    }
}
