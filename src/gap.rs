use serde::{Deserialize, Serialize};
use std::collections::HashSet;

use crate::analyzers::{ContentAnalyzer, HashtagAnalyzer};
use crate::{mean, PostSample};

// Hook quality is sampled from the most recent posts only; engagement and
// hashtags use the full sample.
const HOOK_SAMPLE_LIMIT: usize = 10;
const TOP_HASHTAG_LIMIT: usize = 20;
const HASHTAG_DIFF_LIMIT: usize = 10;
const MISSING_HASHTAG_PREVIEW: usize = 5;

/// Public profile record produced by the scraper. Missing metrics read as zero.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CompetitorProfile {
    pub username: String,
    #[serde(default)]
    pub followers: u64,
    #[serde(default)]
    pub posts_per_week: f64,
}

/// The caller's own baseline metrics.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct UserMetrics {
    pub engagement_rate: f64,
    pub posts_per_week: f64,
    #[serde(default)]
    pub hashtags: Vec<String>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Priority {
    High,
    Medium,
    Low,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TacticalAction {
    pub action: String,
    pub priority: Priority,
    pub rationale: String,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct HashtagDifference {
    pub hashtag: String,
    pub competitor_uses: bool,
    pub user_uses: bool,
}

/// Aggregated view of one competitor, recomputed per request.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CompetitorSnapshot {
    pub username: String,
    pub followers: u64,
    pub avg_engagement: f64,
    pub posts_per_week: f64,
    pub top_hashtags: Vec<String>,
    pub avg_hook_score: f64,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct GapReport {
    pub competitor: CompetitorSnapshot,
    pub engagement_gap: f64,
    pub posting_frequency_gap: f64,
    pub hashtag_differences: Vec<HashtagDifference>,
    pub tactical_actions: Vec<TacticalAction>,
}

/// Compare a competitor's profile and post sample against the user's own
/// metrics. Gaps are signed: positive means the competitor is ahead.
pub fn analyze_competitor_gap(
    content: &ContentAnalyzer,
    hashtags: &HashtagAnalyzer,
    profile: &CompetitorProfile,
    posts: &[PostSample],
    user: &UserMetrics,
) -> GapReport {
    let engagements: Vec<f64> = posts
        .iter()
        .map(|post| post.engagement_rate.unwrap_or(0.0))
        .collect();
    let avg_engagement = mean(&engagements);

    let top_hashtags = collect_top_hashtags(hashtags, posts);

    let hook_scores: Vec<f64> = posts
        .iter()
        .take(HOOK_SAMPLE_LIMIT)
        .map(|post| {
            content
                .analyze_hook(post.caption.as_deref().unwrap_or(""))
                .score
        })
        .collect();
    let avg_hook_score = mean(&hook_scores);

    let engagement_gap = avg_engagement - user.engagement_rate;
    let posting_frequency_gap = profile.posts_per_week - user.posts_per_week;

    let user_tags: HashSet<String> = user
        .hashtags
        .iter()
        .map(|tag| hashtags.normalize(tag))
        .collect();
    let hashtag_differences: Vec<HashtagDifference> = top_hashtags
        .iter()
        .filter(|tag| !user_tags.contains(tag.as_str()))
        .take(HASHTAG_DIFF_LIMIT)
        .map(|tag| HashtagDifference {
            hashtag: tag.clone(),
            competitor_uses: true,
            user_uses: false,
        })
        .collect();

    let tactical_actions = build_actions(
        &profile.username,
        engagement_gap,
        posting_frequency_gap,
        &hashtag_differences,
    );

    GapReport {
        competitor: CompetitorSnapshot {
            username: profile.username.clone(),
            followers: profile.followers,
            avg_engagement,
            posts_per_week: profile.posts_per_week,
            top_hashtags,
            avg_hook_score,
        },
        engagement_gap,
        posting_frequency_gap,
        hashtag_differences,
        tactical_actions,
    }
}

// Distinct normalized tags across the whole sample, in encounter order.
fn collect_top_hashtags(hashtags: &HashtagAnalyzer, posts: &[PostSample]) -> Vec<String> {
    let mut top: Vec<String> = Vec::new();
    for post in posts {
        for tag in &post.hashtags {
            let tag = hashtags.normalize(tag);
            if tag.is_empty() || top.contains(&tag) {
                continue;
            }
            top.push(tag);
            if top.len() == TOP_HASHTAG_LIMIT {
                return top;
            }
        }
    }
    top
}

// The three rules are independent; every one that fires emits, in this order.
fn build_actions(
    username: &str,
    engagement_gap: f64,
    posting_frequency_gap: f64,
    differences: &[HashtagDifference],
) -> Vec<TacticalAction> {
    let mut actions = Vec::new();

    if engagement_gap > 0.01 {
        actions.push(TacticalAction {
            action: format!(
                "Study {}'s top posts: their engagement is {:.1}% higher. Focus on their hook patterns.",
                username,
                engagement_gap * 100.0
            ),
            priority: Priority::High,
            rationale: "Closing the engagement gap is the highest-leverage action.".to_string(),
        });
    }

    if posting_frequency_gap > 1.0 {
        actions.push(TacticalAction {
            action: format!(
                "Increase posting frequency by {:.1} posts/week to match competitor cadence.",
                posting_frequency_gap
            ),
            priority: Priority::Medium,
            rationale: "More content means more algorithm signals and faster growth.".to_string(),
        });
    }

    if !differences.is_empty() {
        let missing: Vec<&str> = differences
            .iter()
            .take(MISSING_HASHTAG_PREVIEW)
            .map(|difference| difference.hashtag.as_str())
            .collect();
        actions.push(TacticalAction {
            action: format!(
                "Test these hashtags from {}'s strategy: {}",
                username,
                missing.join(", ")
            ),
            priority: Priority::Medium,
            rationale: "Competitor hashtags that you aren't using may unlock new audience segments."
                .to_string(),
        });
    }

    actions
}
