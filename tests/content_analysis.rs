use social_optimizer::analyzers::{KeywordExtractor, PolarityScorer};
use social_optimizer::config::AnalyzerConfig;
use social_optimizer::{
    AnalysisEngine, HashtagCategory, HookType, PostInput, PostSample, SentimentLabel,
};

fn engine() -> AnalysisEngine {
    AnalysisEngine::new(AnalyzerConfig::default())
}

fn post(id: &str, caption: &str) -> PostInput {
    PostInput {
        id: id.to_string(),
        caption: Some(caption.to_string()),
        transcript: None,
        media_url: None,
    }
}

fn sample(caption: &str, engagement_rate: f64) -> PostSample {
    PostSample {
        caption: Some(caption.to_string()),
        hashtags: Vec::new(),
        engagement_rate: Some(engagement_rate),
    }
}

struct StubExtractor;

impl KeywordExtractor for StubExtractor {
    fn extract(&self, _text: &str, top_n: usize) -> Result<Vec<String>, String> {
        Ok(["growth strategy", "content hooks", "posting cadence"]
            .iter()
            .take(top_n)
            .map(|phrase| (*phrase).to_string())
            .collect())
    }
}

struct FailingExtractor;

impl KeywordExtractor for FailingExtractor {
    fn extract(&self, _text: &str, _top_n: usize) -> Result<Vec<String>, String> {
        Err("model offline".to_string())
    }
}

struct FailingScorer;

impl PolarityScorer for FailingScorer {
    fn polarity(&self, _text: &str) -> Result<f64, String> {
        Err("scorer unavailable".to_string())
    }
}

#[test]
fn empty_hook_returns_zero_score() {
    let engine = engine();
    for text in ["", "   ", "\n\t"] {
        let result = engine.content().analyze_hook(text);
        assert_eq!(result.score, 0.0);
        assert_eq!(result.hook_type, HookType::None);
        assert_eq!(result.hook_text, "");
        assert_eq!(result.feedback, "No content to analyze");
    }
}

#[test]
fn question_hook_scores_base() {
    let result = engine()
        .content()
        .analyze_hook("What if you could double your reach?");
    assert_eq!(result.hook_type, HookType::Question);
    assert!((result.score - 0.7).abs() < 1e-9);
}

#[test]
fn stat_hook_detected_from_leading_count() {
    let engine = engine();

    let result = engine.content().analyze_hook("3 ways to grow faster on any platform.");
    assert_eq!(result.hook_type, HookType::Stat);
    assert!((result.score - 0.8).abs() < 1e-9);

    let result = engine.content().analyze_hook("90% of creators quit too early.");
    assert_eq!(result.hook_type, HookType::Stat);

    let result = engine.content().analyze_hook("In 30 days I doubled my views.");
    assert_eq!(result.hook_type, HookType::Stat);
}

#[test]
fn controversial_hook_scores_highest_base() {
    let result = engine()
        .content()
        .analyze_hook("Unpopular opinion: long captions are fine.");
    assert_eq!(result.hook_type, HookType::Controversial);
    assert!((result.score - 0.85).abs() < 1e-9);
}

#[test]
fn question_archetype_wins_over_statement() {
    // "what nobody" is also a statement prefix; question is checked first.
    let result = engine()
        .content()
        .analyze_hook("What nobody tells you about growth");
    assert_eq!(result.hook_type, HookType::Question);
}

#[test]
fn power_word_boost_is_monotonic_and_capped() {
    let engine = engine();

    let base = engine.content().analyze_hook("The secret to growth online");
    let boosted = engine
        .content()
        .analyze_hook("The secret to proven growth online");
    assert_eq!(base.hook_type, HookType::Statement);
    assert!(boosted.score > base.score);
    assert!((boosted.score - base.score - 0.05).abs() < 1e-9);

    let saturated = engine.content().analyze_hook(
        "The secret proven shocking incredible guaranteed banned exposed warning playbook",
    );
    assert_eq!(saturated.score, 1.0);
}

#[test]
fn repeated_power_word_counts_once() {
    let engine = engine();
    let once = engine.content().analyze_hook("The secret to growth");
    let twice = engine.content().analyze_hook("The secret secret to growth");
    assert_eq!(once.score, twice.score);
}

#[test]
fn weak_starter_penalty_floors_at_tenth() {
    let result = engine()
        .content()
        .analyze_hook("Hi everyone, welcome back to the channel");
    assert_eq!(result.hook_type, HookType::None);
    assert!((result.score - 0.1).abs() < 1e-9);
}

#[test]
fn hook_text_is_first_sentence() {
    let result = engine()
        .content()
        .analyze_hook("Did you know this? Here is more context after.");
    assert_eq!(result.hook_text, "Did you know this?");
    assert_eq!(result.hook_type, HookType::Question);
}

#[test]
fn hook_text_truncates_to_200_chars() {
    let text = "a".repeat(300);
    let result = engine().content().analyze_hook(&text);
    assert_eq!(result.hook_text.chars().count(), 200);
    assert!(text.starts_with(&result.hook_text));
}

#[test]
fn hook_analysis_is_idempotent() {
    let engine = engine();
    let text = "Why do 9 out of 10 reels flop? The secret is pacing.";
    let first = engine.content().analyze_hook(text);
    let second = engine.content().analyze_hook(text);
    assert_eq!(first, second);
}

#[test]
fn cta_detection_is_binary_and_word_bounded() {
    let engine = engine();
    assert!(engine.content().detect_cta("Don't forget to follow for more!"));
    assert!(engine.content().detect_cta("LINK IN BIO for the full guide"));
    assert!(engine.content().detect_cta("drop a comment below"));
    assert!(!engine.content().detect_cta("Just a regular caption."));
    assert!(!engine.content().detect_cta("I am following the trend"));
    assert!(!engine.content().detect_cta(""));
}

#[test]
fn keywords_short_circuit_below_twenty_chars() {
    let engine = AnalysisEngine::with_dependencies(
        AnalyzerConfig::default(),
        Box::new(social_optimizer::analyzers::LexiconScorer),
        Some(Box::new(StubExtractor)),
    );
    assert!(engine.content().extract_keywords("too short", 10).is_empty());

    let keywords = engine
        .content()
        .extract_keywords("a caption easily longer than twenty characters", 2);
    assert_eq!(keywords, vec!["growth strategy", "content hooks"]);
}

#[test]
fn keyword_extractor_failure_degrades_to_empty() {
    let engine = AnalysisEngine::with_dependencies(
        AnalyzerConfig::default(),
        Box::new(social_optimizer::analyzers::LexiconScorer),
        Some(Box::new(FailingExtractor)),
    );
    let keywords = engine
        .content()
        .extract_keywords("a caption easily longer than twenty characters", 10);
    assert!(keywords.is_empty());
}

#[test]
fn missing_extractor_yields_empty_keywords() {
    let keywords = engine()
        .content()
        .extract_keywords("a caption easily longer than twenty characters", 10);
    assert!(keywords.is_empty());
}

#[test]
fn sentiment_label_boundaries() {
    let engine = engine();
    assert_eq!(engine.sentiment().label(0.05), SentimentLabel::Positive);
    assert_eq!(engine.sentiment().label(-0.05), SentimentLabel::Negative);
    assert_eq!(engine.sentiment().label(0.0), SentimentLabel::Neutral);
    assert_eq!(engine.sentiment().label(0.049), SentimentLabel::Neutral);
}

#[test]
fn sentiment_failure_and_empty_input_read_neutral() {
    let failing = AnalysisEngine::with_dependencies(
        AnalyzerConfig::default(),
        Box::new(FailingScorer),
        None,
    );
    assert_eq!(failing.sentiment().analyze("anything at all"), 0.0);
    assert_eq!(engine().sentiment().analyze("   "), 0.0);
}

#[test]
fn lexicon_scorer_separates_polarity() {
    let engine = engine();
    let positive = engine.sentiment().analyze("great news!");
    let negative = engine.sentiment().analyze("bad day");
    let negated = engine.sentiment().analyze("not a good sign");
    assert_eq!(engine.sentiment().label(positive), SentimentLabel::Positive);
    assert_eq!(engine.sentiment().label(negative), SentimentLabel::Negative);
    assert_eq!(engine.sentiment().label(negated), SentimentLabel::Negative);
}

#[test]
fn engagement_correlation_buckets_by_label() {
    let posts = vec![sample("great news!", 0.10), sample("bad day", 0.02)];
    let report = engine().sentiment().analyze_engagement_correlation(&posts);
    assert_eq!(report.positive_avg_engagement, 0.10);
    assert_eq!(report.negative_avg_engagement, 0.02);
    assert_eq!(report.neutral_avg_engagement, 0.0);
    assert_eq!(report.best_sentiment, SentimentLabel::Positive);
}

#[test]
fn engagement_correlation_ties_resolve_positive_first() {
    let report = engine().sentiment().analyze_engagement_correlation(&[]);
    assert_eq!(report.best_sentiment, SentimentLabel::Positive);
    assert_eq!(report.positive_avg_engagement, 0.0);
}

#[test]
fn hashtags_extract_lowercased_deduplicated_in_order() {
    let tags = engine().hashtags().extract("Loving this #Gym #gym #FITNESS");
    assert_eq!(tags, vec!["gym", "fitness"]);
    assert!(engine().hashtags().extract("no tags here").is_empty());
}

#[test]
fn hashtag_density_counts_distinct_tags_per_word() {
    let engine = engine();
    assert_eq!(engine.hashtags().hashtag_density("Loving this #gym life"), 0.25);
    assert_eq!(engine.hashtags().hashtag_density(""), 0.0);
    assert_eq!(engine.hashtags().hashtag_density("   "), 0.0);
}

#[test]
fn hashtag_classification_order() {
    let engine = engine();
    // Broad set wins even with mixed case.
    assert_eq!(engine.hashtags().classify("#Viral"), HashtagCategory::Broad);
    // Uppercase marks a brand before the location substring can match.
    assert_eq!(
        engine.hashtags().classify("#NYCFitness"),
        HashtagCategory::Branded
    );
    assert_eq!(
        engine.hashtags().classify("nycfitness"),
        HashtagCategory::Location
    );
    assert_eq!(
        engine.hashtags().classify("veganmealprep"),
        HashtagCategory::Niche
    );
}

#[test]
fn hashtag_counts_rank_by_frequency_with_stable_ties() {
    let posts = vec![
        post("1", "#gym #fitness"),
        post("2", "#fitness #health"),
        post("3", "#fitness #gym"),
    ];
    let engine = engine();
    let counts = engine.hashtags().count_from_posts(&posts);
    assert_eq!(
        counts,
        vec![
            ("fitness".to_string(), 3),
            ("gym".to_string(), 2),
            ("health".to_string(), 1),
        ]
    );
    assert_eq!(engine.hashtags().top_hashtags(&posts, 2), vec!["fitness", "gym"]);
}

#[test]
fn analysis_text_combines_caption_and_transcript() {
    let mut post = post("1", "Caption here");
    assert_eq!(post.analysis_text(), "Caption here");
    assert_eq!(post.hook_source(), "Caption here");

    post.transcript = Some("Spoken opening".to_string());
    assert_eq!(post.analysis_text(), "Caption here Spoken opening");
    assert_eq!(post.hook_source(), "Spoken opening");

    post.transcript = Some("  ".to_string());
    assert_eq!(post.analysis_text(), "Caption here");
    assert_eq!(post.hook_source(), "Caption here");
}

#[test]
fn batch_analysis_preserves_input_order() {
    let posts = vec![
        post("a", "What is the best hook? #growth"),
        post("b", "Follow for more tips"),
        post("c", ""),
    ];
    let batch = engine().analyze_posts(&posts);

    assert_eq!(batch.hook_scores.len(), 3);
    assert_eq!(batch.sentiment_scores.len(), 3);
    assert_eq!(batch.cta_count, 1);
    let ids: Vec<&str> = batch
        .post_analyses
        .iter()
        .map(|analysis| analysis.post_id.as_str())
        .collect();
    assert_eq!(ids, vec!["a", "b", "c"]);
    assert_eq!(batch.post_analyses[0].hook_type, HookType::Question);
    assert!(batch.post_analyses[1].cta_detected);
    assert_eq!(batch.post_analyses[0].hashtags, vec!["growth"]);
    assert_eq!(batch.post_analyses[2].hook_score, 0.0);
}
