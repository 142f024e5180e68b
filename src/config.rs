use serde::{Deserialize, Serialize};
use std::env;
use std::path::{Path, PathBuf};

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct HookPatterns {
    pub question_prefixes: Vec<String>,
    pub question_suffixes: Vec<String>,
    pub stat_intro_words: Vec<String>,
    pub stat_count_words: Vec<String>,
    pub controversial_prefixes: Vec<String>,
    pub story_prefixes: Vec<String>,
    pub statement_prefixes: Vec<String>,
    pub power_words: Vec<String>,
    pub weak_starters: Vec<String>,
}

impl Default for HookPatterns {
    fn default() -> Self {
        Self {
            question_prefixes: to_strings(&[
                "what", "how", "why", "when", "where", "who", "which", "did you", "have you",
                "do you", "can you", "would you", "are you", "is this", "will you",
            ]),
            question_suffixes: to_strings(&["?"]),
            stat_intro_words: to_strings(&["in", "after"]),
            stat_count_words: to_strings(&["out of", "ways", "things", "tips", "secrets", "mistakes"]),
            controversial_prefixes: to_strings(&[
                "unpopular opinion",
                "controversial",
                "hot take",
                "nobody talks about",
                "stop doing",
                "i was wrong",
                "the truth about",
                "they don't want you to know",
            ]),
            story_prefixes: to_strings(&[
                "i was",
                "i used to",
                "i never",
                "i always",
                "i almost",
                "i couldn't",
                "when i",
                "the day i",
                "last week",
                "last month",
                "last year",
                "true story",
                "this changed",
                "it happened",
                "one day",
                "story time",
            ]),
            statement_prefixes: to_strings(&[
                "the #1",
                "the 1",
                "here's why",
                "this is why",
                "the reason",
                "the secret",
                "the key",
                "the truth",
                "what nobody",
                "most people",
            ]),
            power_words: to_strings(&[
                "secret",
                "proven",
                "never",
                "always",
                "guaranteed",
                "instantly",
                "surprising",
                "shocking",
                "bizarre",
                "incredible",
                "life-changing",
                "mistake",
                "warning",
                "finally",
                "exposed",
                "banned",
            ]),
            weak_starters: to_strings(&[
                "hi ",
                "hey ",
                "hello ",
                "welcome",
                "today i",
                "in this video",
                "in today's",
            ]),
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct HookScores {
    pub question: f64,
    pub stat: f64,
    pub controversial: f64,
    pub story: f64,
    pub statement: f64,
    pub none: f64,
}

impl Default for HookScores {
    fn default() -> Self {
        Self {
            question: 0.7,
            stat: 0.8,
            controversial: 0.85,
            story: 0.65,
            statement: 0.7,
            none: 0.2,
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CtaPatterns {
    pub phrases: Vec<String>,
}

impl Default for CtaPatterns {
    fn default() -> Self {
        Self {
            phrases: to_strings(&[
                "follow",
                "subscribe",
                "like",
                "comment",
                "share",
                "save",
                "tag",
                "dm",
                "click the link",
                "link in bio",
                "swipe up",
                "check out",
                "let me know",
                "drop a",
                "leave a",
                "hit the",
                "turn on",
                "turn off",
                "hit follow",
            ]),
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct HashtagSets {
    pub broad_tags: Vec<String>,
    pub location_hints: Vec<String>,
}

impl Default for HashtagSets {
    fn default() -> Self {
        Self {
            broad_tags: to_strings(&[
                "love",
                "instagood",
                "photooftheday",
                "follow",
                "like",
                "trending",
                "viral",
                "explore",
                "fyp",
                "foryou",
                "foryoupage",
                "reels",
            ]),
            location_hints: to_strings(&[
                "city", "nyc", "la", "london", "miami", "chicago", "usa", "uk",
            ]),
        }
    }
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct AnalyzerConfig {
    pub hooks: HookPatterns,
    pub hook_scores: HookScores,
    pub cta: CtaPatterns,
    pub hashtags: HashtagSets,
}

impl AnalyzerConfig {
    pub fn load(path: Option<PathBuf>) -> Result<(Self, Option<PathBuf>), String> {
        let config_path = path.or_else(default_config_path);
        let config = if let Some(path) = config_path.as_ref() {
            if path.exists() {
                let contents = std::fs::read_to_string(path)
                    .map_err(|err| format!("failed to read config: {}", err))?;
                toml::from_str(&contents)
                    .map_err(|err| format!("failed to parse config: {}", err))?
            } else {
                AnalyzerConfig::default()
            }
        } else {
            AnalyzerConfig::default()
        };

        Ok((config, config_path))
    }

    pub fn write(&self, path: &Path) -> Result<(), String> {
        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent)
                .map_err(|err| format!("failed to create config dir: {}", err))?;
        }
        let payload = toml::to_string_pretty(self)
            .map_err(|err| format!("failed to serialize config: {}", err))?;
        std::fs::write(path, payload).map_err(|err| format!("failed to write config: {}", err))?;
        Ok(())
    }
}

fn default_config_path() -> Option<PathBuf> {
    env::var("ANALYZER_CONFIG_PATH")
        .ok()
        .filter(|value| !value.trim().is_empty())
        .map(PathBuf::from)
        .or_else(|| Some(PathBuf::from("config/analyzer.toml")))
}

fn to_strings(values: &[&str]) -> Vec<String> {
    values.iter().map(|value| (*value).to_string()).collect()
}
