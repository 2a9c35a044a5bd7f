//! Skill extraction, match scoring and ranking

pub mod catalog;
pub mod text_processor;
pub mod skill_extractor;
pub mod similarity;
pub mod job;
pub mod job_matcher;
pub mod ranking;

pub use catalog::SkillCatalog;
pub use job::{JobId, JobPosting};
pub use job_matcher::{JobMatcher, MatchDetail, MatchResult};
pub use ranking::{generate_improvement_tips, JobRanker, RankedMatch};
pub use skill_extractor::SkillExtractor;
pub use similarity::SimilarityEstimator;
