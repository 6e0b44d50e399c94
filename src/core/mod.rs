// Core algorithm exports
pub mod compatibility;
pub mod matcher;
pub mod normalize;
pub mod stack;

pub use compatibility::calculate_compatibility;
pub use matcher::{Matcher, RankResult};
pub use normalize::{dedup_skills, fold_skill, SkillIndex};
pub use stack::derive_stack;
