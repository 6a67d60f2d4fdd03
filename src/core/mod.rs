// Core engine exports
pub mod extractor;
pub mod normalizer;
pub mod ranker;
pub mod scorer;
pub mod session;

pub use extractor::SkillExtractor;
pub use normalizer::Normalizer;
pub use ranker::{CancellationToken, Ranker};
pub use scorer::score_profile;
pub use session::MatchSession;
