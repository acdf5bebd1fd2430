pub mod analysis;
pub mod commands;
pub mod error;
pub mod models;

pub use analysis::aggregate::weighted_average;
pub use analysis::timeline::build_timeline;
pub use analysis::weights::role_weight;
pub use analysis::{InputPolicy, ScoringSettings};
pub use error::ScoringError;
