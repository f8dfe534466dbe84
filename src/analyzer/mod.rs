pub mod key_usage_evaluator;
pub use key_usage_evaluator::*;

pub mod index_usage_evaluator;
pub use index_usage_evaluator::*;

pub mod scan_classifier;
pub use scan_classifier::*;

pub mod query_analysis_result;
pub use query_analysis_result::*;

pub mod assessment_generator;
pub use assessment_generator::*;

pub mod analysis_outcome;
pub use analysis_outcome::*;

pub mod query_analyzer;
pub use query_analyzer::*;
