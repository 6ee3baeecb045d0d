//! Extraction routines built on sentence scoring
//!
//! Every routine is a pure function of its input text, an [`AnalysisConfig`]
//! and a [`Lexicon`]. None of them fail: degenerate input yields the empty
//! shape of the result.
//!
//! [`AnalysisConfig`]: crate::config::AnalysisConfig
//! [`Lexicon`]: crate::lexicon::Lexicon

pub mod key_points;
pub mod summary;
pub mod themes;
pub mod topics;

pub use key_points::extract_key_points;
pub use summary::{build_summary, summarize};
pub use themes::extract_themes;
pub use topics::extract_topics;
