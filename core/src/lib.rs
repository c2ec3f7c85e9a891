//! bizradar-core — business-opportunity scoring and decision-matrix
//! engine.
//!
//! PIPELINE (fixed, documented):
//!   1. Category intelligence + financial projection from raw inputs
//!   2. Composite scoring (BizScore) and forecast
//!   3. SWOT / risk / failure assessment and recommendation
//!   4. Decision matrix ranks multiple reports
//!
//! RULES:
//!   - Every function is a deterministic computation over immutable
//!     inputs; identical inputs produce bit-identical outputs.
//!   - No I/O, no randomness, no shared state. Report identity (uuid +
//!     timestamp) is the single non-deterministic constructor and sits
//!     outside the scoring path.
//!   - Normalizers and projections prefer documented defaults over
//!     failure; only the multi-candidate comparison entry point raises
//!     an error, for call arity.

pub mod bizscore;
pub mod category;
pub mod error;
pub mod failure;
pub mod finance;
pub mod forecast;
pub mod idea;
pub mod market;
pub mod matrix;
pub mod normalize;
pub mod recommend;
pub mod report;
pub mod risk;
pub mod swot;
pub mod types;

pub use error::{ScoreError, ScoreResult};
pub use market::MarketSignal;
pub use report::{FeasibilityReport, ReportIdentity};
