// Scoring: channel size classification and performance scores.
//
// Everything in here is pure computation over already-validated numbers.
// The only outside input is the clock, which callers pass in.

pub mod channel_size;
pub mod clock;
pub mod decay;
pub mod engagement;
pub mod error;
pub mod grade;
pub mod models;
pub mod report;
pub mod views;

pub use channel_size::ChannelSize;
pub use clock::{Clock, FixedClock, SystemClock};
pub use error::InvalidInput;
pub use grade::{Grade, ScoreResult};
pub use models::{AnalysisInput, AnalysisReport, Metrics, VideoMetric};
pub use report::analyze;
