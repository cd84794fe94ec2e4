pub mod error;
pub mod models;
pub mod types;

pub use error::{Error, Result};
pub use models::AnalysisModel;
pub use types::{
    ConfidenceLevel, Document, EarningsCallSummary, ForwardGuidance, ManagementTone,
    is_mentioned, NOT_MENTIONED,
};
