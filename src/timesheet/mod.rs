pub mod columns;
pub mod models;
pub mod pending;
pub mod reconciler;
pub mod resolver;

pub use models::{BatchReport, Submission, SubmissionOutcome};
pub use pending::PendingStore;
