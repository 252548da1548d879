pub mod client;
pub mod handlers;
pub mod mock;

pub use client::{AnalysisApi, AnalysisError, CvUpload, HttpAnalysisClient};
pub use mock::MockAnalysisClient;
