//! Analysis API client — the single point of entry for all calls to the
//! external analysis/question-generation backend.
//!
//! The backend owns skill-gap analysis and question generation; this side
//! only ships the JD text and resume file over and decodes the JSON that
//! comes back. Calls are single-shot: no retries, no backoff.

use async_trait::async_trait;
use bytes::Bytes;
use reqwest::multipart::{Form, Part};
use reqwest::Client;
use serde::de::DeserializeOwned;
use thiserror::Error;
use tracing::debug;

use crate::models::api::{
    AnalysisResponse, CatalogPage, InterviewSimulator, JobTitle, SeniorityLevel,
};

/// Upload timeout for `prepare-interview`; analysis of a resume can take
/// minutes on the backend.
const PREPARE_TIMEOUT: std::time::Duration = std::time::Duration::from_secs(600);

#[derive(Debug, Error)]
pub enum AnalysisError {
    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),

    #[error("Analysis API error (status {status}): {message}")]
    Api { status: u16, message: String },
}

/// A resume file as received from the preparation form.
#[derive(Debug, Clone)]
pub struct CvUpload {
    pub file_name: String,
    pub bytes: Bytes,
}

/// The external analysis backend, seen from this service.
///
/// Implemented by [`HttpAnalysisClient`] for the real backend and by
/// [`MockAnalysisClient`] for development and tests.
///
/// [`MockAnalysisClient`]: crate::analysis::mock::MockAnalysisClient
#[async_trait]
pub trait AnalysisApi: Send + Sync {
    async fn job_titles(&self) -> Result<Vec<JobTitle>, AnalysisError>;
    async fn seniority_levels(&self) -> Result<Vec<SeniorityLevel>, AnalysisError>;
    async fn interview_simulators(&self) -> Result<Vec<InterviewSimulator>, AnalysisError>;

    /// Submits a job description and resume for analysis, returning the
    /// skill-gap report and the generated question set.
    async fn prepare_interview(
        &self,
        jd_text: &str,
        cv_file: CvUpload,
    ) -> Result<AnalysisResponse, AnalysisError>;
}

/// reqwest-backed client for the real Analysis API.
#[derive(Clone)]
pub struct HttpAnalysisClient {
    client: Client,
    base_url: String,
}

impl HttpAnalysisClient {
    pub fn new(base_url: String) -> Self {
        Self {
            client: Client::builder()
                .timeout(PREPARE_TIMEOUT)
                .build()
                .expect("Failed to build HTTP client"),
            base_url: base_url.trim_end_matches('/').to_string(),
        }
    }

    async fn get_catalog<T: DeserializeOwned>(
        &self,
        path: &str,
    ) -> Result<Vec<T>, AnalysisError> {
        let url = format!("{}{path}", self.base_url);
        debug!(%url, "fetching catalog");
        let response = self.client.get(&url).send().await?;
        let page: CatalogPage<T> = check_status(response).await?.json().await?;
        Ok(page.data)
    }
}

#[async_trait]
impl AnalysisApi for HttpAnalysisClient {
    async fn job_titles(&self) -> Result<Vec<JobTitle>, AnalysisError> {
        self.get_catalog("/titles").await
    }

    async fn seniority_levels(&self) -> Result<Vec<SeniorityLevel>, AnalysisError> {
        self.get_catalog("/seniority-levels").await
    }

    async fn interview_simulators(&self) -> Result<Vec<InterviewSimulator>, AnalysisError> {
        self.get_catalog("/interview-simulators").await
    }

    async fn prepare_interview(
        &self,
        jd_text: &str,
        cv_file: CvUpload,
    ) -> Result<AnalysisResponse, AnalysisError> {
        let form = Form::new().text("jd_text", jd_text.to_string()).part(
            "cv_file",
            Part::bytes(cv_file.bytes.to_vec()).file_name(cv_file.file_name),
        );

        let url = format!("{}/prepare-interview", self.base_url);
        debug!(%url, "submitting interview preparation request");
        let response = self.client.post(&url).multipart(form).send().await?;
        let analysis: AnalysisResponse = check_status(response).await?.json().await?;
        Ok(analysis)
    }
}

/// Turns a non-success response into [`AnalysisError::Api`] with whatever
/// body text the backend returned.
async fn check_status(response: reqwest::Response) -> Result<reqwest::Response, AnalysisError> {
    let status = response.status();
    if status.is_success() {
        return Ok(response);
    }
    let message = response
        .text()
        .await
        .unwrap_or_else(|_| "<no response body>".to_string());
    Err(AnalysisError::Api {
        status: status.as_u16(),
        message,
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_base_url_trailing_slash_is_normalized() {
        let client = HttpAnalysisClient::new("http://analysis.local/".to_string());
        assert_eq!(client.base_url, "http://analysis.local");
    }
}
