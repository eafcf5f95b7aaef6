// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

use std::time::Duration;

use reqwest::Client;
use serde::{Deserialize, Serialize};
use tracing::{debug, warn};

use crate::error::CoachError;

/// Shown in place of a reply whenever the collaborator fails.
pub const FALLBACK_MESSAGE: &str =
    "Sorry, something went wrong while generating a reply. Please try again.";

const REQUEST_TIMEOUT: Duration = Duration::from_secs(10);

/// Payload posted to the coaching service.
#[derive(Debug, Clone, Serialize)]
pub struct CoachRequest {
    pub context_profile: String,
    pub question: String,
}

/// Reply body from the coaching service.
#[derive(Debug, Clone, Deserialize)]
pub struct CoachResponse {
    pub text: String,
}

/// HTTP client for the coaching-text collaborator.
#[derive(Debug, Clone)]
pub struct CoachClient {
    client: Client,
    base_url: String,
}

impl CoachClient {
    /// Creates a client against `base_url` with a fixed request timeout.
    ///
    /// # Errors
    ///
    /// Returns [`CoachError::RequestFailed`] if the underlying HTTP client
    /// cannot be constructed.
    pub fn new(base_url: impl Into<String>) -> Result<Self, CoachError> {
        let client = Client::builder().timeout(REQUEST_TIMEOUT).build()?;
        Ok(Self {
            client,
            base_url: base_url.into(),
        })
    }

    /// Sends one question and waits for the reply. One shot, no retry.
    ///
    /// # Errors
    ///
    /// Returns a [`CoachError`] on transport failure, non-success status,
    /// a body that does not parse, or an empty reply.
    pub async fn ask(&self, request: &CoachRequest) -> Result<CoachResponse, CoachError> {
        debug!(question_len = request.question.len(), "Asking coach");
        let response = self
            .client
            .post(format!("{}/coach", self.base_url))
            .json(request)
            .send()
            .await?;

        let status = response.status();
        if !status.is_success() {
            return Err(CoachError::ServiceStatus(status));
        }

        let reply: CoachResponse = response
            .json()
            .await
            .map_err(|e| CoachError::MalformedResponse(e.to_string()))?;
        if reply.text.trim().is_empty() {
            return Err(CoachError::EmptyReply);
        }
        Ok(reply)
    }
}

/// Resolves an `ask` outcome to the text shown in the transcript.
///
/// Successful replies pass through verbatim; any failure becomes the fixed
/// [`FALLBACK_MESSAGE`] so the session keeps running.
#[must_use]
pub fn resolve_reply(result: Result<CoachResponse, CoachError>) -> String {
    match result {
        Ok(response) => response.text,
        Err(error) => {
            warn!(%error, "Coach request failed, substituting fallback");
            FALLBACK_MESSAGE.to_string()
        }
    }
}
