// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

use thiserror::Error;

/// Failures while talking to the coaching service.
#[derive(Debug, Error)]
pub enum CoachError {
    /// Transport-level failure (connect, timeout, TLS).
    #[error("coaching service request failed: {0}")]
    RequestFailed(#[from] reqwest::Error),
    /// The service answered with a non-success HTTP status.
    #[error("coaching service returned status {0}")]
    ServiceStatus(reqwest::StatusCode),
    /// The response body did not match the expected shape.
    #[error("coaching service response was malformed: {0}")]
    MalformedResponse(String),
    /// The service answered successfully but produced no text.
    #[error("coaching service returned an empty reply")]
    EmptyReply,
}
