//! Unified error handling for the relay.
//!
//! Every failure becomes the same JSON envelope:
//!
//! ```json
//! { "success": false, "error": "...", "status": 422, "details": "...", "request": {...} }
//! ```
//!
//! `status`, `details` and `request` appear only when they carry information.

use axum::{
    Json,
    extract::rejection::BytesRejection,
    http::StatusCode,
    response::{IntoResponse, Response},
};
use serde::Serialize;
use thiserror::Error;

use crate::config::MissingSetting;
use crate::shopify::ShopifyError;

/// Application-level error type for the relay.
#[derive(Debug, Error)]
pub enum AppError {
    /// Caller used a method other than POST or OPTIONS.
    #[error("Method not allowed: use POST")]
    MethodNotAllowed,

    /// Shop domain or access token is not configured.
    #[error("Server configuration error: {0}")]
    NotConfigured(MissingSetting),

    /// Request body is not a JSON object.
    #[error("Unexpected failure: invalid order payload")]
    InvalidPayload(#[source] serde_json::Error),

    /// Request body could not be read (too large, aborted).
    #[error("Unexpected failure: request body could not be read")]
    UnreadableBody(#[source] BytesRejection),

    /// Shopify answered with a non-success status.
    #[error("Shopify rejected the request (HTTP {status})")]
    Rejected {
        status: u16,
        /// Raw response body.
        body: String,
        /// Outbound request body, when echoing is enabled.
        request: Option<serde_json::Value>,
    },

    /// Any other Shopify failure (transport, undecodable response).
    #[error("Unexpected failure: Shopify request failed")]
    Shopify(#[source] ShopifyError),
}

impl AppError {
    /// Attach the outbound request body to a rejection.
    #[must_use]
    pub fn with_request(self, request: Option<serde_json::Value>) -> Self {
        match self {
            Self::Rejected { status, body, .. } => Self::Rejected {
                status,
                body,
                request,
            },
            other => other,
        }
    }

    /// HTTP status returned to the caller.
    #[must_use]
    pub const fn status_code(&self) -> StatusCode {
        match self {
            Self::MethodNotAllowed => StatusCode::METHOD_NOT_ALLOWED,
            Self::NotConfigured(_)
            | Self::InvalidPayload(_)
            | Self::UnreadableBody(_)
            | Self::Rejected { .. }
            | Self::Shopify(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }

    fn body(&self) -> ErrorBody {
        let mut body = ErrorBody {
            success: false,
            error: self.to_string(),
            status: None,
            details: None,
            request: None,
        };

        match self {
            Self::MethodNotAllowed | Self::NotConfigured(_) => {}
            Self::InvalidPayload(e) => body.details = Some(e.to_string()),
            Self::UnreadableBody(e) => body.details = Some(e.body_text()),
            Self::Shopify(e) => body.details = Some(e.to_string()),
            Self::Rejected {
                status,
                body: raw,
                request,
            } => {
                body.status = Some(*status);
                body.details = Some(raw.clone());
                body.request.clone_from(request);
            }
        }

        body
    }
}

impl From<ShopifyError> for AppError {
    fn from(err: ShopifyError) -> Self {
        match err {
            ShopifyError::Api { status, body } => Self::Rejected {
                status,
                body,
                request: None,
            },
            ShopifyError::NotConfigured(missing) => Self::NotConfigured(missing),
            other => Self::Shopify(other),
        }
    }
}

impl From<MissingSetting> for AppError {
    fn from(missing: MissingSetting) -> Self {
        Self::NotConfigured(missing)
    }
}

/// JSON error envelope.
#[derive(Debug, Serialize)]
struct ErrorBody {
    success: bool,
    error: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    status: Option<u16>,
    #[serde(skip_serializing_if = "Option::is_none")]
    details: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    request: Option<serde_json::Value>,
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let status = self.status_code();

        // Capture server errors to Sentry
        if status.is_server_error() {
            let event_id = sentry::capture_error(&self);
            tracing::error!(
                error = %self,
                sentry_event_id = %event_id,
                "Draft order request failed"
            );
        }

        (status, Json(self.body())).into_response()
    }
}
