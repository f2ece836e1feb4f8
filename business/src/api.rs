//! REST calls of the grid resources.
//!
//! `GET {api}/{resource}` lists rows, `PUT {api}/{resource}/{id}` writes one full
//! row back. `api` is [`BusinessConfig::api_url`](crate::BusinessConfig::api_url).

use serde::Deserialize;
use thiserror::Error;

use crate::GridRow;
use crate::http::{Client, HttpError, Response};

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ApiError {
    #[error("status {status}: {message}")]
    Status { status: u16, message: String },
    #[error(transparent)]
    Transport(#[from] HttpError),
    #[error("invalid response body: {0}")]
    Decode(String),
}

impl ApiError {
    pub fn status(&self) -> Option<u16> {
        match self {
            Self::Status { status, .. } => Some(*status),
            Self::Transport(_) | Self::Decode(_) => None,
        }
    }
}

#[derive(Deserialize)]
struct ErrorBody {
    message: String,
}

/// Prefer a JSON `{"message": ..}` body, fall back to the raw text.
fn status_error(response: &Response) -> ApiError {
    let message = response
        .json::<ErrorBody>()
        .map(|body| body.message)
        .unwrap_or_else(|_| response.text_lossy().trim().to_owned());
    let message = if message.is_empty() {
        format!("HTTP {}", response.status)
    } else {
        message
    };

    ApiError::Status {
        status: response.status,
        message,
    }
}

pub fn rows_url<R: GridRow>(api_url: &str) -> String {
    format!("{api_url}/{}", R::RESOURCE)
}

pub fn row_url<R: GridRow>(api_url: &str, row: &R) -> String {
    format!("{api_url}/{}/{}", R::RESOURCE, row.id())
}

pub async fn list_rows<R: GridRow>(api_url: &str) -> Result<Vec<R>, ApiError> {
    let response = Client::get(rows_url::<R>(api_url))
        .header("Accept", "application/json")
        .send()
        .await?;

    if !response.is_success() {
        return Err(status_error(&response));
    }
    response
        .json::<Vec<R>>()
        .map_err(|e| ApiError::Decode(e.to_string()))
}

/// Write the full row. The response body is not interpreted.
pub async fn update_row<R: GridRow>(api_url: &str, row: &R) -> Result<(), ApiError> {
    let response = Client::put(row_url(api_url, row))
        .json(row)
        .map_err(|e| ApiError::Decode(e.to_string()))?
        .send()
        .await?;

    if response.is_success() {
        Ok(())
    } else {
        Err(status_error(&response))
    }
}
