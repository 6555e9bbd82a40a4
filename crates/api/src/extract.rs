//! Request body extractor whose rejections use the app's error format.

use axum::extract::FromRequest;

use crate::error::AppError;

/// Drop-in replacement for [`axum::Json`] on request bodies.
///
/// Malformed JSON, mistyped fields, and a missing `Content-Type` are
/// rejected as 400 `VALIDATION_ERROR` with the usual `{"error","code"}` body.
#[derive(Debug, FromRequest)]
#[from_request(via(axum::Json), rejection(AppError))]
pub struct AppJson<T>(pub T);
