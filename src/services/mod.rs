//! Orchestration between the roster backend, the session store and routes.

use thiserror::Error;

use crate::api::ApiError;
use crate::forms::FormError;

pub mod dashboard;

#[derive(Debug, Error)]
pub enum ServiceError {
    #[error("backend request failed: {0}")]
    Api(#[from] ApiError),

    #[error("invalid form: {0}")]
    Form(#[from] FormError),

    #[error("dashboard session not found")]
    SessionNotFound,
}

pub type ServiceResult<T> = Result<T, ServiceError>;
