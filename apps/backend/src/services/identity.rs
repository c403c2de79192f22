//! Caller identity resolution.

use crate::domain::state::PlayerId;
use crate::error::AppError;

/// Per-request data handed over by the transport.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct RequestContext {
    /// Authenticated subject, if the transport established one.
    pub subject: Option<String>,
}

impl RequestContext {
    pub fn authenticated(subject: impl Into<String>) -> Self {
        Self {
            subject: Some(subject.into()),
        }
    }

    pub fn anonymous() -> Self {
        Self::default()
    }
}

pub trait IdentityResolver: Send + Sync {
    fn resolve(&self, ctx: &RequestContext) -> Result<PlayerId, AppError>;
}

/// Trusts the subject already placed on the context.
#[derive(Debug, Clone, Copy, Default)]
pub struct ContextIdentity;

impl IdentityResolver for ContextIdentity {
    fn resolve(&self, ctx: &RequestContext) -> Result<PlayerId, AppError> {
        let subject = ctx.subject.as_deref().ok_or_else(AppError::unauthorized)?;
        PlayerId::new(subject).map_err(|_| AppError::unauthorized())
    }
}
