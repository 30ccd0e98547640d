//! Acting-user extractor.
//!
//! Authentication happens upstream of this server; the gateway forwards the
//! authenticated user id in the `x-actor-id` header. The extractor turns it
//! into an explicit [`RequestContext`] that handlers pass into services, so
//! no service ever reads the request object itself.

use std::convert::Infallible;

use axum::extract::FromRequestParts;
use axum::http::request::Parts;

use librarium_service::RequestContext;

/// Header carrying the upstream-authenticated user id.
const ACTOR_HEADER: &str = "x-actor-id";

/// Extracts the acting user for the current request.
///
/// A missing or malformed header yields an anonymous context rather than an
/// error; authorization is not this server's concern.
#[derive(Debug, Clone)]
pub struct ActorContext(pub RequestContext);

impl<S> FromRequestParts<S> for ActorContext
where
    S: Send + Sync,
{
    type Rejection = Infallible;

    async fn from_request_parts(parts: &mut Parts, _state: &S) -> Result<Self, Self::Rejection> {
        let context = parts
            .headers
            .get(ACTOR_HEADER)
            .and_then(|value| value.to_str().ok())
            .and_then(|value| value.parse::<i64>().ok())
            .filter(|id| *id > 0)
            .map(RequestContext::for_user)
            .unwrap_or_else(RequestContext::anonymous);
        Ok(Self(context))
    }
}
