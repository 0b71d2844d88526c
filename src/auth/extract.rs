/// Request identity resolution
///
/// `Actor` is extracted on every route that cares who is calling. A valid
/// bearer token for a known user yields `Actor::User`; anything else, a
/// missing header included, yields `Actor::Guest`. Extraction itself never
/// fails: deciding what a guest may do belongs to `crate::policy`, not here.
use actix_web::{dev::Payload, web, FromRequest, HttpRequest};
use std::future::{ready, Ready};
use uuid::Uuid;

use crate::auth::token;
use crate::state::AppState;

/// The caller's identity, as established from the Authorization header.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Actor {
    Guest,
    User(Uuid),
}

impl Actor {
    pub fn user_id(&self) -> Option<Uuid> {
        match self {
            Actor::User(id) => Some(*id),
            Actor::Guest => None,
        }
    }

    pub fn is_guest(&self) -> bool {
        matches!(self, Actor::Guest)
    }
}

fn resolve(req: &HttpRequest) -> Actor {
    let Some(state) = req.app_data::<web::Data<AppState>>() else {
        return Actor::Guest;
    };
    let Some(header) = req
        .headers()
        .get("Authorization")
        .and_then(|value| value.to_str().ok())
    else {
        return Actor::Guest;
    };
    let Some(raw_token) = header.strip_prefix("Bearer ") else {
        return Actor::Guest;
    };
    let secret = state.config.auth.jwt_secret.as_bytes();
    let Ok(claims) = token::verify_token(raw_token, secret) else {
        return Actor::Guest;
    };
    let Some(user_id) = claims.user_id() else {
        return Actor::Guest;
    };
    // A token for a user this process has never seen (for example one minted
    // before a restart) authenticates nobody.
    if state.store.users.contains(user_id) {
        Actor::User(user_id)
    } else {
        Actor::Guest
    }
}

impl FromRequest for Actor {
    type Error = actix_web::Error;
    type Future = Ready<Result<Self, Self::Error>>;

    fn from_request(req: &HttpRequest, _payload: &mut Payload) -> Self::Future {
        ready(Ok(resolve(req)))
    }
}
