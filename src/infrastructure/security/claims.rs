// src/infrastructure/security/claims.rs
use crate::application::{
    dto::AuthenticatedUser,
    error::{ApplicationError, ApplicationResult},
};
use crate::domain::user::{Capability, Role, UserId};
use biscuit_auth::builder::{Fact, Predicate, Term};
use chrono::{DateTime, Utc};
use std::collections::HashSet;
use std::time::{Duration, SystemTime, UNIX_EPOCH};

/// Rebuild the authenticated principal from the facts of a verified token.
pub fn parse_claims(facts: Vec<Fact>) -> ApplicationResult<AuthenticatedUser> {
    let mut ctx = ClaimsContext::default();
    for fact in facts {
        ctx.apply(&fact.predicate);
    }
    ctx.into_user()
}

#[derive(Default)]
struct ClaimsContext {
    user_id: Option<i64>,
    username: Option<String>,
    role: Option<Role>,
    session_id: Option<String>,
    issued_at: Option<SystemTime>,
    expires_at: Option<SystemTime>,
    capabilities: HashSet<Capability>,
}

impl ClaimsContext {
    fn apply(&mut self, predicate: &Predicate) {
        match (predicate.name.as_str(), predicate.terms.as_slice()) {
            ("user", [Term::Integer(id), Term::Str(name)]) => {
                self.user_id = Some(*id);
                self.username = Some(name.clone());
            }
            ("role", [Term::Str(role)]) => self.role = role.parse().ok(),
            ("session", [Term::Str(sid)]) => self.session_id = Some(sid.clone()),
            ("issued_at", [Term::Date(secs)]) => self.issued_at = Some(from_unix(*secs)),
            ("expires_at", [Term::Date(secs)]) => self.expires_at = Some(from_unix(*secs)),
            ("right", [Term::Str(resource), Term::Str(action)]) => {
                self.capabilities
                    .insert(Capability::new(resource.clone(), action.clone()));
            }
            _ => {}
        }
    }

    fn into_user(self) -> ApplicationResult<AuthenticatedUser> {
        let missing = |claim: &str| ApplicationError::unauthorized(format!("missing {claim}"));

        let id = UserId::new(self.user_id.ok_or_else(|| missing("user id"))?)
            .map_err(|_| ApplicationError::unauthorized("invalid user id"))?;
        let role = self.role.ok_or_else(|| missing("role"))?;

        Ok(AuthenticatedUser {
            id,
            username: self.username.ok_or_else(|| missing("username"))?,
            role,
            capabilities: self.capabilities,
            issued_at: DateTime::<Utc>::from(self.issued_at.ok_or_else(|| missing("issued_at"))?),
            expires_at: DateTime::<Utc>::from(
                self.expires_at.ok_or_else(|| missing("expires_at"))?,
            ),
            session_id: self.session_id.ok_or_else(|| missing("session"))?,
        })
    }
}

fn from_unix(seconds: u64) -> SystemTime {
    UNIX_EPOCH + Duration::from_secs(seconds)
}
