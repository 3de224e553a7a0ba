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

/// Rebuilds the authenticated identity from the facts carried by a verified
/// biscuit. Missing identity facts make the token unusable.
pub fn parse_claims(facts: Vec<Fact>) -> ApplicationResult<AuthenticatedUser> {
    let mut ctx = ClaimsContext::default();
    for fact in facts {
        ctx.apply_predicate(fact.predicate);
    }

    let missing = |what: &str| ApplicationError::unauthorized(format!("missing {what}"));

    let user_id = ctx.user_id.ok_or_else(|| missing("user id"))?;
    let name = ctx.name.ok_or_else(|| missing("user name"))?;
    let role = ctx.role.ok_or_else(|| missing("role"))?;
    let issued_at = ctx.issued_at.ok_or_else(|| missing("issued_at"))?;
    let expires_at = ctx.expires_at.ok_or_else(|| missing("expires_at"))?;

    let id = UserId::new(user_id).map_err(ApplicationError::from)?;
    let mut capabilities = role.default_capabilities();
    capabilities.extend(ctx.capabilities);

    Ok(AuthenticatedUser {
        id,
        name,
        role,
        capabilities,
        issued_at: DateTime::<Utc>::from(issued_at),
        expires_at: DateTime::<Utc>::from(expires_at),
    })
}

#[derive(Default)]
struct ClaimsContext {
    user_id: Option<i64>,
    name: Option<String>,
    role: Option<Role>,
    issued_at: Option<SystemTime>,
    expires_at: Option<SystemTime>,
    capabilities: HashSet<Capability>,
}

impl ClaimsContext {
    fn apply_predicate(&mut self, predicate: Predicate) {
        match predicate.name.as_str() {
            "user" => self.handle_user(&predicate),
            "role" => self.handle_role(&predicate),
            "issued_at" => self.issued_at = date_term(&predicate),
            "expires_at" => self.expires_at = date_term(&predicate),
            "right" => self.handle_right(&predicate),
            _ => {}
        }
    }

    fn handle_user(&mut self, predicate: &Predicate) {
        if predicate.terms.len() == 2 {
            if let Term::Integer(id) = predicate.terms[0] {
                self.user_id = Some(id);
            }
            if let Term::Str(name) = predicate.terms[1].clone() {
                self.name = Some(name);
            }
        }
    }

    fn handle_role(&mut self, predicate: &Predicate) {
        if let Some(Term::Str(role_name)) = predicate.terms.first() {
            if let Ok(parsed) = role_name.parse() {
                self.role = Some(parsed);
            }
        }
    }

    fn handle_right(&mut self, predicate: &Predicate) {
        if predicate.terms.len() == 2 {
            if let (Term::Str(resource), Term::Str(action)) =
                (predicate.terms[0].clone(), predicate.terms[1].clone())
            {
                self.capabilities.insert(Capability::new(resource, action));
            }
        }
    }
}

fn date_term(predicate: &Predicate) -> Option<SystemTime> {
    match predicate.terms.first() {
        Some(Term::Date(seconds)) => Some(UNIX_EPOCH + Duration::from_secs(*seconds)),
        _ => None,
    }
}
