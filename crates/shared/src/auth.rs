//! Authentication types for JWT-based request context.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// JWT claims for access tokens.
///
/// The company reference is optional: users without an associated company
/// are a normal case and fall back to the default fiscal year downstream.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Claims {
    /// Subject (user ID).
    pub sub: Uuid,
    /// Company reference for the current user, if any.
    pub cmp: Option<Uuid>,
    /// Issued at timestamp.
    pub iat: i64,
    /// Expiration timestamp.
    pub exp: i64,
}

impl Claims {
    /// Creates new claims for a user.
    #[must_use]
    pub fn new(user_id: Uuid, company_ref: Option<Uuid>, expires_at: DateTime<Utc>) -> Self {
        let now = Utc::now();
        Self {
            sub: user_id,
            cmp: company_ref,
            iat: now.timestamp(),
            exp: expires_at.timestamp(),
        }
    }

    /// Returns the user ID from claims.
    #[must_use]
    pub const fn user_id(&self) -> Uuid {
        self.sub
    }

    /// Returns the company reference from claims, if present.
    #[must_use]
    pub const fn company_ref(&self) -> Option<Uuid> {
        self.cmp
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_claims_with_company() {
        let user_id = Uuid::new_v4();
        let company = Uuid::new_v4();
        let claims = Claims::new(user_id, Some(company), Utc::now() + chrono::Duration::hours(1));

        assert_eq!(claims.user_id(), user_id);
        assert_eq!(claims.company_ref(), Some(company));
    }

    #[test]
    fn test_claims_without_company() {
        let claims = Claims::new(Uuid::new_v4(), None, Utc::now() + chrono::Duration::hours(1));
        assert_eq!(claims.company_ref(), None);
    }
}
