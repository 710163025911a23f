use jsonwebtoken::{
    Algorithm, DecodingKey, EncodingKey, Header, Validation, decode, encode, errors::ErrorKind,
};
use tracing::error;

use crate::domain::{
    authentication::value_objects::Identity, common::entities::app_errors::CoreError,
    session::entities::SessionClaims,
};

pub const SESSION_TTL_SECS: i64 = 24 * 60 * 60;

pub fn issue_session_token(identity: &Identity, secret: &str) -> Result<String, CoreError> {
    let claims = SessionClaims::new(identity);

    encode(
        &Header::new(Algorithm::HS256),
        &claims,
        &EncodingKey::from_secret(secret.as_bytes()),
    )
    .map_err(|err| {
        error!(error = %err, "failed to sign session token");
        CoreError::InternalServerError
    })
}

pub fn decode_session_token(token: &str, secret: &str) -> Result<SessionClaims, CoreError> {
    let validation = Validation::new(Algorithm::HS256);

    decode::<SessionClaims>(
        token,
        &DecodingKey::from_secret(secret.as_bytes()),
        &validation,
    )
    .map(|data| data.claims)
    .map_err(|err| match err.kind() {
        ErrorKind::ExpiredSignature => CoreError::TokenExpired,
        _ => CoreError::InvalidToken,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::{selection::entities::DailySelections, user::entities::Role};
    use chrono::Utc;

    const SECRET: &str = "canteen-dev-secret";

    fn identity() -> Identity {
        Identity {
            id: "emp-jay".to_string(),
            name: "Jay Mehta".to_string(),
            email: "jay.mehta@karmic.solutions".to_string(),
            role: Role::Employee,
            department: "Engineering".to_string(),
            dietary_notes: Some("Vegetarian on Tuesdays and Thursdays.".to_string()),
            default_opt_in: DailySelections {
                breakfast: false,
                lunch: true,
                snacks: true,
            },
        }
    }

    #[test]
    fn test_session_token_round_trip() {
        let token = issue_session_token(&identity(), SECRET).unwrap();
        let claims = decode_session_token(&token, SECRET).unwrap();

        assert_eq!(Identity::from(claims), identity());
    }

    #[test]
    fn test_token_signed_with_other_secret_is_rejected() {
        let token = issue_session_token(&identity(), "some-other-secret").unwrap();

        assert_eq!(
            decode_session_token(&token, SECRET).unwrap_err(),
            CoreError::InvalidToken
        );
    }

    #[test]
    fn test_garbage_token_is_rejected() {
        assert_eq!(
            decode_session_token("not-a-token", SECRET).unwrap_err(),
            CoreError::InvalidToken
        );
    }

    #[test]
    fn test_expired_token_is_rejected() {
        let mut claims = SessionClaims::new(&identity());
        claims.iat = Utc::now().timestamp() - 2 * SESSION_TTL_SECS;
        claims.exp = claims.iat + SESSION_TTL_SECS;

        let token = encode(
            &Header::new(Algorithm::HS256),
            &claims,
            &EncodingKey::from_secret(SECRET.as_bytes()),
        )
        .unwrap();

        assert_eq!(
            decode_session_token(&token, SECRET).unwrap_err(),
            CoreError::TokenExpired
        );
    }
}
