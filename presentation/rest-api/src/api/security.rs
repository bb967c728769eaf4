use jsonwebtoken::{Algorithm, DecodingKey, Validation, decode};
use poem::Request;
use poem::http::header::AUTHORIZATION;
use poem_openapi::SecurityScheme;
use serde::Deserialize;

use business::domain::shared::value_objects::UserId;

use crate::config::jwt_config::JwtConfig;

#[derive(Debug, Deserialize)]
struct Claims {
    sub: String,
}

/// Validates an HS256 token and returns its subject.
fn extract_subject(token: &str, config: &JwtConfig) -> Result<String, String> {
    let mut validation = Validation::new(Algorithm::HS256);
    validation.set_required_spec_claims(&["exp", "sub"]);
    if let Some(issuer) = &config.issuer {
        validation.set_issuer(&[issuer]);
    }

    let token_data = decode::<Claims>(
        token,
        &DecodingKey::from_secret(config.secret.as_bytes()),
        &validation,
    )
    .map_err(|e| format!("auth.token_validation_failed: {e}"))?;

    if token_data.claims.sub.is_empty() {
        return Err("auth.empty_subject".to_string());
    }
    Ok(token_data.claims.sub)
}

/// JWT Bearer token authentication
#[derive(SecurityScheme)]
#[oai(ty = "bearer", bearer_format = "JWT", checker = "jwt_bearer_checker")]
pub struct JwtBearer(pub String);

impl JwtBearer {
    pub fn user_id(&self) -> UserId {
        UserId::new(self.0.clone())
    }
}

async fn jwt_bearer_checker(req: &Request, bearer: poem_openapi::auth::Bearer) -> Option<String> {
    let Some(config) = req.data::<JwtConfig>() else {
        tracing::error!("JWT configuration missing from request data");
        return None;
    };

    match extract_subject(&bearer.token, config) {
        Ok(sub) => Some(sub),
        Err(e) => {
            tracing::warn!("JWT auth failed: {e}");
            None
        }
    }
}

/// Caller of a public endpoint: the token subject when a valid bearer is
/// present, `None` otherwise.
pub fn optional_viewer(req: &Request) -> Option<UserId> {
    let config = req.data::<JwtConfig>()?;
    let token = req
        .headers()
        .get(AUTHORIZATION)?
        .to_str()
        .ok()?
        .strip_prefix("Bearer ")?;

    extract_subject(token.trim(), config).ok().map(UserId::new)
}
