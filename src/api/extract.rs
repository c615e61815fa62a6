//! Extractors that run `validator` rules after deserializing, so bad input
//! surfaces as a structural validation error.

use async_trait::async_trait;
use axum::{
    body::Bytes,
    extract::{FromRequest, FromRequestParts, Query, Request},
    http::{header, request::Parts, HeaderMap},
};
use serde::de::DeserializeOwned;
use serde_json::error::Category;
use serde_path_to_error::Segment;
use validator::Validate;

use crate::errors::{ApiError, FieldViolation};

const MISSING_JSON_CONTENT_TYPE: &str = "Expected request with `Content-Type: application/json`";

/// JSON body that has passed validation
#[derive(Debug, Clone)]
pub struct ValidatedJson<T>(pub T);

#[async_trait]
impl<T, S> FromRequest<S> for ValidatedJson<T>
where
    T: DeserializeOwned + Validate,
    S: Send + Sync,
{
    type Rejection = ApiError;

    async fn from_request(req: Request, state: &S) -> Result<Self, Self::Rejection> {
        if !has_json_content_type(req.headers()) {
            return Err(ApiError::StructuralValidation(vec![FieldViolation::new(
                ["body"],
                MISSING_JSON_CONTENT_TYPE,
            )]));
        }

        let bytes = Bytes::from_request(req, state).await.map_err(|rejection| {
            ApiError::transport(rejection.status(), rejection.body_text())
        })?;

        let value: T = deserialize_body(&bytes)?;
        value
            .validate()
            .map_err(|errors| ApiError::from_validation("body", &errors))?;
        Ok(Self(value))
    }
}

/// Deserialize a JSON body, reporting type and missing-field errors at the
/// location where they occurred. Syntax errors have no location beyond the
/// body itself.
pub fn deserialize_body<T: DeserializeOwned>(bytes: &[u8]) -> Result<T, ApiError> {
    let mut deserializer = serde_json::Deserializer::from_slice(bytes);

    let value = serde_path_to_error::deserialize(&mut deserializer).map_err(|err| {
        let mut loc = vec!["body".to_string()];
        if err.inner().classify() == Category::Data {
            loc.extend(err.path().iter().filter_map(segment_name));
        }
        ApiError::StructuralValidation(vec![FieldViolation::new(loc, err.inner().to_string())])
    })?;

    // Trailing characters after the document
    deserializer.end().map_err(|err| {
        ApiError::StructuralValidation(vec![FieldViolation::new(["body"], err.to_string())])
    })?;

    Ok(value)
}

fn segment_name(segment: &Segment) -> Option<String> {
    match segment {
        Segment::Seq { index } => Some(index.to_string()),
        Segment::Map { key } => Some(key.clone()),
        Segment::Enum { variant } => Some(variant.clone()),
        Segment::Unknown => None,
    }
}

/// `application/json` or any `application/*+json` media type
fn has_json_content_type(headers: &HeaderMap) -> bool {
    let Some(content_type) = headers
        .get(header::CONTENT_TYPE)
        .and_then(|value| value.to_str().ok())
    else {
        return false;
    };

    let essence = content_type
        .split(';')
        .next()
        .unwrap_or_default()
        .trim()
        .to_ascii_lowercase();

    match essence.split_once('/') {
        Some(("application", subtype)) => subtype == "json" || subtype.ends_with("+json"),
        _ => false,
    }
}

/// Query string that has passed validation
#[derive(Debug, Clone)]
pub struct ValidatedQuery<T>(pub T);

#[async_trait]
impl<T, S> FromRequestParts<S> for ValidatedQuery<T>
where
    T: DeserializeOwned + Validate,
    S: Send + Sync,
{
    type Rejection = ApiError;

    async fn from_request_parts(parts: &mut Parts, state: &S) -> Result<Self, Self::Rejection> {
        let Query(value) = Query::<T>::from_request_parts(parts, state).await?;
        value
            .validate()
            .map_err(|errors| ApiError::from_validation("query", &errors))?;
        Ok(Self(value))
    }
}
