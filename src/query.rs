//! Query-string extraction with 422 rejections.
//!
//! `axum::extract::Query` rejects with 400 and cannot collect repeated keys
//! into a list, so handlers take a [`ValidQuery`] instead. The raw pairs are
//! decoded once and each parameter type pulls its fields out of them.

use axum::{
    async_trait,
    extract::{FromRequestParts, Query},
    http::{request::Parts, Uri},
};

use crate::error::{ApiError, FieldError};

/// Decoded `key=value` pairs of a query string, in request order.
#[derive(Debug, Default, Clone, PartialEq)]
pub struct QueryParams {
    pairs: Vec<(String, String)>,
}

impl QueryParams {
    pub fn from_uri(uri: &Uri) -> Result<Self, ApiError> {
        let Query(pairs) = Query::<Vec<(String, String)>>::try_from_uri(uri)
            .map_err(|e| ApiError::Validation(vec![FieldError::query_decode(e.body_text())]))?;
        Ok(Self { pairs })
    }

    fn values<'a>(&'a self, name: &'a str) -> impl Iterator<Item = &'a str> + 'a {
        self.pairs
            .iter()
            .filter(move |(key, _)| key == name)
            .map(|(_, value)| value.as_str())
    }

    /// Single string parameter. The last occurrence wins.
    pub fn required_str(&self, name: &str) -> Result<String, FieldError> {
        self.values(name)
            .last()
            .map(str::to_owned)
            .ok_or_else(|| FieldError::missing(name))
    }

    /// Every occurrence of `name`, each parsed as `f64`.
    ///
    /// Fails with a single `missing` error when the key is absent, otherwise
    /// with one error per bad value. `inf` and `NaN` parse but are rejected.
    pub fn required_floats(&self, name: &str) -> Result<Vec<f64>, Vec<FieldError>> {
        let mut numbers = Vec::new();
        let mut errors = Vec::new();
        let mut seen = false;

        for (index, raw) in self.values(name).enumerate() {
            seen = true;
            match raw.trim().parse::<f64>() {
                Ok(value) if value.is_finite() => numbers.push(value),
                Ok(_) => errors.push(FieldError::finite_number(name, index, raw)),
                Err(_) => errors.push(FieldError::float_parsing(name, index, raw)),
            }
        }

        if !seen {
            return Err(vec![FieldError::missing(name)]);
        }
        if errors.is_empty() {
            Ok(numbers)
        } else {
            Err(errors)
        }
    }
}

/// Typed view over [`QueryParams`] for one endpoint.
pub trait FromQueryParams: Sized {
    fn from_query_params(params: &QueryParams) -> Result<Self, Vec<FieldError>>;
}

/// Extractor that validates the query string into `T` before the handler runs.
#[derive(Debug, Clone)]
pub struct ValidQuery<T>(pub T);

#[async_trait]
impl<T, S> FromRequestParts<S> for ValidQuery<T>
where
    T: FromQueryParams + Send,
    S: Send + Sync,
{
    type Rejection = ApiError;

    async fn from_request_parts(parts: &mut Parts, _state: &S) -> Result<Self, Self::Rejection> {
        let params = QueryParams::from_uri(&parts.uri)?;
        T::from_query_params(&params)
            .map(ValidQuery)
            .map_err(ApiError::Validation)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn params(uri: &str) -> QueryParams {
        QueryParams::from_uri(&uri.parse::<Uri>().unwrap()).unwrap()
    }

    #[test]
    fn test_repeated_floats_in_order() {
        let p = params("/average?numbers=10&numbers=20.5&numbers=-3");
        assert_eq!(p.required_floats("numbers").unwrap(), vec![10.0, 20.5, -3.0]);
    }

    #[test]
    fn test_floats_ignore_other_keys_and_whitespace() {
        let p = params("/average?x=1&numbers=%204%20&y=abc");
        assert_eq!(p.required_floats("numbers").unwrap(), vec![4.0]);
    }

    #[test]
    fn test_missing_floats() {
        let p = params("/average");
        let errors = p.required_floats("numbers").unwrap_err();
        assert_eq!(errors, vec![FieldError::missing("numbers")]);
    }

    #[test]
    fn test_bad_floats_reported_per_index() {
        let p = params("/average?numbers=1&numbers=abc&numbers=&numbers=2");
        let errors = p.required_floats("numbers").unwrap_err();
        assert_eq!(errors.len(), 2);
        assert_eq!(errors[0], FieldError::float_parsing("numbers", 1, "abc"));
        assert_eq!(errors[1], FieldError::float_parsing("numbers", 2, ""));
    }

    #[test]
    fn test_non_finite_floats_rejected() {
        let p = params("/average?numbers=inf&numbers=1&numbers=NaN&numbers=-infinity");
        let errors = p.required_floats("numbers").unwrap_err();
        assert_eq!(
            errors,
            vec![
                FieldError::finite_number("numbers", 0, "inf"),
                FieldError::finite_number("numbers", 2, "NaN"),
                FieldError::finite_number("numbers", 3, "-infinity"),
            ]
        );
        assert_eq!(
            serde_json::to_value(&errors[1]).unwrap()["loc"],
            json!(["query", "numbers", 2])
        );
    }

    #[test]
    fn test_required_str() {
        let p = params("/reverse?text=Sonar%20Qube");
        assert_eq!(p.required_str("text").unwrap(), "Sonar Qube");

        let p = params("/reverse?text=");
        assert_eq!(p.required_str("text").unwrap(), "");

        let p = params("/reverse?text=a&text=b");
        assert_eq!(p.required_str("text").unwrap(), "b");

        let p = params("/reverse");
        assert_eq!(p.required_str("text").unwrap_err(), FieldError::missing("text"));
    }
}
