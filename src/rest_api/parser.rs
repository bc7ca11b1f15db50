//! # Query Parameter Parser
//!
//! Turns raw query strings into list and search queries. Empty values are
//! treated as absent; anything else is used verbatim.


use std::collections::HashMap;

use crate::catalog::validation::ValidationError;

use super::errors::ApiResult;

/// Default page size when `limit` is not given
pub const DEFAULT_LIMIT: usize = 10;

/// Parsed list query
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ListQuery {
    /// Case-insensitive category equality filter
    pub category: Option<String>,

    /// Case-insensitive name substring terms (`search` and `name`)
    pub name_terms: Vec<String>,

    /// 1-based page number
    pub page: usize,

    /// Page size
    pub limit: usize,
}

impl ListQuery {
    /// Parse list parameters, falling back to `default_limit` for the page size
    pub fn parse(params: &HashMap<String, String>, default_limit: usize) -> ApiResult<Self> {
        let name_terms = ["search", "name"]
            .iter()
            .filter_map(|key| non_empty(params, key))
            .collect();

        let page = match non_empty(params, "page") {
            Some(value) => parse_positive("page", &value)?,
            None => 1,
        };

        let limit = match non_empty(params, "limit") {
            Some(value) => parse_positive("limit", &value)?,
            None => default_limit,
        };

        Ok(Self {
            category: non_empty(params, "category"),
            name_terms,
            page,
            limit,
        })
    }

    /// Index of the first item on the requested page
    pub fn start(&self) -> usize {
        (self.page - 1).saturating_mul(self.limit)
    }
}

/// Parsed search query
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SearchQuery {
    pub name: String,
}

impl SearchQuery {
    pub fn parse(params: &HashMap<String, String>) -> ApiResult<Self> {
        let name = non_empty(params, "name").ok_or_else(|| {
            ValidationError::InvalidQuery("'name' is required".to_string())
        })?;
        Ok(Self { name })
    }
}

fn non_empty(params: &HashMap<String, String>, key: &str) -> Option<String> {
    params
        .get(key)
        .filter(|v| !v.is_empty())
        .cloned()
}

fn parse_positive(key: &str, value: &str) -> ApiResult<usize> {
    match value.parse::<usize>() {
        Ok(n) if n >= 1 => Ok(n),
        _ => Err(ValidationError::InvalidQuery(format!(
            "'{}' must be a positive integer, got '{}'",
            key, value
        ))
        .into()),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::rest_api::ApiError;

    fn params(pairs: &[(&str, &str)]) -> HashMap<String, String> {
        pairs
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect()
    }

    #[test]
    fn test_defaults() {
        let query = ListQuery::parse(&HashMap::new(), DEFAULT_LIMIT).unwrap();
        assert_eq!(query.page, 1);
        assert_eq!(query.limit, 10);
        assert_eq!(query.category, None);
        assert!(query.name_terms.is_empty());
        assert_eq!(query.start(), 0);
    }

    #[test]
    fn test_configured_default_limit() {
        let query = ListQuery::parse(&HashMap::new(), 5).unwrap();
        assert_eq!(query.limit, 5);
    }

    #[test]
    fn test_full_list_query() {
        let query = ListQuery::parse(
            &params(&[
                ("category", "Kitchen"),
                ("search", "maker"),
                ("page", "3"),
                ("limit", "4"),
            ]),
            DEFAULT_LIMIT,
        )
        .unwrap();

        assert_eq!(query.category.as_deref(), Some("Kitchen"));
        assert_eq!(query.name_terms, vec!["maker".to_string()]);
        assert_eq!(query.page, 3);
        assert_eq!(query.limit, 4);
        assert_eq!(query.start(), 8);
    }

    #[test]
    fn test_search_and_name_both_apply() {
        let query =
            ListQuery::parse(&params(&[("search", "lap"), ("name", "top")]), DEFAULT_LIMIT)
                .unwrap();
        assert_eq!(query.name_terms, vec!["lap".to_string(), "top".to_string()]);
    }

    #[test]
    fn test_empty_values_are_absent() {
        let query =
            ListQuery::parse(&params(&[("category", ""), ("page", "")]), DEFAULT_LIMIT).unwrap();
        assert_eq!(query.category, None);
        assert_eq!(query.page, 1);
    }

    #[test]
    fn test_values_are_taken_verbatim() {
        let query = ListQuery::parse(
            &params(&[("category", " kitchen "), ("search", "coffee ")]),
            DEFAULT_LIMIT,
        )
        .unwrap();
        assert_eq!(query.category.as_deref(), Some(" kitchen "));
        assert_eq!(query.name_terms, vec!["coffee ".to_string()]);

        let result = ListQuery::parse(&params(&[("page", " ")]), DEFAULT_LIMIT);
        assert!(matches!(
            result,
            Err(ApiError::Validation(ValidationError::InvalidQuery(_)))
        ));
    }

    #[test]
    fn test_invalid_pagination() {
        for (key, value) in [("page", "0"), ("page", "abc"), ("limit", "-1"), ("limit", "0")] {
            let result = ListQuery::parse(&params(&[(key, value)]), DEFAULT_LIMIT);
            assert!(
                matches!(result, Err(ApiError::Validation(ValidationError::InvalidQuery(_)))),
                "{}={} should be rejected",
                key,
                value
            );
        }
    }

    #[test]
    fn test_search_query_requires_name() {
        assert_eq!(
            SearchQuery::parse(&params(&[("name", "phone")])).unwrap().name,
            "phone"
        );
        assert!(SearchQuery::parse(&HashMap::new()).is_err());
        assert!(SearchQuery::parse(&params(&[("name", "")])).is_err());
    }
}
