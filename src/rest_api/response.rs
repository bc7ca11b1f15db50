//! # Response Envelopes
//!
//! Every successful response carries `success: true` next to its payload.

use std::collections::BTreeMap;

use serde::Serialize;

/// Paginated list envelope
#[derive(Debug, Clone, Serialize)]
pub struct ListResponse<T: Serialize> {
    pub success: bool,
    /// Matches after filtering, before pagination
    pub total: usize,
    pub page: usize,
    pub limit: usize,
    pub data: Vec<T>,
}

impl<T: Serialize> ListResponse<T> {
    pub fn new(data: Vec<T>, total: usize, page: usize, limit: usize) -> Self {
        Self {
            success: true,
            total,
            page,
            limit,
            data,
        }
    }
}

/// Single record envelope
#[derive(Debug, Clone, Serialize)]
pub struct SingleResponse<T: Serialize> {
    pub success: bool,
    pub data: T,
}

impl<T: Serialize> SingleResponse<T> {
    pub fn new(data: T) -> Self {
        Self {
            success: true,
            data,
        }
    }
}

/// Unpaginated search envelope
#[derive(Debug, Clone, Serialize)]
pub struct SearchResponse<T: Serialize> {
    pub success: bool,
    pub total: usize,
    pub data: Vec<T>,
}

impl<T: Serialize> SearchResponse<T> {
    pub fn new(data: Vec<T>) -> Self {
        Self {
            success: true,
            total: data.len(),
            data,
        }
    }
}

/// Category counts envelope
#[derive(Debug, Clone, Serialize)]
pub struct StatsResponse {
    pub success: bool,
    pub stats: BTreeMap<String, usize>,
}

impl StatsResponse {
    pub fn new(stats: BTreeMap<String, usize>) -> Self {
        Self {
            success: true,
            stats,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_list_response_serialization() {
        let response = ListResponse::new(vec![json!({"id": "a"})], 7, 2, 1);

        let json = serde_json::to_value(&response).unwrap();
        assert_eq!(json["success"], true);
        assert_eq!(json["total"], 7);
        assert_eq!(json["page"], 2);
        assert_eq!(json["limit"], 1);
        assert_eq!(json["data"][0]["id"], "a");
    }

    #[test]
    fn test_stats_response_serialization() {
        let mut stats = BTreeMap::new();
        stats.insert("kitchen".to_string(), 1);
        stats.insert("electronics".to_string(), 2);

        let json = serde_json::to_value(StatsResponse::new(stats)).unwrap();
        assert_eq!(
            json,
            json!({"success": true, "stats": {"electronics": 2, "kitchen": 1}})
        );
    }
}
