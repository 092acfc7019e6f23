use serde::Serialize;

use crate::models::Purpose;

/// Body of a provider search request
#[derive(Debug, Clone, Serialize)]
pub struct SearchRequest {
    pub purpose: Purpose,
    /// Provider location codes to search in
    pub locations_ids: Vec<u32>,
    /// Zero-based page index; only the first page is ever requested
    pub page: u32,
    pub langs: String,
    /// Sort index, "latest" returns newest listings first
    pub index: String,
}

impl SearchRequest {
    pub fn latest(purpose: Purpose, location_ids: &[u32]) -> Self {
        Self {
            purpose,
            locations_ids: location_ids.to_vec(),
            page: 0,
            langs: "en".to_string(),
            index: "latest".to_string(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn latest_request_body() {
        let body = serde_json::to_value(SearchRequest::latest(Purpose::Sale, &[9117, 9118])).unwrap();
        assert_eq!(
            body,
            json!({
                "purpose": "for-sale",
                "locations_ids": [9117, 9118],
                "page": 0,
                "langs": "en",
                "index": "latest"
            })
        );
    }
}
