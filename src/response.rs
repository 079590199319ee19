//! Response envelopes: `{"data": ...}` for single values, `{"data": [...], "meta": {"count": n}}` for lists.

use axum::{http::StatusCode, Json};
use serde::Serialize;

#[derive(Serialize)]
pub struct Envelope<T> {
    pub data: T,
}

#[derive(Serialize)]
pub struct ListEnvelope<T> {
    pub data: Vec<T>,
    pub meta: ListMeta,
}

#[derive(Serialize)]
pub struct ListMeta {
    pub count: usize,
}

/// 201 with the created value.
pub fn created<T: Serialize>(data: T) -> (StatusCode, Json<Envelope<T>>) {
    (StatusCode::CREATED, Json(Envelope { data }))
}

pub fn ok<T: Serialize>(data: T) -> (StatusCode, Json<Envelope<T>>) {
    (StatusCode::OK, Json(Envelope { data }))
}

pub fn listed<T: Serialize>(data: Vec<T>) -> (StatusCode, Json<ListEnvelope<T>>) {
    let count = data.len();
    (
        StatusCode::OK,
        Json(ListEnvelope {
            data,
            meta: ListMeta { count },
        }),
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn list_envelope_counts_items() {
        let (status, Json(body)) = listed(vec![3, 1, 2]);
        assert_eq!(status, StatusCode::OK);
        let json = serde_json::to_value(&body).unwrap();
        assert_eq!(json, serde_json::json!({"data": [3, 1, 2], "meta": {"count": 3}}));
    }

    #[test]
    fn single_envelope_has_no_meta() {
        let (status, Json(body)) = created("x");
        assert_eq!(status, StatusCode::CREATED);
        assert_eq!(serde_json::to_value(&body).unwrap(), serde_json::json!({"data": "x"}));
    }
}
