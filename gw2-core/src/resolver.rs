//! Deep info resolution.
//!
//! Account-level endpoints return shallow reference lists: bare ids,
//! partially-populated objects (`{"id": 7, "count": 250}`), or nulls for
//! empty slots. The resolver turns those into fully-populated objects by
//! fanning out batched lookups and splicing the results back into the
//! original positions.

use futures::future::try_join_all;
use serde_json::{json, Value};
use std::collections::HashMap;
use std::future::Future;
use tracing::debug;

use crate::error::ApiError;
use crate::selector::ResourceId;

/// Batch size used by the facade's auto-translate calls, matching the
/// remote API's page size.
pub const DEFAULT_BATCH_SIZE: usize = 100;

/// Resolves a shallow item list against `lookup`.
///
/// `lookup` receives at most `batch_size` ids per call and must return a
/// JSON array of full objects carrying an `id` field; all batches are
/// dispatched concurrently and any single failure fails the whole
/// resolution with no partial result.
///
/// The output preserves the input's length, order, and holes: nulls stay
/// null, bare ids become `{"id": ...}` extended with the matched object's
/// fields, and already-partial objects keep their own fields where the
/// lookup result does not overwrite them.
pub async fn resolve_deeper<F, Fut>(
    lookup: F,
    mut items: Vec<Value>,
    batch_size: usize,
) -> Result<Vec<Value>, ApiError>
where
    F: Fn(Vec<ResourceId>) -> Fut,
    Fut: Future<Output = Result<Value, ApiError>>,
{
    let batch_size = if batch_size == 0 {
        DEFAULT_BATCH_SIZE
    } else {
        batch_size
    };

    let mut lookup_ids = Vec::new();
    for item in &items {
        if let Some(id) = item_id(item) {
            lookup_ids.push(id);
        }
    }

    let batches: Vec<_> = lookup_ids
        .chunks(batch_size)
        .map(|batch| lookup(batch.to_vec()))
        .collect();

    debug!(ids = lookup_ids.len(), batches = batches.len(), "resolving deeper info");

    let results = try_join_all(batches).await?;

    let mut by_id: HashMap<ResourceId, Value> = HashMap::new();
    for result in results {
        let objects = result.as_array().ok_or_else(|| {
            ApiError::Usage("deep-info lookup must return a JSON array".to_string())
        })?;
        for object in objects {
            if let Some(id) = ResourceId::from_value(&object["id"]) {
                by_id.insert(id, object.clone());
            }
        }
    }

    for item in items.iter_mut() {
        let Some(id) = item_id(item) else {
            // Holes and objects without a usable id stay untouched.
            continue;
        };

        if !item.is_object() {
            let bare = item.take();
            *item = json!({ "id": bare });
        }

        if let Some(full) = by_id.get(&id) {
            merge_fields(item, full);
        }
    }

    Ok(items)
}

/// The identifier a shallow item contributes: the item itself when it is a
/// bare id, its `id` field when it is an object, nothing for holes.
fn item_id(item: &Value) -> Option<ResourceId> {
    if item.is_object() {
        return ResourceId::from_value(&item["id"]);
    }
    ResourceId::from_value(item)
}

/// Shallow-merges `source`'s fields onto `target`, overwriting existing
/// keys.
fn merge_fields(target: &mut Value, source: &Value) {
    let (Some(target), Some(source)) = (target.as_object_mut(), source.as_object()) else {
        return;
    };
    for (key, value) in source {
        target.insert(key.clone(), value.clone());
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::{Arc, Mutex};

    /// Lookup that answers every id with `{"id": id, "name": "item-<id>"}`
    /// and records each batch's size.
    fn recording_lookup(
        batch_sizes: Arc<Mutex<Vec<usize>>>,
    ) -> impl Fn(Vec<ResourceId>) -> std::pin::Pin<Box<dyn Future<Output = Result<Value, ApiError>>>>
    {
        move |ids: Vec<ResourceId>| {
            let batch_sizes = batch_sizes.clone();
            Box::pin(async move {
                batch_sizes.lock().unwrap().push(ids.len());
                let objects: Vec<Value> = ids
                    .iter()
                    .map(|id| json!({ "id": id.to_value(), "name": format!("item-{id}") }))
                    .collect();
                Ok(Value::Array(objects))
            })
        }
    }

    #[tokio::test]
    async fn holes_are_preserved_in_place() {
        let sizes = Arc::new(Mutex::new(Vec::new()));
        let items = vec![json!(5), Value::Null, json!({ "id": 7, "count": 250 })];

        let resolved = resolve_deeper(recording_lookup(sizes), items, 100)
            .await
            .unwrap();

        assert_eq!(resolved.len(), 3);
        assert_eq!(resolved[0], json!({ "id": 5, "name": "item-5" }));
        assert!(resolved[1].is_null());
        // Partial fields survive, looked-up fields are merged in.
        assert_eq!(resolved[2], json!({ "id": 7, "count": 250, "name": "item-7" }));
    }

    #[tokio::test]
    async fn large_lists_are_chunked_into_batches() {
        let sizes = Arc::new(Mutex::new(Vec::new()));
        let items: Vec<Value> = (0..250).map(|n| json!(n)).collect();

        let resolved = resolve_deeper(recording_lookup(sizes.clone()), items, 100)
            .await
            .unwrap();

        assert_eq!(*sizes.lock().unwrap(), vec![100, 100, 50]);
        assert_eq!(resolved.len(), 250);
        for (n, item) in resolved.iter().enumerate() {
            assert_eq!(item["id"], json!(n as i64));
            assert_eq!(item["name"], json!(format!("item-{n}")));
        }
    }

    #[tokio::test]
    async fn one_failed_batch_fails_the_resolution() {
        let calls = Arc::new(Mutex::new(0usize));
        let lookup = |ids: Vec<ResourceId>| {
            let calls = calls.clone();
            async move {
                let call = {
                    let mut calls = calls.lock().unwrap();
                    *calls += 1;
                    *calls
                };
                if call == 2 {
                    return Err(ApiError::Status(503));
                }
                let objects: Vec<Value> =
                    ids.iter().map(|id| json!({ "id": id.to_value() })).collect();
                Ok(Value::Array(objects))
            }
        };

        let items: Vec<Value> = (0..150).map(|n| json!(n)).collect();
        let err = resolve_deeper(lookup, items, 100).await.unwrap_err();

        assert!(matches!(err, ApiError::Status(503)));
    }

    #[tokio::test]
    async fn unmatched_ids_keep_their_id_object() {
        let lookup = |_ids: Vec<ResourceId>| async move { Ok(json!([{ "id": 1, "name": "only" }])) };

        let resolved = resolve_deeper(lookup, vec![json!(1), json!(2)], 100)
            .await
            .unwrap();

        assert_eq!(resolved[0], json!({ "id": 1, "name": "only" }));
        assert_eq!(resolved[1], json!({ "id": 2 }));
    }

    #[tokio::test]
    async fn string_ids_resolve_like_numeric_ones() {
        let lookup =
            |ids: Vec<ResourceId>| async move {
                let objects: Vec<Value> = ids
                    .iter()
                    .map(|id| json!({ "id": id.to_value(), "seen": true }))
                    .collect();
                Ok(Value::Array(objects))
            };

        let resolved = resolve_deeper(lookup, vec![json!("uuid-a"), json!("uuid-b")], 100)
            .await
            .unwrap();

        assert_eq!(resolved[0], json!({ "id": "uuid-a", "seen": true }));
        assert_eq!(resolved[1], json!({ "id": "uuid-b", "seen": true }));
    }

    #[tokio::test]
    async fn non_array_lookup_result_is_a_usage_error() {
        let lookup = |_ids: Vec<ResourceId>| async move { Ok(json!({ "not": "an array" })) };

        let err = resolve_deeper(lookup, vec![json!(1)], 100).await.unwrap_err();

        assert!(matches!(err, ApiError::Usage(_)));
    }

    #[tokio::test]
    async fn empty_input_issues_no_lookups() {
        let sizes = Arc::new(Mutex::new(Vec::new()));

        let resolved = resolve_deeper(recording_lookup(sizes.clone()), Vec::new(), 100)
            .await
            .unwrap();

        assert!(resolved.is_empty());
        assert!(sizes.lock().unwrap().is_empty());
    }
}
