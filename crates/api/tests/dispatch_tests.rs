mod common;

use std::sync::Arc;

use serde_json::json;

use api::gql::domains::supplies;
use api::gql::{build_schema, Arguments, DispatchError, FieldError, OperationRoot};
use common::*;

#[tokio::test]
async fn test_dispatching_supplies_forwards_filter_and_returns_sequence() {
    let store = Arc::new(RecordingStore::new().with_list_result(vec![
        record(json!({"id": "desk fan", "team": 3})),
        record(json!({"id": "whiteboard markers", "team": 3})),
    ]));
    let (_schema, table) = build_schema().unwrap();

    let result = table
        .dispatch(
            OperationRoot::Query,
            "supplies",
            args(json!({"team": 3})),
            store.clone(),
        )
        .await
        .unwrap();

    assert_eq!(
        result,
        json!([
            {"id": "desk fan", "team": 3},
            {"id": "whiteboard markers", "team": 3},
        ])
    );
    assert_eq!(
        store.calls(),
        vec![RecordedCall {
            op: "list",
            collection: "supplies".to_string(),
            filter: record(json!({"team": 3})),
        }]
    );
}

#[tokio::test]
async fn test_delete_supply_forwards_identifier_and_returns_result_unchanged() {
    let store = Arc::new(RecordingStore::new().with_delete_result(1));
    let (_schema, table) = build_schema().unwrap();

    let result = table
        .dispatch(
            OperationRoot::Mutation,
            "deleteSupply",
            args(json!({"id": "s1"})),
            store.clone(),
        )
        .await
        .unwrap();

    assert_eq!(result, json!(1));
    assert_eq!(
        store.calls(),
        vec![RecordedCall {
            op: "delete",
            collection: "supplies".to_string(),
            filter: record(json!({"id": "s1"})),
        }]
    );
}

#[tokio::test]
async fn test_unknown_field_never_reaches_a_handler() {
    let store = Arc::new(RecordingStore::new());
    let (_schema, table) = build_schema().unwrap();

    let err = table
        .dispatch(
            OperationRoot::Query,
            "people",
            Arguments::new(),
            store.clone(),
        )
        .await
        .unwrap_err();

    assert!(matches!(
        err,
        DispatchError::UnknownField {
            root: OperationRoot::Query,
            field,
        } if field == "people"
    ));
    assert!(store.calls().is_empty());
}

#[tokio::test]
async fn test_handler_failure_propagates_unchanged() {
    let store = Arc::new(RecordingStore::new().failing());
    let (_schema, table) = build_schema().unwrap();

    let err = table
        .dispatch(
            OperationRoot::Query,
            "supplies",
            Arguments::new(),
            store.clone(),
        )
        .await
        .unwrap_err();

    // The store's own failure detail must survive dispatch untouched.
    assert!(matches!(
        &err,
        DispatchError::Handler(FieldError::Store(_))
    ));
    assert_eq!(err.to_string(), "unknown collection: supplies");
}

#[tokio::test]
async fn test_invalid_arguments_are_rejected_before_the_store() {
    let store = Arc::new(RecordingStore::new());
    let (_schema, table) = build_schema().unwrap();

    let err = table
        .dispatch(
            OperationRoot::Query,
            "supplies",
            args(json!({"color": "red"})),
            store.clone(),
        )
        .await
        .unwrap_err();

    assert!(matches!(
        err,
        DispatchError::Handler(FieldError::InvalidArguments { field, .. }) if field == "supplies"
    ));
    assert!(store.calls().is_empty());
}

#[tokio::test]
async fn test_composition_is_transparent() {
    let store = seeded_store();
    let (_schema, table) = build_schema().unwrap();

    let dispatched = table
        .dispatch(
            OperationRoot::Query,
            "supplies",
            args(json!({"team": 3})),
            store.clone(),
        )
        .await
        .unwrap();

    let module = supplies::module();
    let direct_handler = module
        .resolvers
        .get(OperationRoot::Query, "supplies")
        .unwrap()
        .clone();
    let direct = direct_handler(store.clone(), args(json!({"team": 3})))
        .await
        .unwrap();

    assert_eq!(dispatched, direct);
    assert_eq!(dispatched, json!([{"id": "desk fan", "team": 3}]));
}

#[tokio::test]
async fn test_equipment_operations_round_trip_through_the_store() {
    let store = seeded_store();
    let (_schema, table) = build_schema().unwrap();

    let developer_gear = table
        .dispatch(
            OperationRoot::Query,
            "equipments",
            args(json!({"used_by": "developer"})),
            store.clone(),
        )
        .await
        .unwrap();
    assert_eq!(developer_gear.as_array().unwrap().len(), 2);

    let removed = table
        .dispatch(
            OperationRoot::Mutation,
            "deleteEquipment",
            args(json!({"id": "notebook"})),
            store.clone(),
        )
        .await
        .unwrap();
    assert_eq!(removed, json!(1));

    let remaining = table
        .dispatch(
            OperationRoot::Query,
            "equipments",
            args(json!({"used_by": "developer"})),
            store.clone(),
        )
        .await
        .unwrap();
    assert_eq!(remaining, json!([
        {"id": "monitor", "used_by": "developer", "count": 28, "new_or_used": "used"},
    ]));
}
