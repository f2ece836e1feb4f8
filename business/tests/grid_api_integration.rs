//! Grid load and write-back against a mock REST backend.

#![cfg(not(target_arch = "wasm32"))]

use std::time::Duration;

use griddle_business::{
    BusinessConfig, CellRef, CommitOutcome, DispatchPolicy, Employee, GridState, RejectPolicy,
    RowId, RowsCompute, UpdateStatusCompute, ValidationError, build_ctx, commit_and_dispatch,
    install_loaded_rows, load_on_ready,
};
use griddle_states::StateCtx;
use wiremock::matchers::{body_partial_json, method, path};
use wiremock::{Mock, MockServer, ResponseTemplate};

fn employees_json() -> serde_json::Value {
    serde_json::json!([
        {
            "id": 1,
            "name": "Alice",
            "position": "Engineer",
            "department": "Engineering",
            "salary": 120000,
            "startDate": "2021-03-15",
            "email": "alice@example.com"
        },
        {
            "id": 2,
            "name": "Bob",
            "position": "Designer",
            "department": "Design",
            "salary": 95000,
            "startDate": "2022-07-01",
            "email": "bob@example.com"
        }
    ])
}

async fn mount_employees(server: &MockServer) {
    Mock::given(method("GET"))
        .and(path("/api/employees"))
        .respond_with(ResponseTemplate::new(200).set_body_json(employees_json()))
        .expect(1)
        .mount(server)
        .await;
}

/// Let spawned commands finish, then apply their results.
async fn settle(ctx: &mut StateCtx) {
    tokio::time::sleep(Duration::from_millis(200)).await;
    ctx.sync_computes();
    install_loaded_rows::<Employee>(ctx);
    ctx.run_computed();
}

async fn loaded_ctx(config: BusinessConfig) -> StateCtx {
    let mut ctx = build_ctx(config);
    assert!(load_on_ready::<Employee>(&mut ctx));
    assert!(!load_on_ready::<Employee>(&mut ctx), "grid-ready loads once");
    settle(&mut ctx).await;
    assert_eq!(ctx.state::<GridState<Employee>>().rows().len(), 2);
    ctx
}

fn edit_name(ctx: &mut StateCtx, id: u64, text: &str) -> CommitOutcome<Employee> {
    let grid = ctx.state_mut::<GridState<Employee>>();
    assert!(grid.start_editing_cell(CellRef::new(RowId(id), "name")));
    if let Some(session) = grid.editing_mut() {
        session.buffer = text.to_owned();
    }
    commit_and_dispatch::<Employee>(ctx)
}

#[tokio::test]
async fn accepted_edit_sends_one_put_with_new_value() {
    let server = MockServer::start().await;
    mount_employees(&server).await;
    Mock::given(method("PUT"))
        .and(path("/api/employees/1"))
        .and(body_partial_json(serde_json::json!({"id": 1, "name": "Alicia"})))
        .respond_with(ResponseTemplate::new(200))
        .expect(1)
        .mount(&server)
        .await;

    let mut ctx = loaded_ctx(BusinessConfig::new(server.uri())).await;

    let outcome = edit_name(&mut ctx, 1, "Alicia");
    assert!(outcome.is_accepted());
    settle(&mut ctx).await;

    let status = ctx.cached::<UpdateStatusCompute<Employee>>().unwrap();
    assert_eq!(status.stats.saved, 1);
    assert_eq!(status.stats.failed, 0);
    assert_eq!(status.stats.in_flight, 0);
}

#[tokio::test]
async fn rejected_edit_sends_nothing_by_default() {
    let server = MockServer::start().await;
    mount_employees(&server).await;
    Mock::given(method("PUT"))
        .respond_with(ResponseTemplate::new(200))
        .expect(0)
        .mount(&server)
        .await;

    let mut ctx = loaded_ctx(BusinessConfig::new(server.uri())).await;

    let outcome = edit_name(&mut ctx, 2, " alice ");
    assert!(matches!(
        outcome,
        CommitOutcome::Rejected {
            error: ValidationError::Duplicate,
            ..
        }
    ));
    settle(&mut ctx).await;

    let grid = ctx.state::<GridState<Employee>>();
    assert_eq!(grid.row(RowId(2)).unwrap().name, "Bob");
    assert_eq!(grid.notifications().len(), 1);
}

#[tokio::test]
async fn every_commit_policy_writes_rejected_edits() {
    let server = MockServer::start().await;
    mount_employees(&server).await;
    Mock::given(method("PUT"))
        .and(path("/api/employees/2"))
        .and(body_partial_json(serde_json::json!({"name": "alice"})))
        .respond_with(ResponseTemplate::new(200))
        .expect(1)
        .mount(&server)
        .await;

    let config = BusinessConfig {
        reject_policy: RejectPolicy::Revert,
        dispatch_policy: DispatchPolicy::EveryCommit,
        ..BusinessConfig::new(server.uri())
    };
    let mut ctx = loaded_ctx(config).await;

    let outcome = edit_name(&mut ctx, 2, "alice");
    assert!(matches!(outcome, CommitOutcome::Rejected { .. }));
    settle(&mut ctx).await;

    assert_eq!(ctx.state::<GridState<Employee>>().row(RowId(2)).unwrap().name, "Bob");
}

#[tokio::test]
async fn failed_put_is_counted_not_rolled_back() {
    let server = MockServer::start().await;
    mount_employees(&server).await;
    Mock::given(method("PUT"))
        .and(path("/api/employees/1"))
        .respond_with(
            ResponseTemplate::new(500).set_body_json(serde_json::json!({"message": "db down"})),
        )
        .mount(&server)
        .await;

    let mut ctx = loaded_ctx(BusinessConfig::new(server.uri())).await;

    edit_name(&mut ctx, 1, "Alicia");
    settle(&mut ctx).await;

    let status = ctx.cached::<UpdateStatusCompute<Employee>>().unwrap();
    assert_eq!(status.stats.failed, 1);
    assert_eq!(status.stats.last_error.as_deref(), Some("status 500: db down"));
    assert_eq!(
        ctx.state::<GridState<Employee>>().row(RowId(1)).unwrap().name,
        "Alicia"
    );
}

#[tokio::test]
async fn failed_load_keeps_status_and_message() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/api/employees"))
        .respond_with(ResponseTemplate::new(503).set_body_string("maintenance"))
        .expect(1)
        .mount(&server)
        .await;

    let mut ctx = build_ctx(BusinessConfig::new(server.uri()));
    load_on_ready::<Employee>(&mut ctx);
    settle(&mut ctx).await;

    let rows = ctx.cached::<RowsCompute<Employee>>().unwrap();
    assert!(matches!(
        rows.result,
        griddle_business::RowsResult::Error {
            status: Some(503),
            ..
        }
    ));
    assert_eq!(rows.error_message(), Some("status 503: maintenance"));
    assert!(ctx.state::<GridState<Employee>>().rows().is_empty());
}
