//! Whole-app tests: route, load, edit and write-back against a mock backend.

mod common;

use egui::Key;
use griddle_business::{
    Car, CellRef, Employee, GridState, Route, RowId, UpdateStatusCompute,
};
use griddle_ui::GriddleApp;
use kittest::Queryable;
use wiremock::matchers::{body_partial_json, method, path};
use wiremock::{Mock, ResponseTemplate};

use crate::common::TestCtx;

fn start_edit(app: &mut GriddleApp, cell: CellRef) {
    let grid = app.state_mut().ctx.state_mut::<GridState<Employee>>();
    assert!(grid.start_editing_cell(cell), "cell should be editable");
}

fn set_buffer(app: &mut GriddleApp, text: &str) {
    let grid = app.state_mut().ctx.state_mut::<GridState<Employee>>();
    if let Some(session) = grid.editing_mut() {
        session.buffer = text.to_owned();
    }
}

async fn employees_page(ctx: &mut TestCtx<'_>) {
    assert!(ctx.wait_for_label("Employees").await);
    ctx.harness_mut().get_by_label("Employees").click();
    assert!(ctx.wait_for_label("Alice").await, "employees should load");
}

#[tokio::test]
async fn test_cars_page_loads_on_start() {
    let mut ctx = TestCtx::new_app().await;

    assert!(ctx.wait_for_label("Model Y").await, "cars should load");
    // The footer summary is published one frame after the rows.
    ctx.harness_mut().step();
    let harness = ctx.harness();
    assert!(harness.query_by_label("Car inventory").is_some());
    assert!(harness.query_by_label("$44,990").is_some());
    assert!(harness.query_by_label("3 rows").is_some());
    assert_eq!(
        harness.state().state().ctx.state::<GridState<Car>>().rows().len(),
        3
    );
}

#[tokio::test]
async fn test_nav_switches_to_employees() {
    let mut ctx = TestCtx::new_app().await;

    employees_page(&mut ctx).await;

    let app = ctx.harness().state();
    assert_eq!(*app.state().ctx.state::<Route>(), Route::Employees);
    assert!(ctx.harness().query_by_label("Employee directory").is_some());
    assert!(ctx.harness().query_by_label("Employee Name").is_some());
}

#[tokio::test]
async fn test_empty_name_shows_toast_and_reverts() {
    let mut ctx = TestCtx::new_app().await;
    employees_page(&mut ctx).await;
    Mock::given(method("PUT"))
        .respond_with(ResponseTemplate::new(200))
        .expect(0)
        .mount(&ctx.server)
        .await;

    let cell = CellRef::new(RowId(1), "name");
    start_edit(ctx.harness_mut().state_mut(), cell);
    ctx.harness_mut().step();
    ctx.harness_mut().step();
    assert!(ctx.harness().query_by_value("Alice").is_some(), "editor shows value");

    set_buffer(ctx.harness_mut().state_mut(), "   ");
    ctx.harness_mut().key_press(Key::Enter);

    assert!(ctx.wait_for_label("value cannot be empty").await);
    let grid = ctx
        .harness()
        .state()
        .state()
        .ctx
        .state::<GridState<Employee>>();
    assert!(grid.editing().is_none());
    assert_eq!(grid.row(RowId(1)).unwrap().name, "Alice");
}

#[tokio::test]
async fn test_accepted_edit_sends_put() {
    let mut ctx = TestCtx::new_app().await;
    employees_page(&mut ctx).await;
    Mock::given(method("PUT"))
        .and(path("/api/employees/2"))
        .and(body_partial_json(serde_json::json!({"id": 2, "position": "Lead Designer"})))
        .respond_with(ResponseTemplate::new(200))
        .expect(1)
        .mount(&ctx.server)
        .await;

    start_edit(ctx.harness_mut().state_mut(), CellRef::new(RowId(2), "position"));
    ctx.harness_mut().step();
    ctx.harness_mut().step();
    set_buffer(ctx.harness_mut().state_mut(), "Lead Designer");
    ctx.harness_mut().key_press(Key::Enter);

    let saved = ctx
        .wait_until(|app| {
            app.state()
                .ctx
                .cached::<UpdateStatusCompute<Employee>>()
                .is_some_and(|status| status.stats.saved == 1)
        })
        .await;
    assert!(saved, "PUT should complete");
    assert!(ctx.harness().query_by_label("Lead Designer").is_some());
}
