use std::time::Duration;

use egui_kittest::Harness;
use griddle_ui::GriddleApp;
use griddle_ui::state::State;
use kittest::Queryable;
use wiremock::matchers::{method, path};
use wiremock::{Mock, MockServer, ResponseTemplate};

/// Time given to spawned commands between frames.
pub const NETWORK_WAIT: Duration = Duration::from_millis(50);

pub struct TestCtx<'a> {
    pub server: MockServer,
    harness: Harness<'a, GriddleApp>,
}

impl<'a> TestCtx<'a> {
    /// App pointed at a fresh mock server serving both resources.
    pub async fn new_app() -> Self {
        let server = MockServer::start().await;
        mount_rows(&server).await;

        let app = GriddleApp::new(State::test(server.uri()));
        let harness = Harness::new_eframe(|_| app);

        Self { server, harness }
    }

    pub fn harness_mut(&mut self) -> &mut Harness<'a, GriddleApp> {
        &mut self.harness
    }

    #[allow(unused)]
    pub fn harness(&self) -> &Harness<'a, GriddleApp> {
        &self.harness
    }

    /// Step frames, yielding to the network in between, until `label` shows up.
    pub async fn wait_for_label(&mut self, label: &str) -> bool {
        for _ in 0..40 {
            self.harness.step();
            if self.harness.query_by_label(label).is_some() {
                return true;
            }
            tokio::time::sleep(NETWORK_WAIT).await;
        }
        false
    }

    /// Step frames, yielding to the network in between, until `done` holds.
    #[allow(unused)]
    pub async fn wait_until(&mut self, mut done: impl FnMut(&mut GriddleApp) -> bool) -> bool {
        for _ in 0..40 {
            self.harness.step();
            if done(self.harness.state_mut()) {
                return true;
            }
            tokio::time::sleep(NETWORK_WAIT).await;
        }
        false
    }
}

pub fn cars_json() -> serde_json::Value {
    serde_json::json!([
        {"id": 1, "make": "Tesla", "model": "Model Y", "price": 44990, "electric": true},
        {"id": 2, "make": "Ford", "model": "F-150", "price": 36570, "electric": false},
        {"id": 3, "make": "BMW", "model": "i4", "price": null, "electric": true}
    ])
}

pub fn employees_json() -> serde_json::Value {
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

async fn mount_rows(server: &MockServer) {
    Mock::given(method("GET"))
        .and(path("/api/cars"))
        .respond_with(ResponseTemplate::new(200).set_body_json(cars_json()))
        .expect(1)
        .mount(server)
        .await;

    Mock::given(method("GET"))
        .and(path("/api/employees"))
        .respond_with(ResponseTemplate::new(200).set_body_json(employees_json()))
        .mount(server)
        .await;
}
