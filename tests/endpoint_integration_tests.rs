//! Endpoint smoke suite against a running clinic server.
//!
//! Start the server (`cargo run -p clinic-api`) on a fresh process, then run
//! `cargo run -p endpoint-smoke-tests`. The suite creates and deletes its own
//! patients and appointments, so it expects empty collections at start.
//! Override the target with `CLINIC_BASE_URL`.

use reqwest::{Client, Method, Response, StatusCode};
use serde_json::{json, Value};

const DEFAULT_BASE_URL: &str = "http://localhost:3000";

type SmokeResult<T> = Result<T, Box<dyn std::error::Error>>;

pub struct ApiTestClient {
    client: Client,
    base_url: String,
}

impl ApiTestClient {
    pub fn new() -> Self {
        Self {
            client: Client::new(),
            base_url: std::env::var("CLINIC_BASE_URL").unwrap_or_else(|_| DEFAULT_BASE_URL.to_string()),
        }
    }

    pub async fn send(&self, method: Method, path: &str, body: Option<Value>) -> SmokeResult<Response> {
        let mut request = self.client.request(method, format!("{}{}", self.base_url, path));
        if let Some(body) = body {
            request = request.json(&body);
        }
        Ok(request.send().await?)
    }

    pub async fn get(&self, path: &str) -> SmokeResult<Response> {
        self.send(Method::GET, path, None).await
    }

    pub async fn post(&self, path: &str, body: Value) -> SmokeResult<Response> {
        self.send(Method::POST, path, Some(body)).await
    }

    pub async fn put(&self, path: &str, body: Value) -> SmokeResult<Response> {
        self.send(Method::PUT, path, Some(body)).await
    }

    pub async fn delete(&self, path: &str) -> SmokeResult<Response> {
        self.send(Method::DELETE, path, None).await
    }
}

/// Test results tracker
#[derive(Debug, Default)]
pub struct TestResults {
    pub passed: u32,
    pub failed: u32,
    pub failures: Vec<String>,
}

impl TestResults {
    pub fn pass(&mut self, test_name: &str) {
        self.passed += 1;
        println!("✅ {}", test_name);
    }

    pub fn fail(&mut self, test_name: &str, error: &str) {
        self.failed += 1;
        self.failures.push(format!("{}: {}", test_name, error));
        println!("❌ {}: {}", test_name, error);
    }

    /// Records a check that expects `expected` status and, when given, an
    /// exact JSON body.
    pub async fn expect(
        &mut self,
        test_name: &str,
        response: SmokeResult<Response>,
        expected: StatusCode,
        body: Option<Value>,
    ) -> Option<Value> {
        let response = match response {
            Ok(response) => response,
            Err(e) => {
                self.fail(test_name, &e.to_string());
                return None;
            }
        };

        let status = response.status();
        let actual: Value = response.json().await.unwrap_or(Value::Null);

        if status != expected {
            self.fail(test_name, &format!("Status: {} (wanted {})", status, expected));
        } else if body.as_ref().is_some_and(|b| b != &actual) {
            self.fail(test_name, &format!("Body: {}", actual));
        } else {
            self.pass(test_name);
        }
        Some(actual)
    }

    pub fn summary(&self) {
        println!("\n📊 Test Summary:");
        println!("✅ Passed: {}", self.passed);
        println!("❌ Failed: {}", self.failed);

        if !self.failures.is_empty() {
            println!("\n🔍 Failures:");
            for failure in &self.failures {
                println!("  - {}", failure);
            }
        }
    }
}

pub async fn run_endpoint_tests() -> TestResults {
    let client = ApiTestClient::new();
    let mut results = TestResults::default();

    println!("🚀 Starting Endpoint Smoke Tests");
    println!("📍 Base URL: {}", client.base_url);

    println!("\n👨‍⚕️ Doctors");
    results
        .expect(
            "List Doctors",
            client.get("/doctors").await,
            StatusCode::OK,
            Some(json!([
                { "id": 1, "name": "Dr. Smith", "specialty": "Cardiology" },
                { "id": 2, "name": "Dr. Johnson", "specialty": "Dermatology" },
                { "id": 3, "name": "Dr. Patel", "specialty": "Pediatrics" }
            ])),
        )
        .await;

    println!("\n🧑 Patients");
    let created = results
        .expect(
            "Create Patient",
            client.post("/patients", json!({ "name": "Smoke Alice", "phone": "555-1111" })).await,
            StatusCode::CREATED,
            None,
        )
        .await;
    let patient_id = created.as_ref().and_then(|p| p["id"].as_u64()).unwrap_or(0);

    results
        .expect(
            "Create Patient Missing Phone",
            client.post("/patients", json!({ "name": "No Phone" })).await,
            StatusCode::BAD_REQUEST,
            Some(json!({ "error": "Name and phone are required" })),
        )
        .await;

    results
        .expect(
            "Update Patient",
            client
                .put(&format!("/patients/{}", patient_id), json!({ "name": "Smoke Alicia", "phone": "555-2222" }))
                .await,
            StatusCode::OK,
            Some(json!({ "id": patient_id, "name": "Smoke Alicia", "phone": "555-2222" })),
        )
        .await;

    println!("\n📅 Appointments");
    let booking = json!({ "patientId": patient_id, "doctorId": 1, "date": "2099-01-01T10:00" });
    let booked = results
        .expect("Book Appointment", client.post("/appointments", booking.clone()).await, StatusCode::CREATED, None)
        .await;

    results
        .expect(
            "Double Booking Rejected",
            client.post("/appointments", booking).await,
            StatusCode::BAD_REQUEST,
            Some(json!({ "error": "Conflict: doctor or patient already booked at that time" })),
        )
        .await;

    results
        .expect(
            "Unknown Patient Rejected",
            client
                .post("/appointments", json!({ "patientId": 999999, "doctorId": 1, "date": "2099-01-02T10:00" }))
                .await,
            StatusCode::BAD_REQUEST,
            Some(json!({ "error": "Invalid patientId or doctorId" })),
        )
        .await;

    if let Some(appointment_id) = booked.as_ref().and_then(|a| a["id"].as_u64()) {
        results
            .expect(
                "Delete Appointment",
                client.delete(&format!("/appointments/{}", appointment_id)).await,
                StatusCode::OK,
                Some(json!({ "success": true })),
            )
            .await;
    }

    results
        .expect(
            "Delete Patient",
            client.delete(&format!("/patients/{}", patient_id)).await,
            StatusCode::OK,
            Some(json!({ "success": true })),
        )
        .await;

    println!("\n🚧 Routing");
    results
        .expect(
            "Unknown Route",
            client.get("/unknown").await,
            StatusCode::NOT_FOUND,
            Some(json!({ "error": "Not Found" })),
        )
        .await;

    match client.send(Method::OPTIONS, "/patients", None).await {
        Ok(response) if response.status() == StatusCode::NO_CONTENT => {
            if response.headers().get("access-control-allow-origin").is_some() {
                results.pass("CORS Preflight");
            } else {
                results.fail("CORS Preflight", "Missing Access-Control-Allow-Origin");
            }
        }
        Ok(response) => results.fail("CORS Preflight", &format!("Status: {}", response.status())),
        Err(e) => results.fail("CORS Preflight", &e.to_string()),
    }

    results
}

/// Entry point for endpoint tests
#[tokio::main]
async fn main() {
    let results = run_endpoint_tests().await;
    results.summary();

    if results.failed > 0 {
        std::process::exit(1);
    }
}
