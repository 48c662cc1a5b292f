use std::sync::Arc;

use axum::{middleware, Router};

use appointment_cell::router::appointment_routes;
use doctor_cell::router::doctor_routes;
use patient_cell::router::patient_routes;
use shared_database::ClinicStore;
use shared_utils::{
    cors::cors_middleware,
    routing::{not_found, reject_head},
};

pub fn create_router(store: Arc<ClinicStore>) -> Router {
    Router::new()
        .merge(doctor_routes(store.clone()))
        .merge(patient_routes(store.clone()))
        .merge(appointment_routes(store))
        .fallback(not_found)
        // CORS is the outer layer so rejected HEAD requests still carry it.
        .layer(middleware::from_fn(reject_head))
        .layer(middleware::from_fn(cors_middleware))
}
