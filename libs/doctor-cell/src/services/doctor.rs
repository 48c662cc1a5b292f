use std::sync::Arc;

use tracing::debug;

use shared_database::ClinicStore;
use shared_models::Doctor;

pub struct DoctorService {
    store: Arc<ClinicStore>,
}

impl DoctorService {
    pub fn new(store: &Arc<ClinicStore>) -> Self {
        Self {
            store: Arc::clone(store),
        }
    }

    /// The seeded roster, in seed order. Doctors are never mutated.
    pub async fn list_doctors(&self) -> Vec<Doctor> {
        let state = self.store.read().await;
        debug!("Listing {} doctors", state.doctors().len());
        state.doctors().to_vec()
    }
}
