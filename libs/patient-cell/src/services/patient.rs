use std::sync::Arc;

use tracing::{debug, info};

use shared_database::ClinicStore;
use shared_models::{AppError, Patient};

use crate::models::{PatientError, PatientPayload};

pub struct PatientService {
    store: Arc<ClinicStore>,
}

impl PatientService {
    pub fn new(store: &Arc<ClinicStore>) -> Self {
        Self {
            store: Arc::clone(store),
        }
    }

    pub async fn list_patients(&self) -> Vec<Patient> {
        self.store.read().await.patients().to_vec()
    }

    pub async fn create_patient(&self, payload: PatientPayload) -> Result<Patient, AppError> {
        let (name, phone) = payload.into_fields()?;

        let patient = self.store.write().await.insert_patient(name, phone);
        info!("Created patient {}", patient.id);

        Ok(patient)
    }

    pub async fn ensure_exists(&self, patient_id: Option<u64>) -> Result<u64, AppError> {
        let state = self.store.read().await;
        patient_id
            .filter(|id| state.find_patient(*id).is_some())
            .ok_or_else(|| PatientError::NotFound.into())
    }

    /// Replaces name and phone in place; the id never changes.
    pub async fn update_patient(
        &self,
        patient_id: u64,
        payload: PatientPayload,
    ) -> Result<Patient, AppError> {
        let (name, phone) = payload.into_fields()?;

        let mut state = self.store.write().await;
        let patient = state
            .find_patient_mut(patient_id)
            .ok_or(PatientError::NotFound)?;
        patient.name = name;
        patient.phone = phone;

        debug!("Updated patient {}", patient_id);
        Ok(patient.clone())
    }

    /// Deletes the patient and every appointment booked for them.
    pub async fn delete_patient(&self, patient_id: Option<u64>) -> Result<(), AppError> {
        let mut state = self.store.write().await;
        let (patient, cascaded) = patient_id
            .and_then(|id| state.remove_patient(id))
            .ok_or(PatientError::NotFound)?;

        info!(
            "Deleted patient {} with {} appointment(s)",
            patient.id, cascaded
        );
        Ok(())
    }
}
