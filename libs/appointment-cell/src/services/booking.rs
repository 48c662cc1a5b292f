use std::sync::Arc;

use tracing::{debug, info, warn};

use shared_database::ClinicStore;
use shared_models::{Appointment, AppError, NewAppointment};

use crate::models::{AppointmentError, CreateAppointmentRequest};
use crate::services::conflict::find_conflict;

pub struct BookingService {
    store: Arc<ClinicStore>,
}

impl BookingService {
    pub fn new(store: &Arc<ClinicStore>) -> Self {
        Self {
            store: Arc::clone(store),
        }
    }

    pub async fn list_appointments(&self) -> Vec<Appointment> {
        self.store.read().await.appointments().to_vec()
    }

    /// Validates references, runs the double-booking check and inserts, all
    /// under one write guard so no other booking can slip in between.
    pub async fn book_appointment(
        &self,
        request: CreateAppointmentRequest,
    ) -> Result<Appointment, AppError> {
        let slot = request.into_slot()?;
        debug!(
            "Booking patient {} with doctor {} at {}",
            slot.patient_id, slot.doctor_id, slot.date
        );

        let mut state = self.store.write().await;

        let (patient_name, doctor_name) =
            match (state.find_patient(slot.patient_id), state.find_doctor(slot.doctor_id)) {
                (Some(patient), Some(doctor)) => (patient.name.clone(), doctor.name.clone()),
                _ => return Err(AppointmentError::InvalidReference.into()),
            };

        if let Some(existing) = find_conflict(state.appointments(), &slot) {
            warn!(
                "Slot {} already taken by appointment {}",
                slot.date, existing.id
            );
            return Err(AppointmentError::Conflict.into());
        }

        let appointment = state.insert_appointment(NewAppointment {
            patient_id: slot.patient_id,
            patient_name,
            doctor_id: slot.doctor_id,
            doctor_name,
            date: slot.date,
        });
        info!("Booked appointment {}", appointment.id);

        Ok(appointment)
    }

    pub async fn delete_appointment(&self, appointment_id: Option<u64>) -> Result<(), AppError> {
        let removed = {
            let mut state = self.store.write().await;
            appointment_id.and_then(|id| state.remove_appointment(id))
        };

        let appointment = removed.ok_or(AppointmentError::NotFound)?;
        info!("Deleted appointment {}", appointment.id);
        Ok(())
    }
}
