use tokio::sync::{RwLock, RwLockReadGuard, RwLockWriteGuard};
use tracing::debug;

use shared_models::{Appointment, Doctor, NewAppointment, Patient};

use crate::seed::seed_doctors;

/// The three clinic collections. Every mutation that spans more than one
/// step must happen under a single [`ClinicStore::write`] guard.
#[derive(Debug)]
pub struct ClinicState {
    doctors: Vec<Doctor>,
    patients: Vec<Patient>,
    appointments: Vec<Appointment>,
    next_patient_id: u64,
    next_appointment_id: u64,
}

impl ClinicState {
    pub fn seeded() -> Self {
        Self {
            doctors: seed_doctors(),
            patients: Vec::new(),
            appointments: Vec::new(),
            next_patient_id: 1,
            next_appointment_id: 1,
        }
    }

    pub fn doctors(&self) -> &[Doctor] {
        &self.doctors
    }

    pub fn patients(&self) -> &[Patient] {
        &self.patients
    }

    pub fn appointments(&self) -> &[Appointment] {
        &self.appointments
    }

    pub fn find_doctor(&self, id: u64) -> Option<&Doctor> {
        self.doctors.iter().find(|d| d.id == id)
    }

    pub fn find_patient(&self, id: u64) -> Option<&Patient> {
        self.patients.iter().find(|p| p.id == id)
    }

    pub fn find_patient_mut(&mut self, id: u64) -> Option<&mut Patient> {
        self.patients.iter_mut().find(|p| p.id == id)
    }

    pub fn insert_patient(&mut self, name: String, phone: String) -> Patient {
        let patient = Patient {
            id: self.next_patient_id,
            name,
            phone,
        };
        self.next_patient_id += 1;
        self.patients.push(patient.clone());
        patient
    }

    /// Removes the patient together with every appointment booked for them.
    /// Returns the removed patient and the number of cascaded appointments.
    pub fn remove_patient(&mut self, id: u64) -> Option<(Patient, usize)> {
        let index = self.patients.iter().position(|p| p.id == id)?;
        let patient = self.patients.remove(index);

        let before = self.appointments.len();
        self.appointments.retain(|a| a.patient_id != id);
        let cascaded = before - self.appointments.len();

        debug!("Removed patient {} and {} appointments", id, cascaded);
        Some((patient, cascaded))
    }

    pub fn insert_appointment(&mut self, new: NewAppointment) -> Appointment {
        let appointment = Appointment {
            id: self.next_appointment_id,
            patient_id: new.patient_id,
            patient_name: new.patient_name,
            doctor_id: new.doctor_id,
            doctor_name: new.doctor_name,
            date: new.date,
        };
        self.next_appointment_id += 1;
        self.appointments.push(appointment.clone());
        appointment
    }

    pub fn remove_appointment(&mut self, id: u64) -> Option<Appointment> {
        let index = self.appointments.iter().position(|a| a.id == id)?;
        Some(self.appointments.remove(index))
    }
}

impl Default for ClinicState {
    fn default() -> Self {
        Self::seeded()
    }
}

/// Process-wide in-memory store shared by every cell.
#[derive(Debug, Default)]
pub struct ClinicStore {
    state: RwLock<ClinicState>,
}

impl ClinicStore {
    pub fn new() -> Self {
        Self {
            state: RwLock::new(ClinicState::seeded()),
        }
    }

    pub async fn read(&self) -> RwLockReadGuard<'_, ClinicState> {
        self.state.read().await
    }

    pub async fn write(&self) -> RwLockWriteGuard<'_, ClinicState> {
        self.state.write().await
    }
}
