use shared_models::Appointment;

use crate::models::BookingSlot;

/// Finds an existing appointment that blocks `slot`.
///
/// A slot is blocked when an appointment on the exact same `date` shares
/// either the doctor or the patient. Two different patients seeing two
/// different doctors at the same date never collide.
pub fn find_conflict<'a>(existing: &'a [Appointment], slot: &BookingSlot) -> Option<&'a Appointment> {
    existing.iter().find(|a| {
        a.date == slot.date && (a.doctor_id == slot.doctor_id || a.patient_id == slot.patient_id)
    })
}
