use shared_models::Doctor;

const SEED_DOCTORS: [(u64, &str, &str); 3] = [
    (1, "Dr. Smith", "Cardiology"),
    (2, "Dr. Johnson", "Dermatology"),
    (3, "Dr. Patel", "Pediatrics"),
];

/// The fixed doctor roster every store starts with.
pub fn seed_doctors() -> Vec<Doctor> {
    SEED_DOCTORS
        .iter()
        .map(|&(id, name, specialty)| Doctor {
            id,
            name: name.to_string(),
            specialty: specialty.to_string(),
        })
        .collect()
}
