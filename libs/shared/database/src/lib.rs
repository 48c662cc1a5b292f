pub mod seed;
pub mod store;

pub use store::{ClinicState, ClinicStore};
