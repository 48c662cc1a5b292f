pub mod booking;
pub mod conflict;

pub use booking::BookingService;
pub use conflict::find_conflict;
