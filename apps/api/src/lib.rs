pub mod router;
pub mod shutdown;
