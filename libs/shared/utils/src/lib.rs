pub mod cors;
pub mod json;
pub mod path;
pub mod routing;
pub mod test_utils;
