pub mod location;
pub mod setting;
