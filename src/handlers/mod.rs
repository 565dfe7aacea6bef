pub mod estimate;
pub mod locations;
pub mod settings;
