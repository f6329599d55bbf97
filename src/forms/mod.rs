pub mod reservations;
pub mod settings;
