pub mod inventory;
pub mod order;
pub mod reservation;
pub mod restaurant;
pub mod table;
