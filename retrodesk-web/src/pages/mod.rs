pub mod desktop;
pub mod not_found;
pub mod rider;
