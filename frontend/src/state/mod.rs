pub mod controller;
pub mod store;
