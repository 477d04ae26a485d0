pub mod address;
pub mod model;
pub mod ports;
