pub mod interactive;
pub mod ports;
