pub mod linspace;
pub mod ports;
pub mod render_field_parallel_rayon;
pub mod render_field_serial;
