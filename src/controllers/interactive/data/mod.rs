pub mod frame_data;
pub mod navigator_config;
pub mod render_job;
