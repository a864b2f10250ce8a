pub mod seedance_duration;
pub mod seedance_model;
pub mod seedance_resolution;
pub mod seedance_task_status;
