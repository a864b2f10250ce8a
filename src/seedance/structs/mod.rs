pub mod create_task_response;
pub mod seedance_error_response;
pub mod seedance_task_response;
