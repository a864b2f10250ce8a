pub mod create_task_spec;
