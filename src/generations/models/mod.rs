pub mod generated_video;
pub mod generation_options;
