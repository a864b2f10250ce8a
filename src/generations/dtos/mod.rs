pub mod generate_video_dto;
