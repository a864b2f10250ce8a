#![allow(dead_code)]

use std::path::Path;

use bytes::Bytes;
use seedance_node::{
    app::{
        envy::Envy,
        util::multipart::models::{
            file_properties::FileProperties, image_file_properties::ImageFileProperties,
        },
    },
    credentials::models::credentials::Credentials,
    AppState,
};
use serde_json::json;
use wiremock::{matchers, Mock, MockServer, ResponseTemplate};

pub const TASK_ID: &str = "cgt-20250601-abc";
pub const TASKS_PATH: &str = "/api/v3/contents/generations/tasks";
pub const IMGBB_PATH: &str = "/1/upload";
pub const VIDEO_PATH: &str = "/files/video.mp4";
pub const VIDEO_BYTES: &[u8] = b"\x00\x00\x00\x18ftypmp42 not really a video";

// Signature and IHDR chunk of a 2x3 PNG.
pub const PNG: [u8; 33] = [
    0x89, 0x50, 0x4E, 0x47, 0x0D, 0x0A, 0x1A, 0x0A, 0x00, 0x00, 0x00, 0x0D, 0x49, 0x48, 0x44, 0x52,
    0x00, 0x00, 0x00, 0x02, 0x00, 0x00, 0x00, 0x03, 0x08, 0x02, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00,
    0x00,
];

pub fn test_envy(server: &MockServer, output_dir: &Path) -> Envy {
    Envy {
        output_dir: output_dir.to_path_buf(),
        seedance_api_url: format!("{}{}", server.uri(), TASKS_PATH),
        imgbb_api_url: format!("{}{}", server.uri(), IMGBB_PATH),
        poll_max_attempts: 5,
        poll_interval_millis: 10,
        create_task_retry_millis: 10,
        http_timeout_secs: 2,
        ..Envy::default()
    }
}

pub fn test_credentials() -> Credentials {
    Credentials {
        seedance_api_key: Some("ark-key".to_string()),
        imgbb_api_key: Some("bb-key".to_string()),
    }
}

pub fn test_state(server: &MockServer, output_dir: &Path) -> AppState {
    AppState::new(test_envy(server, output_dir), test_credentials()).unwrap()
}

pub fn png_frame(field_name: &str) -> ImageFileProperties {
    ImageFileProperties::from_file_properties(FileProperties {
        id: "frame".to_string(),
        field_name: field_name.to_string(),
        file_name: "frame.png".to_string(),
        mime_type: mime::IMAGE_PNG,
        data: Bytes::from_static(&PNG),
    })
    .unwrap()
}

pub fn task_json(status: &str) -> serde_json::Value {
    json!({
        "id": TASK_ID,
        "model": "doubao-seedance-1-0-pro-250528",
        "status": status,
        "created_at": 1748736000,
        "updated_at": 1748736010
    })
}

pub fn succeeded_task_json(server: &MockServer) -> serde_json::Value {
    json!({
        "id": TASK_ID,
        "model": "doubao-seedance-1-0-pro-250528",
        "status": "succeeded",
        "content": { "video_url": format!("{}{}", server.uri(), VIDEO_PATH) },
        "created_at": 1748736000,
        "updated_at": 1748736060
    })
}

pub async fn mount_imgbb_success(server: &MockServer) {
    Mock::given(matchers::method("POST"))
        .and(matchers::path(IMGBB_PATH))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "data": {
                "id": "2ndCYJK",
                "url": "https://i.ibb.co/w04Prt6/frame.png",
                "display_url": "https://i.ibb.co/98W13PY/frame.png"
            },
            "success": true,
            "status": 200
        })))
        .mount(server)
        .await;
}

pub async fn mount_create_task_success(server: &MockServer) {
    Mock::given(matchers::method("POST"))
        .and(matchers::path(TASKS_PATH))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({ "id": TASK_ID })))
        .mount(server)
        .await;
}

pub async fn mount_task_statuses(server: &MockServer, running_polls: u64) {
    let task_path = format!("{}/{}", TASKS_PATH, TASK_ID);

    if running_polls > 0 {
        Mock::given(matchers::method("GET"))
            .and(matchers::path(task_path.as_str()))
            .respond_with(ResponseTemplate::new(200).set_body_json(task_json("running")))
            .up_to_n_times(running_polls)
            .mount(server)
            .await;
    }

    Mock::given(matchers::method("GET"))
        .and(matchers::path(task_path.as_str()))
        .respond_with(ResponseTemplate::new(200).set_body_json(succeeded_task_json(server)))
        .mount(server)
        .await;
}

pub async fn mount_video(server: &MockServer) {
    Mock::given(matchers::method("GET"))
        .and(matchers::path(VIDEO_PATH))
        .respond_with(ResponseTemplate::new(200).set_body_bytes(VIDEO_BYTES))
        .mount(server)
        .await;
}

pub struct MultipartBody {
    pub boundary: String,
    body: Vec<u8>,
}

impl MultipartBody {
    pub fn new() -> Self {
        Self {
            boundary: "seedance-test-boundary".to_string(),
            body: Vec::new(),
        }
    }

    pub fn text(mut self, name: &str, value: &str) -> Self {
        self.body.extend_from_slice(
            format!(
                "--{}\r\nContent-Disposition: form-data; name=\"{}\"\r\n\r\n{}\r\n",
                self.boundary, name, value
            )
            .as_bytes(),
        );
        self
    }

    pub fn file(mut self, name: &str, file_name: &str, content_type: &str, data: &[u8]) -> Self {
        self.body.extend_from_slice(
            format!(
                "--{}\r\nContent-Disposition: form-data; name=\"{}\"; filename=\"{}\"\r\nContent-Type: {}\r\n\r\n",
                self.boundary, name, file_name, content_type
            )
            .as_bytes(),
        );
        self.body.extend_from_slice(data);
        self.body.extend_from_slice(b"\r\n");
        self
    }

    pub fn content_type(&self) -> String {
        format!("multipart/form-data; boundary={}", self.boundary)
    }

    pub fn finish(mut self) -> Vec<u8> {
        self.body
            .extend_from_slice(format!("--{}--\r\n", self.boundary).as_bytes());
        self.body
    }
}
