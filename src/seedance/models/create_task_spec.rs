use serde::Serialize;

#[derive(Debug, Clone, Serialize)]
pub struct CreateTaskSpec {
    pub model: String,
    pub content: Vec<ContentItem>,
}

#[derive(Debug, Clone, Serialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum ContentItem {
    Text { text: String },
    ImageUrl { image_url: ImageUrl },
}

#[derive(Debug, Clone, Serialize)]
pub struct ImageUrl {
    pub url: String,
}

impl ContentItem {
    pub fn image_url(url: &str) -> Self {
        Self::ImageUrl {
            image_url: ImageUrl {
                url: url.to_string(),
            },
        }
    }
}
