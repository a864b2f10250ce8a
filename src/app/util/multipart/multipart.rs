use axum::extract::Multipart;
use mime::Mime;
use uuid::Uuid;

use crate::app::models::api_error::ApiError;

use super::models::{file_properties::FileProperties, multipart_form::MultipartForm};

pub async fn get_form(mut multipart: Multipart) -> Result<MultipartForm, ApiError> {
    let mut form = MultipartForm::default();

    while let Some(field) = multipart.next_field().await? {
        let field_name = field.name().unwrap_or("file").to_string();

        let Some(file_name) = field.file_name().map(|f| f.to_string()) else {
            let text = field.text().await?;
            form.fields.insert(field_name, text);
            continue;
        };

        let mime_type = field
            .content_type()
            .and_then(|c| c.parse::<Mime>().ok())
            .unwrap_or(mime::APPLICATION_OCTET_STREAM);
        let data = field.bytes().await?;

        form.files.push(FileProperties {
            id: Uuid::new_v4().to_string(),
            field_name,
            file_name,
            mime_type,
            data,
        });
    }

    Ok(form)
}
