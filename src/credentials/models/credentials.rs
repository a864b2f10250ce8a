use crate::{app::models::api_error::ApiError, credentials::errors::CredentialsApiError};

#[derive(Clone, Default)]
pub struct Credentials {
    pub seedance_api_key: Option<String>,
    pub imgbb_api_key: Option<String>,
}

impl Credentials {
    pub fn seedance_api_key(&self) -> Result<&str, ApiError> {
        match &self.seedance_api_key {
            Some(key) => Ok(key.as_str()),
            None => Err(CredentialsApiError::MissingSeedanceKey.value()),
        }
    }

    pub fn imgbb_api_key(&self) -> Result<&str, ApiError> {
        match &self.imgbb_api_key {
            Some(key) => Ok(key.as_str()),
            None => Err(CredentialsApiError::MissingImgbbKey.value()),
        }
    }
}

// Keys never show up in logs.
impl std::fmt::Debug for Credentials {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Credentials")
            .field("seedance_api_key", &self.seedance_api_key.is_some())
            .field("imgbb_api_key", &self.imgbb_api_key.is_some())
            .finish()
    }
}
