use std::{fs, path::Path};

use super::models::credentials::Credentials;

pub const API_KEY_FILE_NAME: &str = "API-KEY.txt";
pub const IMGBB_KEY_FILE_NAME: &str = "IMGBB-KEY.txt";

const IMGBB_KEY_PLACEHOLDER: &str =
    "# Get your ImgBB API key from https://api.imgbb.com/ and paste it here";

pub fn load_credentials(dir: &Path) -> Credentials {
    let seedance_api_key = load_key(&dir.join(API_KEY_FILE_NAME));
    if seedance_api_key.is_none() {
        tracing::warn!(
            "no Seedance API key found, add it to {:?}",
            dir.join(API_KEY_FILE_NAME)
        );
    }

    let imgbb_key_path = dir.join(IMGBB_KEY_FILE_NAME);
    ensure_placeholder(&imgbb_key_path, IMGBB_KEY_PLACEHOLDER);

    let imgbb_api_key = load_key(&imgbb_key_path);
    if imgbb_api_key.is_none() {
        tracing::warn!("no ImgBB API key found, add it to {:?}", imgbb_key_path);
    }

    Credentials {
        seedance_api_key,
        imgbb_api_key,
    }
}

/// Returns the trimmed file contents, or `None` for a missing, empty, or commented-out key.
pub fn load_key(path: &Path) -> Option<String> {
    let contents = match fs::read_to_string(path) {
        Ok(contents) => contents,
        Err(e) => {
            tracing::debug!("load_key: could not read {:?}: {}", path, e);
            return None;
        }
    };

    let key = contents.trim();
    if key.is_empty() || key.starts_with('#') {
        return None;
    }

    Some(key.to_string())
}

fn ensure_placeholder(path: &Path, placeholder: &str) {
    if path.exists() {
        return;
    }

    match fs::write(path, placeholder) {
        Ok(_) => tracing::info!("created {:?}", path),
        Err(e) => tracing::warn!("ensure_placeholder: could not create {:?}: {}", path, e),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn load_key_trims_whitespace() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join(API_KEY_FILE_NAME);
        fs::write(&path, "  secret-key\n").unwrap();

        assert_eq!(load_key(&path), Some("secret-key".to_string()));
    }

    #[test]
    fn load_key_ignores_empty_and_commented_files() {
        let dir = tempfile::tempdir().unwrap();
        let empty = dir.path().join("empty.txt");
        let commented = dir.path().join("commented.txt");
        fs::write(&empty, "\n \n").unwrap();
        fs::write(&commented, IMGBB_KEY_PLACEHOLDER).unwrap();

        assert_eq!(load_key(&empty), None);
        assert_eq!(load_key(&commented), None);
        assert_eq!(load_key(&dir.path().join("missing.txt")), None);
    }

    #[test]
    fn load_credentials_creates_imgbb_placeholder() {
        let dir = tempfile::tempdir().unwrap();
        fs::write(dir.path().join(API_KEY_FILE_NAME), "ark-key").unwrap();

        let credentials = load_credentials(dir.path());

        assert_eq!(credentials.seedance_api_key.as_deref(), Some("ark-key"));
        assert!(credentials.imgbb_api_key.is_none());

        let placeholder = fs::read_to_string(dir.path().join(IMGBB_KEY_FILE_NAME)).unwrap();
        assert!(placeholder.starts_with('#'));
    }

    #[test]
    fn missing_keys_report_failures() {
        let credentials = Credentials::default();

        assert_eq!(
            credentials.seedance_api_key().unwrap_err().message,
            "Failed to load API key."
        );
        assert_eq!(
            credentials.imgbb_api_key().unwrap_err().message,
            "Failed to load ImgBB API key."
        );
    }

    #[test]
    fn existing_imgbb_key_is_left_alone() {
        let dir = tempfile::tempdir().unwrap();
        fs::write(dir.path().join(IMGBB_KEY_FILE_NAME), "bb-key\n").unwrap();

        let credentials = load_credentials(dir.path());

        assert_eq!(credentials.imgbb_api_key.as_deref(), Some("bb-key"));
        assert!(credentials.seedance_api_key.is_none());
    }
}
