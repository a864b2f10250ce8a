pub mod imgbb_upload_response;
