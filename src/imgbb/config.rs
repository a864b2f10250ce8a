pub const API_URL: &str = "https://api.imgbb.com/1/upload";
