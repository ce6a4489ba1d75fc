use std::env;
use std::path::Path;

// Default configuration constants
pub const DEFAULT_HOST: &str = "127.0.0.1";
pub const DEFAULT_PORT: u16 = 5000;
pub const DEFAULT_DATA_FILE: &str = "MockData/mock_ec2.json";
pub const DEFAULT_FRONTEND_ORIGIN: &str = "http://localhost:3000";

pub fn load_env_file(env_file: Option<&str>) {
    if let Some(path) = env_file {
        dotenvy::from_path(Path::new(path)).ok();
    } else {
        dotenvy::dotenv().ok();
    }
}

pub fn get_data_file() -> String {
    env::var("MOCK_DATA_PATH").unwrap_or_else(|_| DEFAULT_DATA_FILE.to_string())
}

pub fn get_frontend_origin() -> String {
    sanitize_origin(&env::var("FRONTEND_ORIGIN").unwrap_or_else(|_| DEFAULT_FRONTEND_ORIGIN.to_string()))
}

pub fn sanitize_origin(raw: &str) -> String {
    let trimmed = raw.trim().trim_end_matches('/');
    if trimmed.is_empty() {
        DEFAULT_FRONTEND_ORIGIN.to_string()
    } else {
        trimmed.to_string()
    }
}
