/// localStorage key holding the access (bearer) token
pub const ACCESS_TOKEN_KEY: &str = "access_token";

/// localStorage key holding the refresh token
pub const REFRESH_TOKEN_KEY: &str = "refresh_token";

/// Generic message shown when login fails, whatever the cause
pub const INVALID_CREDENTIALS_MESSAGE: &str = "Invalid credentials";

pub const FETCH_APPLICATIONS_FAILED_MESSAGE: &str = "Failed to fetch applications.";

pub const UPDATE_STATUS_FAILED_MESSAGE: &str = "Failed to update status.";
