//! Account and authentication types

use serde::{Deserialize, Serialize};

/// The SMB company a user belongs to
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Company {
    pub id: String,
    pub name: String,
    pub legal_name: String,
    /// Singapore Unique Entity Number
    pub uen: String,
    pub gst_registered: bool,
    pub gst_registration_number: Option<String>,
}

/// An authenticated storefront user
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct User {
    pub id: String,
    pub email: String,
    pub first_name: String,
    pub last_name: String,
    pub phone: String,
    pub is_active: bool,
    pub company: Company,
}

/// Request body for password login
#[derive(Debug, Clone, Serialize)]
pub struct LoginRequest {
    pub email: String,
    pub password: String,
}

/// Response from login and registration: a token pair plus the user profile
#[derive(Debug, Clone, Deserialize)]
pub struct LoginResponse {
    /// Short-lived bearer access token
    pub access: String,
    /// Long-lived refresh token
    pub refresh: String,
    pub user: User,
}

/// Request body for account registration (snake_case on the wire)
#[derive(Debug, Clone, Serialize)]
pub struct RegisterRequest {
    pub email: String,
    pub password: String,
    pub first_name: String,
    pub last_name: String,
    pub phone: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub company_name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub company_uen: Option<String>,
}

/// Request body for the token refresh exchange
#[derive(Debug, Clone, Serialize)]
pub struct TokenRefreshRequest {
    pub refresh: String,
}

/// Response from the token refresh exchange
#[derive(Debug, Clone, Deserialize)]
pub struct TokenRefreshResponse {
    pub access: String,
}
