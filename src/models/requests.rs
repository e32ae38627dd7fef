use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Deserialize)]
pub struct LocationRequest {
    pub address: Option<String>,
}

impl LocationRequest {
    /// Returns the address if it is present and non-empty
    pub fn address(&self) -> Option<&str> {
        match self.address.as_deref() {
            Some("") | None => None,
            Some(address) => Some(address),
        }
    }
}

#[derive(Debug, Clone, Serialize)]
pub struct ErrorResponse {
    pub error: String,
}

impl ErrorResponse {
    pub fn address_required() -> Self {
        Self {
            error: "Address is required".to_string(),
        }
    }

    pub fn lookup_failed(details: impl std::fmt::Display) -> Self {
        Self {
            error: format!("Failed to retrieve location: {}", details),
        }
    }
}
