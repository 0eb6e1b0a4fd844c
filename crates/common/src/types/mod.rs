use serde::{Deserialize, Serialize};

/// Service name reported by the liveness endpoint.
pub const SERVICE_NAME: &str = "veluxe-backend";

#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Eq)]
pub struct HealthStatus {
    pub status: String,
    pub service: String,
}

impl HealthStatus {
    pub fn healthy() -> Self {
        Self { status: "healthy".into(), service: SERVICE_NAME.into() }
    }
}
