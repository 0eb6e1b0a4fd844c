pub mod types;
pub mod utils;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn health_status_serializes_service_name() {
        let h = types::HealthStatus::healthy();
        let json = serde_json::to_value(&h).unwrap();
        assert_eq!(json["status"], "healthy");
        assert_eq!(json["service"], "veluxe-backend");
    }
}
