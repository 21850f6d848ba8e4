use serde::Deserialize;

#[derive(Debug, Deserialize, Default, Clone)]
pub struct GatewayStatus {
    #[serde(default)]
    pub replica_health_status: Option<String>,
    #[serde(default)]
    pub impl_version: Option<String>,
}

impl GatewayStatus {
    pub fn is_healthy(&self) -> bool {
        match self.replica_health_status.as_deref() {
            Some(status) => status == "healthy",
            None => true,
        }
    }
}
