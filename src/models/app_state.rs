use std::sync::Arc;

use crate::models::ec2_instance::Ec2Instance;

#[derive(Clone)]
pub struct AppState {
    /// Inventory loaded once at startup; read-only for the server's lifetime.
    pub instances: Arc<Vec<Ec2Instance>>,
    pub frontend_origin: String,
}

impl AppState {
    pub fn new(instances: Vec<Ec2Instance>, frontend_origin: String) -> Self {
        Self {
            instances: Arc::new(instances),
            frontend_origin,
        }
    }
}
