pub mod app_state;
pub mod ec2_instance;

pub use app_state::AppState;
pub use ec2_instance::Ec2Instance;
