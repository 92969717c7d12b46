pub mod dashboard;
pub mod http;
pub mod types;

pub use dashboard::{CreateFields, Dashboard, DashboardError};
pub use http::HttpDashboard;
pub use types::{Network, PolicyObject, PolicyObjectGroup};
