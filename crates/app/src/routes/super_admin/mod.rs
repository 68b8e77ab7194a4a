mod dashboard;
mod facilities;
mod logs;
mod system;
mod users;

pub use dashboard::AdminDashboard;
pub use facilities::FacilityAdmin;
pub use logs::SystemLogs;
pub use system::SystemStatus;
pub use users::UserAdmin;
