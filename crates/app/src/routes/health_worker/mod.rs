mod dashboard;
mod infants;
mod parents;
mod schedules;
mod vaccinations;
mod visits;

pub use dashboard::HealthWorkerDashboard;
pub use infants::{InfantDetail, InfantList};
pub use parents::{ParentCreate, ParentDetail, ParentList};
pub use schedules::ScheduleList;
pub use vaccinations::VaccinationList;
pub use visits::VisitList;
