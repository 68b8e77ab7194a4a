mod coverage;
mod dashboard;
mod facilities;
mod reports;

pub use coverage::CoverageReport;
pub use dashboard::AnalystDashboard;
pub use facilities::FacilityDirectory;
pub use reports::Reports;
