pub mod auth;
pub mod common;
pub mod data_analyst;
pub mod health_worker;
pub mod menu;
pub mod not_found;
pub mod shell;
pub mod super_admin;
pub mod table;

use dioxus::prelude::*;
use shared_types::Role;

use auth::{ForgotPassword, SignIn, SignUp, VerifyOtp};
use data_analyst::{AnalystDashboard, CoverageReport, FacilityDirectory, Reports};
use health_worker::{
    HealthWorkerDashboard, InfantDetail, InfantList, ParentCreate, ParentDetail, ParentList,
    ScheduleList, VaccinationList, VisitList,
};
use not_found::NotFound;
use shell::{AuthLayout, RoleShell};
use super_admin::{AdminDashboard, FacilityAdmin, SystemLogs, SystemStatus, UserAdmin};

/// Application routes. Each portal sits under its role prefix and exactly
/// one role layout.
#[derive(Clone, Routable, Debug, PartialEq)]
#[rustfmt::skip]
pub enum Route {
    #[redirect("/", || Route::SignIn {})]
    #[nest("/auth")]
        #[layout(AuthLayout)]
            #[route("/signin")]
            SignIn {},
            #[route("/signup")]
            SignUp {},
            #[route("/forgot-password")]
            ForgotPassword {},
            #[route("/verify-otp?:email")]
            VerifyOtp { email: String },
        #[end_layout]
    #[end_nest]

    #[nest("/healthworker")]
        #[layout(HealthWorkerLayout)]
            #[route("/dashboard")]
            HealthWorkerDashboard {},
            #[route("/parents")]
            ParentList {},
            #[route("/parents/new")]
            ParentCreate {},
            #[route("/parents/:id")]
            ParentDetail { id: i64 },
            #[route("/infants")]
            InfantList {},
            #[route("/infants/:id")]
            InfantDetail { id: i64 },
            #[route("/visits")]
            VisitList {},
            #[route("/vaccinations")]
            VaccinationList {},
            #[route("/schedules")]
            ScheduleList {},
        #[end_layout]
    #[end_nest]

    #[nest("/dataanalyst")]
        #[layout(DataAnalystLayout)]
            #[route("/dashboard")]
            AnalystDashboard {},
            #[route("/reports")]
            Reports {},
            #[route("/vaccinations")]
            CoverageReport {},
            #[route("/facilities")]
            FacilityDirectory {},
        #[end_layout]
    #[end_nest]

    #[nest("/superadmin")]
        #[layout(SuperAdminLayout)]
            #[route("/dashboard")]
            AdminDashboard {},
            #[route("/facilities")]
            FacilityAdmin {},
            #[route("/users")]
            UserAdmin {},
            #[route("/system")]
            SystemStatus {},
            #[route("/logs")]
            SystemLogs {},
        #[end_layout]
    #[end_nest]

    #[route("/:..route")]
    NotFound { route: Vec<String> },
}

impl Route {
    /// Landing page for a signed-in role.
    pub fn home(role: Role) -> Self {
        match role {
            Role::HealthWorker => Route::HealthWorkerDashboard {},
            Role::DataAnalyst => Route::AnalystDashboard {},
            Role::SuperAdmin => Route::AdminDashboard {},
        }
    }
}

#[component]
fn HealthWorkerLayout() -> Element {
    rsx! { RoleShell { role: Role::HealthWorker } }
}

#[component]
fn DataAnalystLayout() -> Element {
    rsx! { RoleShell { role: Role::DataAnalyst } }
}

#[component]
fn SuperAdminLayout() -> Element {
    rsx! { RoleShell { role: Role::SuperAdmin } }
}
