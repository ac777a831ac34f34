use domain::{Access, Role, Session};

/// Every navigable screen of the portal.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum Route {
    Home,
    Login,
    Register,
    Book,
    UploadReport,
    Reports,
    Dashboard,
    MyPrescriptions,
    DoctorDashboard,
    Appointments,
    Prescribe,
    AdminDashboard,
}

impl Route {
    pub fn path(&self) -> &'static str {
        match self {
            Route::Home => "/",
            Route::Login => "/login",
            Route::Register => "/register",
            Route::Book => "/book",
            Route::UploadReport => "/upload-report",
            Route::Reports => "/reports",
            Route::Dashboard => "/dashboard",
            Route::MyPrescriptions => "/my-prescriptions",
            Route::DoctorDashboard => "/doctor-dashboard",
            Route::Appointments => "/appointments",
            Route::Prescribe => "/prescribe",
            Route::AdminDashboard => "/admin-dashboard",
        }
    }

    /// Roles allowed past the guard. Empty means the route is public.
    pub fn allowed_roles(&self) -> &'static [Role] {
        match self {
            Route::Home | Route::Login | Route::Register => &[],
            Route::Book
            | Route::UploadReport
            | Route::Reports
            | Route::Dashboard
            | Route::MyPrescriptions => &[Role::Patient],
            Route::DoctorDashboard | Route::Appointments | Route::Prescribe => &[Role::Doctor],
            Route::AdminDashboard => &[Role::Admin],
        }
    }

    pub fn is_public(&self) -> bool {
        matches!(self, Route::Home | Route::Login | Route::Register)
    }
}

/// Gate a route against the current session.
pub fn guard(route: Route, session: Option<&Session>) -> Access {
    if route.is_public() {
        return Access::Render;
    }
    domain::guard::evaluate(route.allowed_roles(), session)
}

/// Where a fresh login lands, by role.
pub fn landing_route(role: Role) -> Route {
    match role {
        Role::Doctor => Route::DoctorDashboard,
        Role::Admin => Route::AdminDashboard,
        Role::Patient => Route::Dashboard,
    }
}
