//! Static route table with per-route access requirements.

#[cfg(test)]
#[path = "table_test.rs"]
mod table_test;

pub const LOGIN_PATH: &str = "/login";
pub const REGISTER_PATH: &str = "/register";
pub const ADMIN_HOME_PATH: &str = "/admin";
pub const USER_HOME_PATH: &str = "/user";

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum RouteName {
    Root,
    Login,
    Register,
    AdminDashboard,
    AdminParkingLots,
    AdminUsers,
    UserDashboard,
    BookParking,
    MyBookings,
    NotFound,
}

/// One entry of the route table. Defined at compile time, never mutated.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct RouteDescriptor {
    pub path: &'static str,
    pub name: RouteName,
    pub requires_auth: bool,
    pub requires_admin: bool,
    /// Static redirect target; such routes render nothing themselves.
    pub redirect: Option<&'static str>,
}

impl RouteDescriptor {
    const fn page(path: &'static str, name: RouteName, requires_auth: bool, requires_admin: bool) -> Self {
        Self { path, name, requires_auth, requires_admin, redirect: None }
    }

    const fn redirect(path: &'static str, name: RouteName, to: &'static str) -> Self {
        Self { path, name, requires_auth: false, requires_admin: false, redirect: Some(to) }
    }
}

pub static ROUTES: [RouteDescriptor; 10] = [
    RouteDescriptor::redirect("/", RouteName::Root, LOGIN_PATH),
    RouteDescriptor::page(LOGIN_PATH, RouteName::Login, false, false),
    RouteDescriptor::page(REGISTER_PATH, RouteName::Register, false, false),
    RouteDescriptor::page(ADMIN_HOME_PATH, RouteName::AdminDashboard, true, true),
    RouteDescriptor::page("/admin/parking-lots", RouteName::AdminParkingLots, true, true),
    RouteDescriptor::page("/admin/users", RouteName::AdminUsers, true, true),
    RouteDescriptor::page(USER_HOME_PATH, RouteName::UserDashboard, true, false),
    RouteDescriptor::page("/user/book-parking", RouteName::BookParking, true, false),
    RouteDescriptor::page("/user/my-bookings", RouteName::MyBookings, true, false),
    RouteDescriptor::redirect("/*any", RouteName::NotFound, LOGIN_PATH),
];

impl RouteName {
    /// The table entry for this route.
    pub fn descriptor(self) -> &'static RouteDescriptor {
        ROUTES
            .iter()
            .find(|r| r.name == self)
            .unwrap_or(&ROUTES[ROUTES.len() - 1])
    }
}

/// Match a raw location path against the table.
///
/// Query strings, fragments, and trailing slashes are ignored. Anything
/// unmatched resolves to the catch-all entry.
pub fn resolve(path: &str) -> &'static RouteDescriptor {
    let path = path.split(['?', '#']).next().unwrap_or_default();
    let trimmed = path.trim_end_matches('/');
    let normalized = if trimmed.is_empty() { "/" } else { trimmed };
    ROUTES
        .iter()
        .filter(|r| r.name != RouteName::NotFound)
        .find(|r| r.path == normalized)
        .unwrap_or_else(|| RouteName::NotFound.descriptor())
}
