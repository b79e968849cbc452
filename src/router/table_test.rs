use super::*;

#[test]
fn table_declares_ten_routes_with_unique_names() {
    assert_eq!(ROUTES.len(), 10);
    for (i, a) in ROUTES.iter().enumerate() {
        for b in &ROUTES[i + 1..] {
            assert_ne!(a.name, b.name);
            assert_ne!(a.path, b.path);
        }
    }
}

#[test]
fn admin_routes_also_require_auth() {
    for route in ROUTES.iter().filter(|r| r.requires_admin) {
        assert!(route.requires_auth, "{:?} requires admin without auth", route.name);
    }
}

#[test]
fn admin_area_is_admin_only() {
    for name in [RouteName::AdminDashboard, RouteName::AdminParkingLots, RouteName::AdminUsers] {
        let route = name.descriptor();
        assert!(route.requires_auth && route.requires_admin);
        assert!(route.path.starts_with("/admin"));
    }
}

#[test]
fn user_area_requires_auth_only() {
    for name in [RouteName::UserDashboard, RouteName::BookParking, RouteName::MyBookings] {
        let route = name.descriptor();
        assert!(route.requires_auth);
        assert!(!route.requires_admin);
    }
}

#[test]
fn entry_routes_are_public() {
    for name in [RouteName::Login, RouteName::Register] {
        assert!(!name.descriptor().requires_auth);
    }
}

#[test]
fn root_and_catch_all_redirect_to_login() {
    assert_eq!(RouteName::Root.descriptor().redirect, Some(LOGIN_PATH));
    assert_eq!(RouteName::NotFound.descriptor().redirect, Some(LOGIN_PATH));
}

#[test]
fn resolve_matches_exact_paths() {
    assert_eq!(resolve("/").name, RouteName::Root);
    assert_eq!(resolve("/login").name, RouteName::Login);
    assert_eq!(resolve("/admin/parking-lots").name, RouteName::AdminParkingLots);
    assert_eq!(resolve("/user/my-bookings").name, RouteName::MyBookings);
}

#[test]
fn resolve_ignores_trailing_slash_query_and_fragment() {
    assert_eq!(resolve("/user/").name, RouteName::UserDashboard);
    assert_eq!(resolve("/user/book-parking?lot=3").name, RouteName::BookParking);
    assert_eq!(resolve("/register#form").name, RouteName::Register);
    assert_eq!(resolve("").name, RouteName::Root);
}

#[test]
fn resolve_unknown_paths_hit_catch_all() {
    assert_eq!(resolve("/nowhere").name, RouteName::NotFound);
    assert_eq!(resolve("/admin/parking-lots/7").name, RouteName::NotFound);
    assert_eq!(resolve("/*any").name, RouteName::NotFound);
}
