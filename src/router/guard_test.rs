use super::*;
use crate::router::table::ROUTES;
use crate::state::session::Role;

fn signed_out() -> Session {
    Session::default()
}

fn user() -> Session {
    Session::signed_in("t-user", Role::User, None)
}

fn admin() -> Session {
    Session::signed_in("t-admin", Role::Admin, None)
}

// =============================================================
// check: decision table
// =============================================================

#[test]
fn protected_routes_send_signed_out_sessions_to_login() {
    for route in ROUTES.iter().filter(|r| r.requires_auth) {
        assert_eq!(check(route, &signed_out()), Decision::Redirect("/login"), "{:?}", route.name);
    }
}

#[test]
fn admin_routes_send_non_admins_to_user_home() {
    for name in [RouteName::AdminDashboard, RouteName::AdminParkingLots, RouteName::AdminUsers] {
        assert_eq!(check(name.descriptor(), &user()), Decision::Redirect("/user"));
    }
}

#[test]
fn admin_routes_proceed_for_admins() {
    for name in [RouteName::AdminDashboard, RouteName::AdminParkingLots, RouteName::AdminUsers] {
        assert_eq!(check(name.descriptor(), &admin()), Decision::Proceed);
    }
}

#[test]
fn public_routes_send_admins_to_admin_home() {
    for name in [RouteName::Login, RouteName::Register] {
        assert_eq!(check(name.descriptor(), &admin()), Decision::Redirect("/admin"));
    }
}

#[test]
fn public_routes_send_users_to_user_home() {
    for name in [RouteName::Login, RouteName::Register] {
        assert_eq!(check(name.descriptor(), &user()), Decision::Redirect("/user"));
    }
}

#[test]
fn public_routes_proceed_when_signed_out() {
    for name in [RouteName::Login, RouteName::Register] {
        assert_eq!(check(name.descriptor(), &signed_out()), Decision::Proceed);
    }
}

#[test]
fn user_routes_proceed_for_any_signed_in_role() {
    for name in [RouteName::UserDashboard, RouteName::BookParking, RouteName::MyBookings] {
        assert_eq!(check(name.descriptor(), &user()), Decision::Proceed);
        assert_eq!(check(name.descriptor(), &admin()), Decision::Proceed);
    }
}

#[test]
fn admin_requirement_checks_auth_first() {
    let route = RouteName::AdminUsers.descriptor();
    assert_eq!(check(route, &signed_out()), Decision::Redirect("/login"));
}

#[test]
fn home_path_follows_role() {
    assert_eq!(home_path(&admin()), "/admin");
    assert_eq!(home_path(&user()), "/user");
}

// =============================================================
// navigate
// =============================================================

#[test]
fn root_lands_on_login_when_signed_out() {
    let nav = navigate("/", &signed_out());
    assert_eq!(nav.route.name, RouteName::Login);
    assert!(nav.redirected);
}

#[test]
fn root_lands_on_role_home_when_signed_in() {
    assert_eq!(navigate("/", &admin()).route.name, RouteName::AdminDashboard);
    assert_eq!(navigate("/", &user()).route.name, RouteName::UserDashboard);
}

#[test]
fn unknown_path_lands_on_login_or_role_home() {
    assert_eq!(navigate("/does/not/exist", &signed_out()).route.name, RouteName::Login);
    assert_eq!(navigate("/does/not/exist", &user()).route.name, RouteName::UserDashboard);
}

#[test]
fn non_admin_on_admin_page_lands_on_user_home_not_login() {
    let nav = navigate("/admin/parking-lots", &user());
    assert_eq!(nav.route.name, RouteName::UserDashboard);
}

#[test]
fn signed_out_deep_link_lands_on_login() {
    assert_eq!(navigate("/user/my-bookings", &signed_out()).route.name, RouteName::Login);
}

#[test]
fn allowed_navigation_is_not_redirected() {
    let nav = navigate("/user/book-parking", &user());
    assert_eq!(nav.route.name, RouteName::BookParking);
    assert!(!nav.redirected);
}

#[test]
fn every_path_settles_on_a_page_route() {
    for session in [signed_out(), user(), admin()] {
        for route in &ROUTES {
            let nav = navigate(route.path, &session);
            assert!(nav.route.redirect.is_none(), "{} did not settle", route.path);
            assert_eq!(check(nav.route, &session), Decision::Proceed);
        }
    }
}
