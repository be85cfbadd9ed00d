//! The platform's route registry.
//!
//! Every navigable page is registered here with its authorization policy.
//! Section landing paths forward to their default child page, so policy
//! lives on the pages that actually render.

use lectern_routing::{AccessPolicy, Route, RouteTable, RoutingError};
use lectern_session::Role;

/// Builds the platform route table.
///
/// # Errors
///
/// Returns a [`RoutingError`] if the registry is internally inconsistent;
/// with this fixed table that indicates a programming error caught at
/// startup.
pub fn platform_routes() -> Result<RouteTable, RoutingError> {
    let mut table = RouteTable::new();

    // Open pages.
    table.register(Route::redirect("root", "/", "home"))?;
    table.register(Route::new("home", "/home", AccessPolicy::Public))?;
    table.register(Route::new("register", "/register", AccessPolicy::Public))?;
    table.register(Route::new("login", "/login", AccessPolicy::Public))?;
    table.register(Route::new("courses", "/courses", AccessPolicy::Public))?;
    table.register(Route::new("schools", "/schools", AccessPolicy::Public))?;

    // Pages for any signed-in account.
    table.register(Route::new("ai", "/ai-dialog", AccessPolicy::Authenticated))?;
    table.register(Route::new("profile", "/profile", AccessPolicy::Authenticated))?;

    // Administration.
    table.register(Route::new(
        "admin",
        "/profile/admin",
        AccessPolicy::RequiresRole(Role::Admin),
    ))?;

    // Teacher profile section.
    table.register(Route::redirect("teacher", "/profile/teacher", "TeacherInfo"))?;
    table.register(Route::new(
        "TeacherInfo",
        "/profile/teacher/info",
        AccessPolicy::RequiresRole(Role::Teacher),
    ))?;
    table.register(Route::new(
        "TeacherCourses",
        "/profile/teacher/courses",
        AccessPolicy::RequiresRole(Role::Teacher),
    ))?;
    table.register(Route::new(
        "TeacherCreate",
        "/profile/teacher/create",
        AccessPolicy::RequiresRole(Role::Teacher),
    ))?;
    table.register(Route::new(
        "TeacherLives",
        "/profile/teacher/live",
        AccessPolicy::RequiresRole(Role::Teacher),
    ))?;

    // Student profile section.
    table.register(Route::redirect("student", "/profile/student", "StudentInfo"))?;
    table.register(Route::new(
        "StudentInfo",
        "/profile/student/info",
        AccessPolicy::RequiresRole(Role::Student),
    ))?;
    table.register(Route::new(
        "StudentCourses",
        "/profile/student/courses",
        AccessPolicy::RequiresRole(Role::Student),
    ))?;
    table.register(Route::new(
        "StudentLives",
        "/profile/student/live",
        AccessPolicy::RequiresRole(Role::Student),
    ))?;

    // Course workspaces.
    table.register(Route::new(
        "TeacherCourse",
        "/course/teacher/:course_id",
        AccessPolicy::RequiresRole(Role::Teacher),
    ))?;
    table.register(Route::new(
        "TeacherCourseInfo",
        "/course/teacher/:course_id/info",
        AccessPolicy::RequiresRole(Role::Teacher),
    ))?;
    table.register(Route::new(
        "TeacherHomework",
        "/course/teacher/:course_id/homework",
        AccessPolicy::RequiresRole(Role::Teacher),
    ))?;
    table.register(Route::new(
        "StudentCourse",
        "/course/student/:course_id",
        AccessPolicy::RequiresRole(Role::Student),
    ))?;
    table.register(Route::new(
        "StudentCourseInfo",
        "/course/student/:course_id/info",
        AccessPolicy::RequiresRole(Role::Student),
    ))?;
    table.register(Route::new(
        "StudentHomework",
        "/course/student/:course_id/homework",
        AccessPolicy::RequiresRole(Role::Student),
    ))?;

    table.validate()?;
    Ok(table)
}
