/**
 * Router Configuration
 *
 * Builds the application router from two groups:
 *
 * - **Public**: register, login, refresh, logout. Refresh and logout
 *   authenticate through the refresh cookie, not the Access Guard.
 * - **Guarded**: profile, users, projects, pricing. Every route in this
 *   group passes through the Access Guard middleware, which verifies
 *   the bearer access token before the handler runs.
 */

use axum::{
    middleware,
    routing::{get, post},
    Router,
};

use crate::api::projects::{get_project_by_id, get_projects, patch_project, post_project};
use crate::api::users::{get_user, get_users};
use crate::auth::handlers::{get_profile, login, logout, refresh, register};
use crate::middleware::auth::access_guard;
use crate::pricing::{get_pricing_plans, select_plan};
use crate::server::state::AppState;

/// Create the application router
///
/// # Routes
///
/// ## Public
///
/// - `POST /auth/register` - user registration
/// - `POST /auth/login` - issue a token pair
/// - `POST /auth/refresh` - rotate the refresh token (cookie)
/// - `POST /auth/logout` - clear the session (cookie, idempotent)
///
/// ## Guarded (bearer access token)
///
/// - `GET /auth/profile` - authenticated user's projection
/// - `GET /users`, `GET /users/{id}` - user projections
/// - `GET/POST /projects`, `GET/PATCH /projects/{id}` - owner-scoped CRUD
/// - `GET /pricing`, `POST /pricing/select` - static catalog
pub fn create_router(state: AppState) -> Router {
    let public = Router::new()
        .route("/auth/register", post(register))
        .route("/auth/login", post(login))
        .route("/auth/refresh", post(refresh))
        .route("/auth/logout", post(logout));

    let guarded = Router::new()
        .route("/auth/profile", get(get_profile))
        .route("/users", get(get_users))
        .route("/users/{id}", get(get_user))
        .route("/projects", get(get_projects).post(post_project))
        .route(
            "/projects/{id}",
            get(get_project_by_id).patch(patch_project),
        )
        .route("/pricing", get(get_pricing_plans))
        .route("/pricing/select", post(select_plan))
        .route_layer(middleware::from_fn_with_state(
            state.clone(),
            access_guard,
        ));

    public.merge(guarded).with_state(state)
}
