pub mod auth;
mod checkins;
mod class_enrollments;
mod class_sessions;
mod classes;
pub mod error;
mod images;
mod members;
mod membership_plans;
mod payments;
pub mod response;
mod subscriptions;
mod trainers;
mod users;
pub mod validation;

use axum::{
    routing::{get, post},
    Router,
};
use std::sync::Arc;
use tower_http::{cors::CorsLayer, trace::TraceLayer};

use crate::AppState;

pub fn create_router(state: Arc<AppState>) -> Router {
    let auth_routes = Router::new()
        .route("/register", post(auth::register))
        .route("/login", post(auth::login))
        .route("/change-password", post(auth::change_password))
        .route("/reset-password", post(auth::reset_password))
        .route("/profile/:user_id", get(auth::profile));

    let user_routes = Router::new()
        .route("/", post(users::create_user).get(users::list_users))
        .route("/search/:username", get(users::search_by_username))
        .route(
            "/:id",
            get(users::get_user)
                .put(users::update_user)
                .delete(users::delete_user),
        );

    let member_routes = Router::new()
        .route("/", post(members::create_member).get(members::list_members))
        .route("/search/email/:email", get(members::search_by_email))
        .route(
            "/:id",
            get(members::get_member)
                .put(members::update_member)
                .delete(members::delete_member),
        );

    let trainer_routes = Router::new()
        .route(
            "/",
            post(trainers::create_trainer).get(trainers::list_trainers),
        )
        .route("/search/specialty/:specialty", get(trainers::search_by_specialty))
        .route(
            "/:id",
            get(trainers::get_trainer)
                .put(trainers::update_trainer)
                .delete(trainers::delete_trainer),
        );

    let class_routes = Router::new()
        .route("/", post(classes::create_class).get(classes::list_classes))
        .route("/search/name/:name", get(classes::search_by_name))
        .route(
            "/:id",
            get(classes::get_class)
                .put(classes::update_class)
                .delete(classes::delete_class),
        );

    let session_routes = Router::new()
        .route(
            "/",
            post(class_sessions::create_session).get(class_sessions::list_sessions),
        )
        .route("/class/:class_id", get(class_sessions::list_by_class))
        .route("/upcoming/list", get(class_sessions::list_upcoming))
        .route(
            "/:id",
            get(class_sessions::get_session)
                .put(class_sessions::update_session)
                .delete(class_sessions::delete_session),
        );

    let enrollment_routes = Router::new()
        .route(
            "/",
            post(class_enrollments::create_enrollment).get(class_enrollments::list_enrollments),
        )
        .route("/session/:session_id", get(class_enrollments::list_by_session))
        .route("/member/:member_id", get(class_enrollments::list_by_member))
        .route(
            "/:id",
            get(class_enrollments::get_enrollment)
                .put(class_enrollments::update_enrollment)
                .delete(class_enrollments::delete_enrollment),
        );

    let plan_routes = Router::new()
        .route(
            "/",
            post(membership_plans::create_plan).get(membership_plans::list_plans),
        )
        .route("/active/list", get(membership_plans::list_active))
        .route(
            "/:id",
            get(membership_plans::get_plan)
                .put(membership_plans::update_plan)
                .delete(membership_plans::delete_plan),
        );

    let subscription_routes = Router::new()
        .route(
            "/",
            post(subscriptions::create_subscription).get(subscriptions::list_subscriptions),
        )
        .route("/member/:member_id", get(subscriptions::list_by_member))
        .route(
            "/:id",
            get(subscriptions::get_subscription)
                .put(subscriptions::update_subscription)
                .delete(subscriptions::delete_subscription),
        );

    let checkin_routes = Router::new()
        .route(
            "/",
            post(checkins::create_checkin).get(checkins::list_checkins),
        )
        .route("/member/:member_id", get(checkins::list_by_member))
        .route("/stats/today", get(checkins::today_stats))
        .route(
            "/:id",
            get(checkins::get_checkin)
                .put(checkins::update_checkin)
                .delete(checkins::delete_checkin),
        );

    let payment_routes = Router::new()
        .route(
            "/",
            post(payments::create_payment).get(payments::list_payments),
        )
        .route("/member/:member_id", get(payments::list_by_member))
        .route("/stats/revenue", get(payments::revenue_stats))
        .route(
            "/:id",
            get(payments::get_payment)
                .put(payments::update_payment)
                .delete(payments::delete_payment),
        );

    let image_routes = Router::new()
        .route("/", post(images::create_image).get(images::list_images))
        .route("/uploaded-by/:user_id", get(images::list_by_uploader))
        .route(
            "/:id",
            get(images::get_image)
                .put(images::update_image)
                .delete(images::delete_image),
        );

    Router::new()
        .route("/health", get(health_check))
        .nest("/auth", auth_routes)
        .nest("/users", user_routes)
        .nest("/members", member_routes)
        .nest("/trainers", trainer_routes)
        .nest("/classes", class_routes)
        .nest("/class-sessions", session_routes)
        .nest("/class-enrollments", enrollment_routes)
        .nest("/membership-plans", plan_routes)
        .nest("/subscriptions", subscription_routes)
        .nest("/checkins", checkin_routes)
        .nest("/payments", payment_routes)
        .nest("/images", image_routes)
        .layer(CorsLayer::permissive())
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}

async fn health_check() -> &'static str {
    "OK"
}
