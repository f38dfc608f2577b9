//! Per-resource repositories. Each repository is constructed with a pool
//! clone and owns all SQL for its table, including relationship joins.

pub mod checkins;
pub mod class_enrollments;
pub mod class_sessions;
pub mod classes;
pub mod images;
pub mod members;
pub mod membership_plans;
pub mod payments;
pub mod subscriptions;
pub mod trainers;
pub mod users;

pub use checkins::CheckinRepo;
pub use class_enrollments::ClassEnrollmentRepo;
pub use class_sessions::ClassSessionRepo;
pub use classes::ClassRepo;
pub use images::ImageRepo;
pub use members::MemberRepo;
pub use membership_plans::MembershipPlanRepo;
pub use payments::PaymentRepo;
pub use subscriptions::SubscriptionRepo;
pub use trainers::TrainerRepo;
pub use users::UserRepo;
