//! Database models split into per-resource modules.

pub mod checkin;
pub mod class;
pub mod class_enrollment;
pub mod class_session;
pub mod common;
pub mod image;
pub mod member;
pub mod membership_plan;
pub mod payment;
pub mod subscription;
pub mod trainer;
pub mod user;

pub use checkin::*;
pub use class::*;
pub use class_enrollment::*;
pub use class_session::*;
pub use image::*;
pub use member::*;
pub use membership_plan::*;
pub use payment::*;
pub use subscription::*;
pub use trainer::*;
pub use user::*;
