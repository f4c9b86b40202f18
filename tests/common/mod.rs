pub use std::collections::BTreeMap;

pub use ::aw::{
    http::{header, StatusCode},
    test,
    web::Data,
};

pub use crate::main::{
    activity::ActivityView,
    handlers::{ErrorDetail, Message},
};

pub type ActivitiesJson = BTreeMap<String, ActivityView>;

/// имя занятия в пути запроса
pub fn segment(activity: &str) -> String {
    activity.replace(' ', "%20")
}

pub fn signup_uri(activity: &str, email: &str) -> String {
    format!("/activities/{}/signup?email={}", segment(activity), email)
}

pub fn participants_uri(activity: &str, email: &str) -> String {
    format!("/activities/{}/participants?email={}", segment(activity), email)
}
