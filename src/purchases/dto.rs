use serde::Serialize;

use crate::purchases::repo_types::{Course, Purchase};

/// Everything a user has bought, plus the referenced course records.
#[derive(Debug, Serialize)]
pub struct PurchasesResponse {
    pub purchases: Vec<Purchase>,
    pub courses: Vec<Course>,
}
