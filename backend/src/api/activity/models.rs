//! Request shapes for the activity endpoints.

use sakhi_adapters::Fields;
use serde::Deserialize;

use crate::api::required;
use crate::database::models::Activity;
use crate::errors::ApiError;

#[derive(Debug, Default, Deserialize)]
pub struct CreateActivityRequest {
    pub user_id: Option<String>,
    pub activity_type: Option<String>,
    pub details: Option<Fields>,
}

impl CreateActivityRequest {
    pub fn into_activity(self) -> Result<Activity, ApiError> {
        Ok(Activity {
            user_id: required(self.user_id, "user_id")?,
            activity_type: required(self.activity_type, "activity_type")?,
            details: self.details.unwrap_or_default(),
        })
    }
}
