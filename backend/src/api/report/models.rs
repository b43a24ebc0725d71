//! Request shapes for the report endpoints.

use serde::Deserialize;

use crate::api::required;
use crate::database::models::CommunityReport;
use crate::errors::ApiError;

#[derive(Debug, Default, Deserialize)]
pub struct CreateReportRequest {
    pub user_id: Option<String>,
    pub report_type: Option<String>,
    pub content: Option<String>,
    pub description: Option<String>,
}

impl CreateReportRequest {
    pub fn into_report(self) -> Result<CommunityReport, ApiError> {
        Ok(CommunityReport {
            user_id: required(self.user_id, "user_id")?,
            report_type: required(self.report_type, "report_type")?,
            content: required(self.content, "content")?,
            description: required(self.description, "description")?,
        })
    }
}
