//! Request shapes for the scan endpoints.

use sakhi_adapters::Fields;
use serde::Deserialize;

use crate::api::required;
use crate::database::models::ScanResult;
use crate::errors::ApiError;

#[derive(Debug, Default, Deserialize)]
pub struct CreateScanRequest {
    pub user_id: Option<String>,
    pub scan_type: Option<String>,
    pub content: Option<String>,
    pub result: Option<String>,
    pub details: Option<Fields>,
}

impl CreateScanRequest {
    pub fn into_scan(self) -> Result<ScanResult, ApiError> {
        Ok(ScanResult {
            user_id: required(self.user_id, "user_id")?,
            scan_type: required(self.scan_type, "scan_type")?,
            content: required(self.content, "content")?,
            result: required(self.result, "result")?,
            details: self.details.unwrap_or_default(),
        })
    }
}
