//! Counter and reward bookkeeping for scans and community reports.
//!
//! Creating a scan or a report is a compound write: the dependent record is
//! stored first, then the owning user's counters are bumped with a single
//! atomic increment. The two steps are not transactional. A missing user is
//! skipped silently and a failed increment is only logged; in both cases the
//! dependent record stays created and is returned to the caller.

use sakhi_adapters::{DocumentStore, Record, StoreResult};
use tracing::{debug, warn};

use crate::database::models::{CommunityReport, ScanResult};
use crate::database::queries;

pub const TOTAL_SCANS: &str = "total_scans";
pub const REPORTS_SUBMITTED: &str = "reports_submitted";
pub const COINS: &str = "coins";

/// Coins awarded for every community report.
pub const REPORT_REWARD_COINS: i64 = 10;

/// What happened to the owning user after the dependent record was created.
#[derive(Debug)]
pub enum OwnerUpdate {
    Credited(Record),
    OwnerMissing,
    Failed(String),
}

#[derive(Debug)]
pub struct Recorded {
    pub record: Record,
    pub owner: OwnerUpdate,
}

pub async fn record_scan(store: &dyn DocumentStore, scan: &ScanResult) -> StoreResult<Recorded> {
    let record = queries::insert_scan(store, scan).await?;
    let owner = credit_owner(store, &scan.user_id, &[(TOTAL_SCANS, 1)]).await;

    Ok(Recorded { record, owner })
}

pub async fn record_report(
    store: &dyn DocumentStore,
    report: &CommunityReport,
) -> StoreResult<Recorded> {
    let record = queries::insert_report(store, report).await?;
    let owner = credit_owner(
        store,
        &report.user_id,
        &[(REPORTS_SUBMITTED, 1), (COINS, REPORT_REWARD_COINS)],
    )
    .await;

    Ok(Recorded { record, owner })
}

async fn credit_owner(
    store: &dyn DocumentStore,
    user_id: &str,
    deltas: &[(&str, i64)],
) -> OwnerUpdate {
    match queries::credit_user(store, user_id, deltas).await {
        Ok(user) => {
            debug!(user_id, ?deltas, "credited user");
            OwnerUpdate::Credited(user)
        }
        Err(err) if err.is_not_found() => {
            debug!(user_id, "owning user not found, counters untouched");
            OwnerUpdate::OwnerMissing
        }
        Err(err) => {
            warn!(user_id, error = %err, "failed to update user counters");
            OwnerUpdate::Failed(err.to_string())
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::database::models::User;
    use sakhi_adapters::{Fields, MemoryStore};
    use serde_json::json;

    fn scan_for(user_id: &str) -> ScanResult {
        ScanResult {
            user_id: user_id.to_string(),
            scan_type: "sms".to_string(),
            content: "You won a lottery".to_string(),
            result: "danger".to_string(),
            details: Fields::new(),
        }
    }

    fn report_for(user_id: &str) -> CommunityReport {
        CommunityReport {
            user_id: user_id.to_string(),
            report_type: "phone".to_string(),
            content: "+91 90000 00000".to_string(),
            description: "Fake bank KYC call".to_string(),
        }
    }

    async fn seeded_user(store: &MemoryStore) -> Record {
        let user = User::new("Asha".into(), "asha@example.in".into(), None);
        queries::insert_user(store, &user).await.unwrap()
    }

    #[tokio::test]
    async fn test_scan_bumps_total_scans_only() {
        let store = MemoryStore::new();
        let user = seeded_user(&store).await;

        let recorded = record_scan(&store, &scan_for(&user.id)).await.unwrap();

        assert_eq!(recorded.record.data["scan_type"], "sms");
        let OwnerUpdate::Credited(updated) = recorded.owner else {
            panic!("expected the owner to be credited");
        };
        assert_eq!(updated.counter(TOTAL_SCANS), 1);
        assert_eq!(updated.counter(REPORTS_SUBMITTED), 0);
        assert_eq!(updated.counter(COINS), 0);
    }

    #[tokio::test]
    async fn test_report_awards_coins() {
        let store = MemoryStore::new();
        let user = seeded_user(&store).await;

        record_report(&store, &report_for(&user.id)).await.unwrap();
        let recorded = record_report(&store, &report_for(&user.id)).await.unwrap();

        let OwnerUpdate::Credited(updated) = recorded.owner else {
            panic!("expected the owner to be credited");
        };
        assert_eq!(updated.counter(REPORTS_SUBMITTED), 2);
        assert_eq!(updated.counter(COINS), 2 * REPORT_REWARD_COINS);
        assert_eq!(updated.counter(TOTAL_SCANS), 0);
    }

    #[tokio::test]
    async fn test_missing_owner_still_creates_record() {
        let store = MemoryStore::new();

        let recorded = record_scan(&store, &scan_for("ghost")).await.unwrap();

        assert!(matches!(recorded.owner, OwnerUpdate::OwnerMissing));
        assert_eq!(store.len(crate::database::SCANS).await, 1);
        assert_eq!(store.len(crate::database::USERS).await, 0);
    }

    #[tokio::test]
    async fn test_failed_credit_is_reported_not_raised() {
        let store = MemoryStore::new();
        let mut fields = Fields::new();
        fields.insert(COINS.to_string(), json!("plenty"));
        let user = store.create(crate::database::USERS, fields).await.unwrap();

        let recorded = record_report(&store, &report_for(&user.id)).await.unwrap();

        assert!(matches!(recorded.owner, OwnerUpdate::Failed(_)));
        assert_eq!(recorded.record.data["report_type"], "phone");
    }
}
