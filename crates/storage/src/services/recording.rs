use uuid::Uuid;
use validator::Validate;

use crate::dto::bin_report::RecordBinReportRequest;
use crate::dto::class::CreateClassRequest;
use crate::dto::common::DateRangeParams;
use crate::dto::waste::{RecordWasteRequest, WasteEntryFilter};
use crate::error::{Result, StorageError};
use crate::models::{BinReport, BinStatus, Class, House, NewBinReport, NewClass, NewWasteEntry, WasteCategory, WasteEntry};
use crate::repository::Repository;

use super::scoring;

/// Records a disposal report and, when it qualifies, rewards the owning class.
///
/// Input is fully validated before the store is touched. The entry, the point
/// update and the activity are written as one unit by the repository.
pub async fn record_waste(repo: &dyn Repository, request: &RecordWasteRequest) -> Result<WasteEntry> {
    request.validate()?;
    let waste_type: WasteCategory = request.waste_type.parse()?;

    let entry = NewWasteEntry::new(
        waste_type,
        request.quantity,
        request.class_id,
        normalize_text(request.location.as_deref()),
        request.properly_segregated,
        request.reported_by,
    );
    let award = scoring::waste_award(&entry);

    let recorded = repo.append_waste_entry(entry, award).await?;

    tracing::info!(
        entry_id = %recorded.record.entry_id,
        waste_type = %recorded.record.waste_type,
        class_id = ?recorded.record.class_id,
        points = recorded.activity.as_ref().map(|a| a.points).unwrap_or(0),
        "Recorded waste entry"
    );

    Ok(recorded.record)
}

/// Records a bin condition report, penalising the attributed class for misuse.
pub async fn record_bin_report(
    repo: &dyn Repository,
    request: &RecordBinReportRequest,
) -> Result<BinReport> {
    request.validate()?;
    let status: BinStatus = request.status.parse()?;

    let report = NewBinReport {
        location: request.location.trim().to_string(),
        status,
        class_id: request.class_id,
        reported_by: request.reported_by,
        description: normalize_text(request.description.as_deref()),
    };
    let penalty = scoring::bin_report_penalty(&report);

    let recorded = repo.append_bin_report(report, penalty).await?;

    tracing::info!(
        report_id = %recorded.record.report_id,
        status = %recorded.record.status,
        class_id = ?recorded.record.class_id,
        points = recorded.activity.as_ref().map(|a| a.points).unwrap_or(0),
        "Recorded bin report"
    );

    Ok(recorded.record)
}

pub async fn create_class(repo: &dyn Repository, request: &CreateClassRequest) -> Result<Class> {
    request.validate()?;
    let house: House = request.house.parse()?;

    let class = repo
        .create_class(NewClass::new(
            request.name.trim(),
            request.grade,
            request.section.trim(),
            house,
        ))
        .await?;

    tracing::info!(class_id = %class.class_id, name = %class.name, "Created class");

    Ok(class)
}

/// Inserts the default classes that are not present yet. Returns how many were added.
pub async fn seed_default_classes(repo: &dyn Repository) -> Result<usize> {
    let existing = repo.list_classes().await?;
    let mut added = 0;

    for class in NewClass::defaults() {
        if existing.iter().any(|c| c.name == class.name) {
            continue;
        }
        repo.create_class(class).await?;
        added += 1;
    }

    tracing::info!(added, "Seeded default classes");

    Ok(added)
}

/// Classes ordered by grade, then section
pub async fn list_classes(repo: &dyn Repository) -> Result<Vec<Class>> {
    let mut classes = repo.list_classes().await?;
    classes.sort_by(|a, b| a.grade.cmp(&b.grade).then_with(|| a.section.cmp(&b.section)));
    Ok(classes)
}

pub async fn get_class(repo: &dyn Repository, class_id: Uuid) -> Result<Class> {
    repo.find_class(class_id).await?.ok_or(StorageError::NotFound)
}

/// Waste entries matching the filter, newest first
pub async fn list_waste_entries(
    repo: &dyn Repository,
    filter: &WasteEntryFilter,
) -> Result<Vec<WasteEntry>> {
    let range = filter.range();
    let mut entries: Vec<WasteEntry> = repo
        .waste_entries(filter.class_id)
        .await?
        .into_iter()
        .rev()
        .filter(|entry| range.contains(entry.created_at))
        .collect();
    entries.sort_by(|a, b| b.created_at.cmp(&a.created_at));
    Ok(entries)
}

/// Bin reports within the range, newest first
pub async fn list_bin_reports(repo: &dyn Repository, range: &DateRangeParams) -> Result<Vec<BinReport>> {
    let mut reports: Vec<BinReport> = repo
        .bin_reports()
        .await?
        .into_iter()
        .rev()
        .filter(|report| range.contains(report.created_at))
        .collect();
    reports.sort_by(|a, b| b.created_at.cmp(&a.created_at));
    Ok(reports)
}

fn normalize_text(value: Option<&str>) -> Option<String> {
    value
        .map(str::trim)
        .filter(|s| !s.is_empty())
        .map(String::from)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::repository::MemoryRepository;
    use rust_decimal::Decimal;

    fn waste_request(waste_type: &str, quantity: i32) -> RecordWasteRequest {
        RecordWasteRequest {
            waste_type: waste_type.to_string(),
            quantity,
            class_id: None,
            location: Some("  Floor 2 ".to_string()),
            properly_segregated: true,
            reported_by: None,
        }
    }

    #[tokio::test]
    async fn test_invalid_waste_is_rejected_before_any_write() {
        let repo = MemoryRepository::new();

        let err = record_waste(&repo, &waste_request("glass", 2)).await.unwrap_err();
        assert!(err.is_rejected_input());
        assert_eq!(err.invalid_fields(), vec!["waste_type".to_string()]);

        let err = record_waste(&repo, &waste_request("pens", 0)).await.unwrap_err();
        assert_eq!(err.invalid_fields(), vec!["quantity".to_string()]);

        let err = record_waste(&repo, &waste_request("pens", -3)).await.unwrap_err();
        assert!(err.is_rejected_input());

        assert!(repo.waste_entries(None).await.unwrap().is_empty());
    }

    #[tokio::test]
    async fn test_large_quantities_are_recorded() {
        let repo = MemoryRepository::new();

        for quantity in [10_000, 10_001, i32::MAX] {
            let entry = record_waste(&repo, &waste_request("pens", quantity)).await.unwrap();
            assert_eq!(entry.quantity, quantity);
            assert_eq!(entry.weight, Decimal::from(quantity) * Decimal::from(30));
        }

        assert_eq!(repo.waste_entries(None).await.unwrap().len(), 3);
    }

    #[tokio::test]
    async fn test_location_is_trimmed() {
        let repo = MemoryRepository::new();
        let entry = record_waste(&repo, &waste_request("pens", 1)).await.unwrap();
        assert_eq!(entry.location.as_deref(), Some("Floor 2"));

        let mut blank = waste_request("pens", 1);
        blank.location = Some("   ".to_string());
        let entry = record_waste(&repo, &blank).await.unwrap();
        assert_eq!(entry.location, None);
    }

    #[tokio::test]
    async fn test_unknown_bin_status_names_field() {
        let repo = MemoryRepository::new();
        let request = RecordBinReportRequest {
            location: "Canteen".to_string(),
            status: "full".to_string(),
            class_id: None,
            description: None,
            reported_by: Uuid::new_v4(),
        };

        let err = record_bin_report(&repo, &request).await.unwrap_err();
        assert_eq!(err.invalid_fields(), vec!["status".to_string()]);
        assert!(repo.bin_reports().await.unwrap().is_empty());
    }

    #[tokio::test]
    async fn test_seed_is_idempotent_and_listing_is_ordered() {
        let repo = MemoryRepository::new();
        repo.create_class(NewClass::new("IX Rain", 9, "B", House::Blue))
            .await
            .unwrap();

        assert_eq!(seed_default_classes(&repo).await.unwrap(), 5);
        assert_eq!(seed_default_classes(&repo).await.unwrap(), 0);

        let classes = list_classes(&repo).await.unwrap();
        let names: Vec<&str> = classes.iter().map(|c| c.name.as_str()).collect();
        assert_eq!(
            names,
            vec!["IX Rain", "X Fire", "X Water", "X Air", "X Sky", "X Light"]
        );
        assert!(classes.iter().all(|c| c.points == 0));
    }

    #[tokio::test]
    async fn test_create_class_validates_house() {
        let repo = MemoryRepository::new();
        let request = CreateClassRequest {
            name: "XI Storm".to_string(),
            grade: 11,
            section: "A".to_string(),
            house: "purple".to_string(),
        };

        let err = create_class(&repo, &request).await.unwrap_err();
        assert_eq!(err.invalid_fields(), vec!["house".to_string()]);

        let err = get_class(&repo, Uuid::new_v4()).await.unwrap_err();
        assert!(matches!(err, StorageError::NotFound));
    }
}
