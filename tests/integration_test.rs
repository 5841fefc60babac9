/// Integration tests for the application layer
mod test_utilities;

use chrono::NaiveDate;
use eol_watch::prelude::*;
use std::path::PathBuf;
use test_utilities::mocks::*;

fn date(y: i32, m: u32, d: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(y, m, d).unwrap()
}

fn record(cycle: &str, eol: Option<NaiveDate>) -> LifeCycleRecord {
    let declaration = match eol {
        Some(date) => EolDeclaration::Date(date),
        None => EolDeclaration::Undeclared,
    };
    LifeCycleRecord::new(cycle.to_string(), declaration, None, None, false)
}

fn component(
    id: &str,
    product: &str,
    name: &str,
    slug: &str,
    version: &str,
    manual_eol: Option<NaiveDate>,
) -> TrackedComponent {
    TrackedComponent::new(
        ComponentId::new(id.to_string()).unwrap(),
        ProductId::new(product.to_string()).unwrap(),
        name.to_string(),
        FamilySlug::new(slug.to_string()).unwrap(),
        version.to_string(),
        manual_eol,
    )
    .unwrap()
}

fn inventory(products: Vec<(&str, &str)>, components: Vec<TrackedComponent>) -> Inventory {
    Inventory {
        products: products
            .into_iter()
            .map(|(id, name)| {
                Product::new(ProductId::new(id.to_string()).unwrap(), name.to_string()).unwrap()
            })
            .collect(),
        components,
    }
}

const TODAY: (i32, u32, u32) = (2024, 1, 1);

fn today() -> NaiveDate {
    date(TODAY.0, TODAY.1, TODAY.2)
}

#[tokio::test]
async fn test_snapshot_happy_path() {
    let source = MockLifeCycleSource::new()
        .with_table(
            "postgresql",
            vec![
                record("13", Some(date(2025, 11, 13))),
                record("12", Some(date(2024, 11, 14))),
            ],
        )
        .with_table(
            "oracle-database",
            vec![record("19c", Some(date(2027, 3, 31)))],
        );
    let use_case = SnapshotFleetUseCase::new(
        MockInventoryReader::new(),
        source,
        MockProgressReporter::new(),
    );

    let fleet = inventory(
        vec![("billing", "Billing Platform"), ("crm", "Customer CRM")],
        vec![
            component("c-1", "billing", "PostgreSQL", "postgresql", "12", None),
            component("c-2", "crm", "Oracle DB", "oracle-database", "19c", None),
        ],
    );

    let snapshot = use_case.snapshot_at(&fleet, None, today(), 8).await;

    assert_eq!(snapshot.len(), 2);
    // PostgreSQL 12 expires sooner, so it leads
    let first = &snapshot.entries()[0];
    assert_eq!(first.product_name, "Billing Platform");
    assert_eq!(first.resolved.name(), "PostgreSQL");
    assert_eq!(first.resolved.eol_date(), Some(date(2024, 11, 14)));
    assert_eq!(first.resolved.risk(), RiskLevel::Warning);

    let second = &snapshot.entries()[1];
    assert_eq!(second.product_name, "Customer CRM");
    assert_eq!(second.resolved.days_remaining(), Some(1185));
    assert_eq!(second.resolved.risk(), RiskLevel::Safe);
}

#[tokio::test]
async fn test_manual_date_skips_external_lookup() {
    let source = MockLifeCycleSource::new().with_table(
        "oracle-database",
        vec![record("19c", Some(date(2099, 1, 1)))],
    );

    let fleet = inventory(
        vec![("crm", "Customer CRM")],
        vec![component(
            "c-1",
            "crm",
            "Oracle DB",
            "oracle-database",
            "19c",
            Some(date(2023, 1, 1)),
        )],
    );

    // Keep a handle on the mock by building the use case around a reference
    let reporter = MockProgressReporter::new();
    let use_case = SnapshotFleetUseCase::new(MockInventoryReader::new(), &source, reporter);

    let snapshot = use_case.snapshot_at(&fleet, None, today(), 8).await;

    let entry = &snapshot.entries()[0];
    assert_eq!(entry.resolved.eol_date(), Some(date(2023, 1, 1)));
    assert_eq!(entry.resolved.days_remaining(), Some(-365));
    assert_eq!(entry.resolved.risk(), RiskLevel::Expired);

    // The manual override is authoritative; no fetch happened
    assert_eq!(source.fetch_count("oracle-database"), 0);
}

#[tokio::test]
async fn test_source_failure_is_isolated_per_component() {
    let source = MockLifeCycleSource::new()
        .with_failing_slug("oracle-database")
        .with_table("postgresql", vec![record("12", Some(date(2024, 11, 14)))]);

    let fleet = inventory(
        vec![("billing", "Billing Platform")],
        vec![
            component("c-1", "billing", "Oracle DB", "oracle-database", "19c", None),
            component("c-2", "billing", "PostgreSQL", "postgresql", "12", None),
        ],
    );

    let reporter = MockProgressReporter::new();
    let use_case = SnapshotFleetUseCase::new(MockInventoryReader::new(), &source, reporter);

    let snapshot = use_case.snapshot_at(&fleet, None, today(), 8).await;

    assert_eq!(snapshot.len(), 2);
    // The healthy sibling resolved normally and sorts first
    let first = &snapshot.entries()[0];
    assert_eq!(first.resolved.name(), "PostgreSQL");
    assert_eq!(first.resolved.risk(), RiskLevel::Warning);

    // The failed one degraded to unknown, sorted after all present day-counts
    let second = &snapshot.entries()[1];
    assert_eq!(second.resolved.name(), "Oracle DB");
    assert!(second.resolved.eol_date().is_none());
    assert_eq!(second.resolved.risk(), RiskLevel::Expired);
    assert_eq!(
        second.resolved.absence_reason(),
        Some(AbsenceReason::SourceUnavailable)
    );
}

#[tokio::test]
async fn test_shared_family_is_fetched_once() {
    let source = MockLifeCycleSource::new().with_table(
        "postgresql",
        vec![
            record("12", Some(date(2024, 11, 14))),
            record("13", Some(date(2025, 11, 13))),
        ],
    );

    let fleet = inventory(
        vec![("billing", "Billing Platform"), ("crm", "Customer CRM")],
        vec![
            component("c-1", "billing", "Billing DB", "postgresql", "12", None),
            component("c-2", "crm", "CRM DB", "postgresql", "13", None),
            component("c-3", "crm", "Reporting DB", "postgresql", "12", None),
        ],
    );

    let reporter = MockProgressReporter::new();
    let use_case = SnapshotFleetUseCase::new(MockInventoryReader::new(), &source, reporter);

    let snapshot = use_case.snapshot_at(&fleet, None, today(), 8).await;

    assert_eq!(snapshot.len(), 3);
    // One aggregation pass coalesces lookups for the shared family
    assert_eq!(source.fetch_count("postgresql"), 1);

    // Every sharer still got its own resolution
    let versions_resolved: Vec<Option<NaiveDate>> = snapshot
        .entries()
        .iter()
        .map(|e| e.resolved.eol_date())
        .collect();
    assert!(versions_resolved.iter().all(|eol| eol.is_some()));
}

#[tokio::test]
async fn test_snapshot_total_order() {
    let source = MockLifeCycleSource::new()
        .with_table("postgresql", vec![record("12", Some(date(2024, 11, 14)))])
        .with_table("centos", vec![record("6", Some(date(2020, 11, 30)))])
        .with_table("linux", vec![record("mainline", None)]);

    let fleet = inventory(
        vec![("infra", "Infrastructure")],
        vec![
            component("c-1", "infra", "Mainline Kernel", "linux", "mainline", None),
            component("c-2", "infra", "PostgreSQL", "postgresql", "12", None),
            component("c-3", "infra", "CentOS", "centos", "6", None),
        ],
    );

    let reporter = MockProgressReporter::new();
    let use_case = SnapshotFleetUseCase::new(MockInventoryReader::new(), &source, reporter);

    let snapshot = use_case.snapshot_at(&fleet, None, today(), 8).await;

    let names: Vec<&str> = snapshot
        .entries()
        .iter()
        .map(|e| e.resolved.name())
        .collect();
    // Most overdue first, then upcoming, then absent day-counts last
    assert_eq!(names, vec!["CentOS", "PostgreSQL", "Mainline Kernel"]);

    let days: Vec<Option<i64>> = snapshot
        .entries()
        .iter()
        .map(|e| e.resolved.days_remaining())
        .collect();
    assert!(days[0].unwrap() < 0);
    assert!(days[1].unwrap() > 0);
    assert!(days[2].is_none());
}

#[tokio::test]
async fn test_product_filter_restricts_components() {
    let source = MockLifeCycleSource::new()
        .with_table("postgresql", vec![record("12", Some(date(2024, 11, 14)))]);

    let fleet = inventory(
        vec![("billing", "Billing Platform"), ("crm", "Customer CRM")],
        vec![
            component("c-1", "billing", "Billing DB", "postgresql", "12", None),
            component("c-2", "crm", "CRM DB", "postgresql", "12", None),
        ],
    );

    let reporter = MockProgressReporter::new();
    let use_case = SnapshotFleetUseCase::new(MockInventoryReader::new(), &source, reporter);

    let snapshot = use_case
        .snapshot_at(&fleet, Some("billing"), today(), 8)
        .await;

    assert_eq!(snapshot.len(), 1);
    assert_eq!(snapshot.entries()[0].product_name, "Billing Platform");
}

#[tokio::test]
async fn test_unknown_product_falls_back_to_raw_id() {
    let fleet = inventory(
        vec![],
        vec![component(
            "c-1",
            "orphaned",
            "Thing",
            "manual",
            "1.0",
            Some(date(2025, 1, 1)),
        )],
    );

    let reporter = MockProgressReporter::new();
    let use_case = SnapshotFleetUseCase::new(
        MockInventoryReader::new(),
        MockLifeCycleSource::new(),
        reporter,
    );

    let snapshot = use_case.snapshot_at(&fleet, None, today(), 8).await;
    assert_eq!(snapshot.entries()[0].product_name, "orphaned");
}

#[tokio::test]
async fn test_snapshot_is_idempotent_at_fixed_date() {
    let source = MockLifeCycleSource::new()
        .with_table("postgresql", vec![record("12", Some(date(2024, 11, 14)))]);

    let fleet = inventory(
        vec![("billing", "Billing Platform")],
        vec![component(
            "c-1", "billing", "PostgreSQL", "postgresql", "12", None,
        )],
    );

    let reporter = MockProgressReporter::new();
    let use_case = SnapshotFleetUseCase::new(MockInventoryReader::new(), &source, reporter);

    let first = use_case.snapshot_at(&fleet, None, today(), 8).await;
    let second = use_case.snapshot_at(&fleet, None, today(), 8).await;

    assert_eq!(first, second);
}

#[tokio::test]
async fn test_execute_reads_inventory_and_reports() {
    let reader = MockInventoryReader::new()
        .with_product("billing", "Billing Platform")
        .with_component(component(
            "c-1",
            "billing",
            "Legacy Scheduler",
            "manual",
            "3.1",
            Some(date(2023, 6, 30)),
        ));
    let reporter = MockProgressReporter::new();
    let use_case = SnapshotFleetUseCase::new(reader, MockLifeCycleSource::new(), reporter.clone());

    let request = SnapshotRequest::new(PathBuf::from("inventory.toml"), None, 8);
    let response = use_case.execute(request).await.unwrap();

    assert_eq!(response.snapshot.len(), 1);
    assert_eq!(response.snapshot.entries()[0].resolved.risk(), RiskLevel::Expired);

    let messages = reporter.get_messages();
    assert!(messages.iter().any(|m| m.contains("Loading inventory")));
    assert!(messages.iter().any(|m| m.contains("1 expired")));
}

#[tokio::test]
async fn test_execute_propagates_inventory_failure() {
    let use_case = SnapshotFleetUseCase::new(
        MockInventoryReader::with_failure(),
        MockLifeCycleSource::new(),
        MockProgressReporter::new(),
    );

    let request = SnapshotRequest::new(PathBuf::from("inventory.toml"), None, 8);
    let result = use_case.execute(request).await;

    assert!(result.is_err());
}

#[tokio::test]
async fn test_concurrency_bound_of_one_still_resolves_all() {
    let source = MockLifeCycleSource::new()
        .with_table("postgresql", vec![record("12", Some(date(2024, 11, 14)))])
        .with_table("redis", vec![record("7", Some(date(2025, 4, 30)))]);

    let fleet = inventory(
        vec![("infra", "Infrastructure")],
        vec![
            component("c-1", "infra", "PostgreSQL", "postgresql", "12", None),
            component("c-2", "infra", "Redis", "redis", "7", None),
        ],
    );

    let reporter = MockProgressReporter::new();
    let use_case = SnapshotFleetUseCase::new(MockInventoryReader::new(), &source, reporter);

    let snapshot = use_case.snapshot_at(&fleet, None, today(), 1).await;
    assert_eq!(snapshot.len(), 2);
    assert_eq!(source.fetched_slugs().len(), 2);
}
