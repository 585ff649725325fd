// libs/doctor-cell/tests/integration_test.rs
// Console workflows end to end against the in-memory roster.

use std::sync::Arc;

use assert_matches::assert_matches;
use uuid::Uuid;

use doctor_cell::fixtures::{doctor_id, doctors};
use doctor_cell::*;
use shared_models::listing::{PageRequest, SortDirection};
use shared_utils::listing::{ListQuery, SortSpec};
use shared_utils::test_utils::TestConfig;

fn create_repository() -> Arc<InMemoryDoctorRepository> {
    Arc::new(InMemoryDoctorRepository::new(doctors()).unwrap())
}

fn create_directory(repository: Arc<InMemoryDoctorRepository>) -> Arc<DoctorDirectoryService> {
    Arc::new(DoctorDirectoryService::new(&TestConfig::default().to_app_config(), repository))
}

fn query(
    search: &str,
    sort: DoctorSortKey,
    direction: SortDirection,
    page: PageRequest,
) -> DoctorQuery {
    ListQuery {
        search: search.to_string(),
        filter: DoctorFilter::default(),
        sort: SortSpec::new(sort, direction),
        page,
    }
}

#[tokio::test]
async fn test_search_ignores_fields_outside_the_searchable_set() {
    let mut roster = doctors();
    roster[1].specialty = "Sarah Syndrome Research".to_string();
    roster[1].sub_specialty = "sarah".to_string();
    let repository = Arc::new(InMemoryDoctorRepository::new(roster).unwrap());
    let directory = create_directory(repository);

    let page = directory
        .list(&query("sarah", DoctorSortKey::Name, SortDirection::Asc, PageRequest::first(10)))
        .await
        .unwrap();

    let ids: Vec<Uuid> = page.items.iter().map(|d| d.id).collect();
    assert_eq!(ids, vec![doctor_id(1)]);
}

#[tokio::test]
async fn test_repeated_listing_is_identical() {
    let directory = create_directory(create_repository());
    let q = query("dr", DoctorSortKey::Specialty, SortDirection::Desc, PageRequest::new(2, 4));

    let first = directory.list(&q).await.unwrap();
    let second = directory.list(&q).await.unwrap();
    assert_eq!(first, second);
}

#[tokio::test]
async fn test_all_pages_cover_sorted_roster_once() {
    let directory = create_directory(create_repository());
    let full = directory
        .list(&query("", DoctorSortKey::City, SortDirection::Asc, PageRequest::first(100)))
        .await
        .unwrap();

    let mut collected = Vec::new();
    let mut page = 1;
    loop {
        let current = directory
            .list(&query("", DoctorSortKey::City, SortDirection::Asc, PageRequest::new(page, 5)))
            .await
            .unwrap();
        collected.extend(current.items.clone());
        if !current.has_next() {
            break;
        }
        page += 1;
    }

    assert_eq!(collected, full.items);
}

#[tokio::test]
async fn test_equal_keys_keep_roster_order() {
    let directory = create_directory(create_repository());
    let page = directory
        .list(&query("", DoctorSortKey::City, SortDirection::Desc, PageRequest::first(100)))
        .await
        .unwrap();

    let chicago: Vec<Uuid> = page
        .items
        .iter()
        .filter(|d| d.city == "Chicago")
        .map(|d| d.id)
        .collect();
    assert_eq!(chicago, vec![doctor_id(2), doctor_id(7)]);
}

#[tokio::test]
async fn test_console_flow_suspend_then_reactivate() {
    let directory = create_directory(create_repository());
    let mut console = DoctorConsole::open(directory, 10).await.unwrap();

    console.set_search("emily").await.unwrap();
    let id = console.visible_ids()[0];

    console.request_action(id, DoctorActionKind::Suspend).unwrap();
    let ack = console.confirm_action().await.unwrap().unwrap();
    assert_eq!(ack.acknowledgement.message, "Dr. Emily Rodriguez has been suspended");

    console.request_action(id, DoctorActionKind::Activate).unwrap();
    console.confirm_action().await.unwrap();
    assert_eq!(console.page().items[0].status, DoctorStatus::Active);
}

#[tokio::test]
async fn test_console_rejects_action_on_hidden_row() {
    let directory = create_directory(create_repository());
    let mut console = DoctorConsole::open(directory, 10).await.unwrap();
    console.set_status_filter(Some(DoctorStatus::Blocked)).await.unwrap();

    assert_matches!(
        console.request_action(doctor_id(1), DoctorActionKind::Delete),
        Err(DoctorError::NotFound(_))
    );
    assert!(!console.confirmation().is_pending());
}

#[tokio::test]
async fn test_console_bulk_export_keeps_roster() {
    let repository = create_repository();
    let directory = create_directory(repository.clone());
    let mut console = DoctorConsole::open(directory, 10).await.unwrap();

    console.toggle_select_all();
    let response = console.run_bulk_action(BulkActionKind::Export).await.unwrap();

    assert_eq!(response.report.succeeded.len(), 10);
    assert!(console.selection().is_empty());
    assert_eq!(repository.all_doctors().await.unwrap().len(), 12);
}
