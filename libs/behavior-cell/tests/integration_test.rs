// libs/behavior-cell/tests/integration_test.rs

use std::sync::Arc;

use shared_config::AppConfig;
use shared_models::listing::{PageRequest, SortDirection};
use shared_utils::listing::{ListQuery, ListView, SortSpec};

use behavior_cell::fixtures;
use behavior_cell::{
    BehaviorFilter, BehaviorMonitoringService, BehaviorSortKey, InMemoryBehaviorRepository,
    RiskLevel,
};

fn service() -> BehaviorMonitoringService {
    let repository = InMemoryBehaviorRepository::new(
        fixtures::behaviors(),
        fixtures::trends(),
        fixtures::appointments(),
    )
    .unwrap();
    BehaviorMonitoringService::new(&AppConfig::default(), Arc::new(repository))
}

#[tokio::test]
async fn test_every_band_counted_once() {
    let service = service();
    let summary = service.summary().await.unwrap();
    assert_eq!(summary.high_risk + summary.medium_risk + summary.low_risk, summary.monitored);

    for level in [RiskLevel::High, RiskLevel::Medium, RiskLevel::Low] {
        let query = ListQuery {
            search: String::new(),
            filter: BehaviorFilter {
                risk_level: Some(level),
                ..BehaviorFilter::default()
            },
            sort: SortSpec::with_default_direction(BehaviorSortKey::RiskScore),
            page: PageRequest::new(1, 50),
        };
        let page = service.list(&query).await.unwrap();
        assert!(page.items.iter().all(|b| b.risk_level() == level));
    }
}

#[tokio::test]
async fn test_boundary_scores_land_in_upper_band() {
    let service = service();
    let page = service
        .list(&ListQuery {
            search: "omar".to_string(),
            filter: BehaviorFilter::default(),
            sort: SortSpec::with_default_direction(BehaviorSortKey::RiskScore),
            page: PageRequest::first(10),
        })
        .await
        .unwrap();

    assert_eq!(page.items[0].risk_score, 70.0);
    assert_eq!(page.items[0].risk_level(), RiskLevel::High);
}

#[tokio::test]
async fn test_view_toggles_from_descending_default() {
    let service = service();
    let mut view = ListView::new(BehaviorFilter::default(), BehaviorSortKey::RiskScore, 4);
    assert_eq!(view.sort().direction, SortDirection::Desc);

    view.sort_by(BehaviorSortKey::RiskScore);
    let page = service.list(&view.query()).await.unwrap();
    let scores: Vec<f64> = page.items.iter().map(|b| b.risk_score).collect();
    assert_eq!(scores, vec![12.0, 38.5, 40.0, 45.0]);

    view.sort_by(BehaviorSortKey::NoShows);
    assert_eq!(view.sort().direction, SortDirection::Desc);
    let page = service.list(&view.query()).await.unwrap();
    assert_eq!(page.items[0].no_shows, 11);
}
