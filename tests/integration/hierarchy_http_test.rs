// Copyright (c) 2025 Kirky.X
//
// Licensed under the MIT License
// See LICENSE file in the project root for full license information.

use crate::integration::helpers::{location, FakeUpstream};
use serde_json::json;
use sirekaprs::application::usecases::build_hierarchy::HierarchyBuilder;
use sirekaprs::infrastructure::sirekap::client::SirekapClient;
use sirekaprs::utils::errors::HierarchyError;
use std::sync::Arc;

fn builder(base_url: &str, capacity: usize) -> HierarchyBuilder<SirekapClient> {
    let client = SirekapClient::new(base_url, reqwest::Client::new()).unwrap();
    HierarchyBuilder::new(Arc::new(client), capacity)
}

#[tokio::test]
async fn test_single_province_with_empty_district_list() {
    // The district list for KOTA A is empty, so no sub-district endpoint is
    // configured; a stray fetch would hit a 404 and fail the build.
    let base = FakeUpstream::new()
        .with_locations(&["0"], json!([location("ACEH", 1, "11", 1)]))
        .with_locations(&["11"], json!([location("KOTA A", 10, "1101", 2)]))
        .with_locations(&["11", "1101"], json!([]))
        .start()
        .await;

    let forest = builder(&base, 4).build_tree(None).await.unwrap();

    assert_eq!(forest.len(), 1);
    assert_eq!(forest[0].location.name, "ACEH");
    assert_eq!(forest[0].cities.len(), 1);
    assert_eq!(forest[0].cities[0].location.name, "KOTA A");
    assert!(forest[0].cities[0].districts.is_empty());
}

#[tokio::test]
async fn test_full_depth_expansion() {
    let base = FakeUpstream::new()
        .with_locations(&["0"], json!([location("ACEH", 1, "11", 1)]))
        .with_locations(&["11"], json!([location("KOTA A", 10, "1101", 2)]))
        .with_locations(
            &["11", "1101"],
            json!([location("KEC X", 100, "110101", 3)]),
        )
        .with_locations(
            &["11", "1101", "110101"],
            json!([
                location("DESA P", 1000, "1101011001", 4),
                location("DESA Q", 1001, "1101011002", 4)
            ]),
        )
        .start()
        .await;

    let forest = builder(&base, 2).build_tree(None).await.unwrap();

    let district = &forest[0].cities[0].districts[0];
    assert_eq!(district.location.code, "110101");
    assert_eq!(district.subdistricts.len(), 2);
    // Source ordering is preserved as-is
    assert_eq!(district.subdistricts[0].name, "DESA P");
    assert_eq!(district.subdistricts[1].name, "DESA Q");
}

#[tokio::test]
async fn test_failed_city_fetch_fails_whole_build_with_node_identity() {
    let base = FakeUpstream::new()
        .with_locations(&["0"], json!([location("ACEH", 1, "11", 1)]))
        .poison_locations(&["11"])
        .start()
        .await;

    let err = builder(&base, 4).build_tree(None).await.unwrap_err();

    match &err {
        HierarchyError::Expand { name, code, .. } => {
            assert_eq!(name, "ACEH");
            assert_eq!(code, "11");
        }
        other => panic!("expected Expand error, got {:?}", other),
    }
    let message = err.to_string();
    assert!(message.contains("ACEH"));
    assert!(message.contains("11"));
}

#[tokio::test]
async fn test_root_fetch_failure_attempts_no_children() {
    let base = FakeUpstream::new().poison_locations(&["0"]).start().await;

    let err = builder(&base, 4).build_tree(None).await.unwrap_err();
    assert!(matches!(err, HierarchyError::Root(_)));
}

#[tokio::test]
async fn test_max_roots_truncates_before_expansion() {
    // Only the first province has children configured; if truncation did not
    // happen before fan-out, the second province's fetch would fail the build.
    let base = FakeUpstream::new()
        .with_locations(
            &["0"],
            json!([location("ACEH", 1, "11", 1), location("BALI", 2, "51", 1)]),
        )
        .with_locations(&["11"], json!([]))
        .start()
        .await;

    let forest = builder(&base, 4).build_tree(Some(1)).await.unwrap();

    assert_eq!(forest.len(), 1);
    assert_eq!(forest[0].location.code, "11");
}

#[tokio::test]
async fn test_max_roots_zero_expands_everything() {
    let base = FakeUpstream::new()
        .with_locations(
            &["0"],
            json!([location("ACEH", 1, "11", 1), location("BALI", 2, "51", 1)]),
        )
        .with_locations(&["11"], json!([]))
        .with_locations(&["51"], json!([]))
        .start()
        .await;

    let forest = builder(&base, 4).build_tree(Some(0)).await.unwrap();
    assert_eq!(forest.len(), 2);
}

#[tokio::test]
async fn test_repeated_builds_are_structurally_identical() {
    let base = FakeUpstream::new()
        .with_locations(
            &["0"],
            json!([location("ACEH", 1, "11", 1), location("BALI", 2, "51", 1)]),
        )
        .with_locations(&["11"], json!([location("KOTA A", 10, "1101", 2)]))
        .with_locations(&["11", "1101"], json!([]))
        .with_locations(&["51"], json!([]))
        .start()
        .await;

    let hierarchy = builder(&base, 2);
    let first = hierarchy.build_tree(None).await.unwrap();
    let second = hierarchy.build_tree(None).await.unwrap();

    assert_eq!(first, second);
}
