// Copyright (c) 2025 Kirky.X
//
// Licensed under the MIT License
// See LICENSE file in the project root for full license information.

use async_trait::async_trait;
use sirekaprs::application::usecases::build_hierarchy::HierarchyBuilder;
use sirekaprs::domain::models::location::Location;
use sirekaprs::infrastructure::sirekap::traits::{FetchError, LocationSource};
use sirekaprs::utils::errors::{Depth, HierarchyError};
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::Arc;
use std::time::Duration;

fn province(idx: usize) -> Location {
    Location {
        name: format!("PROVINSI {}", idx),
        id: idx as i64,
        code: format!("{}", 10 + idx),
        level: 1,
    }
}

fn decode_error() -> FetchError {
    FetchError::Decode(serde_json::from_str::<i64>("oops").unwrap_err())
}

/// 模拟数据源：记录并发峰值，市级抓取睡一段模拟时长后返回空列表
struct CountingSource {
    provinces: Vec<Location>,
    delay: Duration,
    current: AtomicUsize,
    peak: AtomicUsize,
}

impl CountingSource {
    fn new(province_count: usize, delay: Duration) -> Self {
        Self {
            provinces: (0..province_count).map(province).collect(),
            delay,
            current: AtomicUsize::new(0),
            peak: AtomicUsize::new(0),
        }
    }
}

#[async_trait]
impl LocationSource for CountingSource {
    async fn fetch_locations(&self, segments: &[&str]) -> Result<Vec<Location>, FetchError> {
        if segments == ["0"] {
            return Ok(self.provinces.clone());
        }

        let in_flight = self.current.fetch_add(1, Ordering::SeqCst) + 1;
        self.peak.fetch_max(in_flight, Ordering::SeqCst);
        tokio::time::sleep(self.delay).await;
        self.current.fetch_sub(1, Ordering::SeqCst);

        Ok(vec![])
    }
}

/// 模拟数据源：每个省的市级抓取延迟不同，后提交的省先完成
struct DelayedSource {
    provinces: Vec<Location>,
}

#[async_trait]
impl LocationSource for DelayedSource {
    async fn fetch_locations(&self, segments: &[&str]) -> Result<Vec<Location>, FetchError> {
        if segments == ["0"] {
            return Ok(self.provinces.clone());
        }

        if segments.len() == 1 {
            let position = self
                .provinces
                .iter()
                .position(|p| p.code == segments[0])
                .unwrap();
            // Earlier provinces sleep longer, so completion order is reversed
            let delay = Duration::from_millis(((self.provinces.len() - position) * 10) as u64);
            tokio::time::sleep(delay).await;

            return Ok(vec![Location {
                name: format!("KOTA {}", segments[0]),
                id: 0,
                code: format!("{}01", segments[0]),
                level: 2,
            }]);
        }

        Ok(vec![])
    }
}

/// 模拟数据源：指定省份的市级抓取失败
struct PoisonedSource {
    provinces: Vec<Location>,
    fail_code: String,
}

#[async_trait]
impl LocationSource for PoisonedSource {
    async fn fetch_locations(&self, segments: &[&str]) -> Result<Vec<Location>, FetchError> {
        if segments == ["0"] {
            return Ok(self.provinces.clone());
        }
        if segments[0] == self.fail_code {
            return Err(decode_error());
        }
        Ok(vec![])
    }
}

#[tokio::test(start_paused = true)]
async fn test_province_order_matches_root_response_despite_interleaving() {
    let source = Arc::new(DelayedSource {
        provinces: (0..8).map(province).collect(),
    });
    let builder = HierarchyBuilder::new(source.clone(), 8);

    let forest = builder.build_tree(None).await.unwrap();

    assert_eq!(forest.len(), 8);
    for (idx, tree) in forest.iter().enumerate() {
        assert_eq!(tree.location.code, source.provinces[idx].code);
        assert_eq!(tree.cities[0].location.name, format!("KOTA {}", tree.location.code));
    }
}

#[tokio::test(start_paused = true)]
async fn test_in_flight_expansions_never_exceed_capacity() {
    let source = Arc::new(CountingSource::new(50, Duration::from_millis(100)));
    let builder = HierarchyBuilder::new(source.clone(), 4);

    builder.build_tree(None).await.unwrap();

    assert!(source.peak.load(Ordering::SeqCst) <= 4);
    assert_eq!(source.current.load(Ordering::SeqCst), 0);
}

#[tokio::test(start_paused = true)]
async fn test_wall_time_consistent_with_capacity_waves() {
    // 50 provinces, capacity 4, one 100ms fetch per expansion task:
    // virtual time must come out at ceil(50/4) waves.
    let source = Arc::new(CountingSource::new(50, Duration::from_millis(100)));
    let builder = HierarchyBuilder::new(source, 4);

    let started = tokio::time::Instant::now();
    builder.build_tree(None).await.unwrap();
    let elapsed = started.elapsed();

    assert!(elapsed >= Duration::from_millis(1300), "elapsed {:?}", elapsed);
    assert!(elapsed < Duration::from_millis(1500), "elapsed {:?}", elapsed);
}

#[tokio::test(start_paused = true)]
async fn test_one_poisoned_province_fails_the_whole_build() {
    let source = Arc::new(PoisonedSource {
        provinces: (0..10).map(province).collect(),
        fail_code: "13".to_string(),
    });
    let builder = HierarchyBuilder::new(source, 4);

    let err = builder.build_tree(None).await.unwrap_err();

    match err {
        HierarchyError::Expand { depth, name, code, .. } => {
            assert_eq!(depth, Depth::Province);
            assert_eq!(name, "PROVINSI 3");
            assert_eq!(code, "13");
        }
        other => panic!("expected Expand error, got {:?}", other),
    }
}

#[tokio::test]
async fn test_capacity_one_still_completes() {
    let source = Arc::new(CountingSource::new(5, Duration::from_millis(0)));
    let builder = HierarchyBuilder::new(source.clone(), 1);

    let forest = builder.build_tree(None).await.unwrap();

    assert_eq!(forest.len(), 5);
    assert!(source.peak.load(Ordering::SeqCst) <= 1);
}
