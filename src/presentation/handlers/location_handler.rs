// Copyright (c) 2025 Kirky.X
//
// Licensed under the MIT License
// See LICENSE file in the project root for full license information.

use axum::{
    extract::{Extension, Query},
    Json,
};
use serde::Deserialize;
use std::sync::Arc;
use tracing::info;

use crate::application::usecases::build_hierarchy::HierarchyBuilder;
use crate::domain::models::location::ProvinceTree;
use crate::infrastructure::sirekap::client::SirekapClient;
use crate::presentation::errors::AppError;

#[derive(Debug, Deserialize)]
pub struct LocationsQuery {
    /// 大于0时只扩展前N个省份
    pub max_roots: Option<usize>,
}

/// 装配完整区划层级并作为JSON响应返回
///
/// 任意一次上游抓取失败整个请求就失败，不返回部分树
pub async fn get_locations(
    Extension(builder): Extension<Arc<HierarchyBuilder<SirekapClient>>>,
    Query(query): Query<LocationsQuery>,
) -> Result<Json<Vec<ProvinceTree>>, AppError> {
    let forest = builder.build_tree(query.max_roots).await?;
    info!(provinces = forest.len(), "assembled location hierarchy");

    Ok(Json(forest))
}
