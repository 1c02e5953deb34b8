// Copyright (c) 2025 Kirky.X
//
// Licensed under the MIT License
// See LICENSE file in the project root for full license information.

use crate::presentation::handlers::{location_handler, votes_handler};
use axum::{routing::get, Json, Router};
use serde_json::json;

/// 创建应用路由
///
/// 处理器依赖通过`Extension`层注入，由调用方在挂载时提供
///
/// # 返回值
///
/// 返回配置好的路由
pub fn routes() -> Router {
    Router::new()
        .route("/health", get(health_check))
        .route("/v1/version", get(version))
        .route("/v1/locations", get(location_handler::get_locations))
        .route("/v1/votes", get(votes_handler::get_tps_votes))
        .route(
            "/v1/votes/nationwide",
            get(votes_handler::get_nationwide_votes),
        )
}

/// 健康检查
async fn health_check() -> Json<serde_json::Value> {
    Json(json!({ "status": "ok" }))
}

/// 版本信息
async fn version() -> Json<serde_json::Value> {
    Json(json!({ "version": env!("CARGO_PKG_VERSION") }))
}
