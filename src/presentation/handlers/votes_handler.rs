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

use crate::application::usecases::collect_votes::{TpsReport, VoteCollector};
use crate::domain::models::votes::PresidentialNationwide;
use crate::presentation::errors::AppError;

#[derive(Debug, Deserialize)]
pub struct TpsQuery {
    /// 13位TPS代码
    pub tps: String,
}

/// 返回单个投票站的计票报告，chart键已换成候选人简称
pub async fn get_tps_votes(
    Extension(collector): Extension<Arc<VoteCollector>>,
    Query(query): Query<TpsQuery>,
) -> Result<Json<TpsReport>, AppError> {
    let report = collector.tps_report(&query.tps).await?;
    Ok(Json(report))
}

/// 返回全国总统选举计票文档
pub async fn get_nationwide_votes(
    Extension(collector): Extension<Arc<VoteCollector>>,
) -> Result<Json<PresidentialNationwide>, AppError> {
    let tally = collector.presidential_nationwide().await?;
    Ok(Json(tally))
}
