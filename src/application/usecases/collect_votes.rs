// Copyright (c) 2025 Kirky.X
//
// Licensed under the MIT License
// See LICENSE file in the project root for full license information.

use crate::domain::models::votes::{LegislativeNationwide, PresidentialNationwide};
use crate::infrastructure::sirekap::client::SirekapClient;
use crate::infrastructure::sirekap::traits::{FetchError, LocationSource};
use serde::Serialize;
use std::collections::HashMap;
use std::sync::Arc;

/// 候选人编号到简称的映射
///
/// 编号不在映射内的chart键会被跳过
fn candidate_name(code: &str) -> Option<&'static str> {
    match code {
        "100025" => Some("AMIN"),
        "100026" => Some("PAGI"),
        "100027" => Some("GAMA"),
        _ => None,
    }
}

/// 面向消费方的单站计票报告
///
/// chart键已换成候选人简称，扫描件URL暴露为`docs`
#[derive(Debug, Clone, Serialize)]
pub struct TpsReport {
    pub votes: HashMap<String, i64>,
    pub docs: Vec<String>,
}

/// 计票收集用例
pub struct VoteCollector {
    client: Arc<SirekapClient>,
}

impl VoteCollector {
    pub fn new(client: Arc<SirekapClient>) -> Self {
        Self { client }
    }

    /// 抓取单个投票站的计票并把候选人编号换成简称
    pub async fn tps_report(&self, tps_code: &str) -> Result<TpsReport, FetchError> {
        let data = self.client.votes_by_tps(tps_code).await?;

        let mut votes = HashMap::new();
        for (code, count) in data.chart.unwrap_or_default() {
            if let Some(name) = candidate_name(&code) {
                votes.insert(name.to_string(), count);
            }
        }

        Ok(TpsReport {
            votes,
            docs: data.images.unwrap_or_default(),
        })
    }

    /// 抓取全国总统选举计票文档
    pub async fn presidential_nationwide(&self) -> Result<PresidentialNationwide, FetchError> {
        self.client.presidential_nationwide().await
    }

    /// 抓取全国立法机构选举计票文档
    pub async fn legislative_nationwide(&self) -> Result<LegislativeNationwide, FetchError> {
        self.client.legislative_nationwide().await
    }

    /// 抓取省份列表并建立省代码到省名的映射
    ///
    /// 按省拆分CSV导出时用来命名文件
    pub async fn province_names(&self) -> Result<HashMap<String, String>, FetchError> {
        let provinces = self.client.fetch_locations(&["0"]).await?;
        Ok(provinces
            .into_iter()
            .map(|province| (province.code, province.name))
            .collect())
    }
}
