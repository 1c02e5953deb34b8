// Copyright 2025 Kirky.X
//
// Licensed under the Apache License, Version 2.0 (the "License");
// you may not use this file except in compliance with the License.
// You may obtain a copy of the License at
//
//     http://www.apache.org/licenses/LICENSE-2.0
//
// Unless required by applicable law or agreed to in writing, software
// distributed under the License is distributed on an "AS IS" BASIS,
// WITHOUT WARRANTIES OR CONDITIONS OF ANY KIND, either express or implied.
// See the License for the specific language governing permissions and
// limitations under the License.

use crate::domain::models::location::Location;
use crate::domain::models::votes::{LegislativeNationwide, PresidentialNationwide, TpsVotes};
use crate::infrastructure::sirekap::traits::{FetchError, LocationSource};
use async_trait::async_trait;
use serde::de::DeserializeOwned;
use url::Url;

/// Sirekap对象存储的默认基础URL
pub const DEFAULT_BASE_URL: &str = "https://sirekap-obj-data.kpu.go.id";

/// 区划层级端点的固定前缀
const LOCATION_BASE_PATH: &str = "wilayah/pemilu/ppwp";

/// 计票端点的固定前缀
const VOTES_BASE_PATH: &str = "pemilu/hhcw";

/// Sirekap数据源客户端
///
/// 对上游只读JSON端点的薄封装：拼URL、发一次GET、解码整个响应体。
/// 不重试、不缓存、不记录日志；HTTP客户端由构造方注入并在所有并发任务间共享。
pub struct SirekapClient {
    base_url: Url,
    http: reqwest::Client,
}

impl SirekapClient {
    /// 创建一个新的SirekapClient实例
    ///
    /// # 参数
    ///
    /// * `base_url` - 上游基础URL，仅含scheme和host
    /// * `http` - 注入的reqwest客户端，连接池在调用方之间共享
    pub fn new(base_url: &str, http: reqwest::Client) -> Result<Self, FetchError> {
        let base_url = Url::parse(base_url)?;
        Ok(Self { base_url, http })
    }

    /// 拼接目标地址：`<base>/<prefix>/<seg1>/.../<segN>.json`
    fn endpoint(&self, prefix: &str, segments: &[&str]) -> Result<Url, FetchError> {
        let mut path = String::from(prefix);
        for segment in segments {
            path.push('/');
            path.push_str(segment);
        }
        path.push_str(".json");

        let full = format!("{}/{}", self.base_url.as_str().trim_end_matches('/'), path);
        Ok(Url::parse(&full)?)
    }

    /// 发起一次GET并把完整响应体解码为`T`
    ///
    /// 与上游行为保持一致，不检查HTTP状态码：错误页会以解码失败的形式暴露
    async fn get_json<T: DeserializeOwned>(
        &self,
        prefix: &str,
        segments: &[&str],
    ) -> Result<T, FetchError> {
        let url = self.endpoint(prefix, segments)?;
        let body = self.http.get(url).send().await?.bytes().await?;
        Ok(serde_json::from_slice(&body)?)
    }

    /// 按TPS代码抓取单个投票站的计票文档
    ///
    /// 13位TPS代码的前缀（2、4、6、10位）即上级区划代码，
    /// 依次构成URL的五个路径段
    pub async fn votes_by_tps(&self, tps_code: &str) -> Result<TpsVotes, FetchError> {
        if tps_code.len() != 13 || !tps_code.is_ascii() {
            return Err(FetchError::InvalidTpsCode(tps_code.to_string()));
        }

        let segments = [
            "ppwp",
            &tps_code[0..2],
            &tps_code[0..4],
            &tps_code[0..6],
            &tps_code[0..10],
            tps_code,
        ];
        self.get_json(VOTES_BASE_PATH, &segments).await
    }

    /// 抓取全国总统选举计票文档
    pub async fn presidential_nationwide(&self) -> Result<PresidentialNationwide, FetchError> {
        self.get_json(VOTES_BASE_PATH, &["ppwp"]).await
    }

    /// 抓取全国立法机构选举计票文档
    pub async fn legislative_nationwide(&self) -> Result<LegislativeNationwide, FetchError> {
        self.get_json(VOTES_BASE_PATH, &["pdpr"]).await
    }
}

#[async_trait]
impl LocationSource for SirekapClient {
    async fn fetch_locations(&self, segments: &[&str]) -> Result<Vec<Location>, FetchError> {
        self.get_json(LOCATION_BASE_PATH, segments).await
    }
}
