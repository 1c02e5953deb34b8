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
use async_trait::async_trait;
use thiserror::Error;

/// 抓取错误类型
#[derive(Error, Debug)]
pub enum FetchError {
    /// 网络层失败，原样透传，不做进一步分类
    #[error("http request failed: {0}")]
    Transport(#[from] reqwest::Error),
    /// 响应体不是预期形状的JSON
    #[error("decode response body: {0}")]
    Decode(#[from] serde_json::Error),
    /// 目标URL构造失败
    #[error("build request url: {0}")]
    Url(#[from] url::ParseError),
    /// TPS代码必须是13位
    #[error("invalid TPS code {0:?}, expect 13 chars")]
    InvalidTpsCode(String),
}

/// 区划数据源trait
///
/// 层级装配器的依赖接缝：只要求"能按路径段发起一次GET并解码为区划列表"。
/// 由`SirekapClient`提供生产实现，测试中用假实现替换。
#[async_trait]
pub trait LocationSource: Send + Sync {
    /// 抓取一组路径段对应节点的子级区划列表
    ///
    /// # 参数
    ///
    /// * `segments` - 有序的区划代码路径段，`["0"]`表示列出全部省份
    ///
    /// # 返回值
    ///
    /// * `Ok(Vec<Location>)` - 按数据源顺序返回的子级列表
    /// * `Err(FetchError)` - 网络或解码失败
    async fn fetch_locations(&self, segments: &[&str]) -> Result<Vec<Location>, FetchError>;
}
