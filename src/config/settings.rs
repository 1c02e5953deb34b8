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

use config::{Config, ConfigError, Environment, File};
use serde::Deserialize;

/// 应用程序配置设置
///
/// 包含服务器、上游数据源、并发控制和导出等所有配置项
#[derive(Debug, Deserialize)]
pub struct Settings {
    /// 服务器配置
    pub server: ServerSettings,
    /// 上游数据源配置
    pub upstream: UpstreamSettings,
    /// 并发控制配置
    pub concurrency: ConcurrencySettings,
    /// 导出配置
    pub export: ExportSettings,
}

/// 服务器配置设置
#[derive(Debug, Deserialize)]
pub struct ServerSettings {
    /// 服务器监听主机地址
    pub host: String,
    /// 服务器监听端口
    pub port: u16,
}

/// 上游数据源配置设置
#[derive(Debug, Deserialize)]
pub struct UpstreamSettings {
    /// Sirekap对象存储基础URL
    pub base_url: String,
    /// 单次请求超时时间（秒）
    pub timeout_secs: u64,
    /// 是否跳过TLS证书验证
    pub accept_invalid_certs: bool,
}

/// 并发控制配置设置
#[derive(Debug, Deserialize)]
pub struct ConcurrencySettings {
    /// 省级子树扩展的最大并发任务数
    pub capacity: usize,
}

/// 导出配置设置
#[derive(Debug, Deserialize)]
pub struct ExportSettings {
    /// 导出文件输出目录
    pub output_dir: String,
}

impl Settings {
    /// 创建新的配置实例
    ///
    /// 从环境变量加载配置，支持默认值
    ///
    /// # Returns
    ///
    /// * `Ok(Settings)` - 成功加载的配置
    /// * `Err(ConfigError)` - 配置加载失败
    pub fn new() -> Result<Self, ConfigError> {
        let env = std::env::var("APP_ENVIRONMENT").unwrap_or_else(|_| "default".to_string());
        let builder = Config::builder()
            // Start with default settings
            .set_default("server.host", "0.0.0.0")?
            .set_default("server.port", 8080)?
            // Default upstream settings
            .set_default(
                "upstream.base_url",
                crate::infrastructure::sirekap::client::DEFAULT_BASE_URL,
            )?
            .set_default("upstream.timeout_secs", 30)?
            .set_default("upstream.accept_invalid_certs", false)?
            // Default concurrency settings
            .set_default("concurrency.capacity", default_capacity() as i64)?
            // Default export settings
            .set_default("export.output_dir", "output")?
            .add_source(File::with_name("config/default").required(false))
            .add_source(File::with_name(&format!("config/{}", env)).required(false))
            .add_source(Environment::with_prefix("SIREKAPRS").separator("__"));

        builder.build()?.try_deserialize()
    }
}

/// 默认并发容量
///
/// 取可用的执行单元数，至少为1
pub fn default_capacity() -> usize {
    std::thread::available_parallelism()
        .map(|n| n.get())
        .unwrap_or(1)
}
