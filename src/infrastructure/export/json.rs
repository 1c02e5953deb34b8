// Copyright (c) 2025 Kirky.X
//
// Licensed under the MIT License
// See LICENSE file in the project root for full license information.

use crate::domain::models::location::ProvinceTree;
use crate::infrastructure::export::ExportError;
use chrono::Local;
use serde::Serialize;
use std::path::PathBuf;
use tokio::fs;

/// 带本地处理时间的计票快照封套
#[derive(Serialize)]
struct Snapshot<'a, T: Serialize> {
    local_timestamp: String,
    raw_data: &'a T,
}

/// JSON文件导出器
///
/// 把装配好的区划森林或计票快照写入输出目录
pub struct JsonExporter {
    output_dir: PathBuf,
}

impl JsonExporter {
    pub fn new(output_dir: impl Into<PathBuf>) -> Self {
        Self {
            output_dir: output_dir.into(),
        }
    }

    /// 写出完整的区划森林
    ///
    /// # 参数
    ///
    /// * `forest` - 装配好的省级子树列表
    /// * `static_file_name` - 为true时使用固定文件名，否则文件名带时间戳
    ///
    /// # 返回值
    ///
    /// 返回写出的文件路径
    pub async fn write_locations(
        &self,
        forest: &[ProvinceTree],
        static_file_name: bool,
    ) -> Result<PathBuf, ExportError> {
        let file_name = if static_file_name {
            "indonesia_location.json".to_string()
        } else {
            format!(
                "indonesia_location_{}.json",
                Local::now().format("%Y%m%d-%H%M%S")
            )
        };

        let path = self.output_dir.join(file_name);
        fs::create_dir_all(&self.output_dir).await?;
        fs::write(&path, serde_json::to_vec(forest)?).await?;

        Ok(path)
    }

    /// 写出一份计票快照，包上本地处理时间
    pub async fn write_votes_snapshot<T: Serialize>(
        &self,
        file_name: &str,
        raw: &T,
    ) -> Result<PathBuf, ExportError> {
        let snapshot = Snapshot {
            local_timestamp: Local::now().to_rfc3339(),
            raw_data: raw,
        };

        let dir = self.output_dir.join("votes");
        let path = dir.join(file_name);
        fs::create_dir_all(&dir).await?;
        fs::write(&path, serde_json::to_vec_pretty(&snapshot)?).await?;

        Ok(path)
    }
}
