// Copyright (c) 2025 Kirky.X
//
// Licensed under the MIT License
// See LICENSE file in the project root for full license information.

use thiserror::Error;

/// JSON文件导出模块
pub mod json;

/// CSV文件导出模块
pub mod csv;


/// 导出错误类型
#[derive(Error, Debug)]
pub enum ExportError {
    #[error("io error: {0}")]
    Io(#[from] std::io::Error),

    #[error("serialize export payload: {0}")]
    Serialize(#[from] serde_json::Error),

    #[error("write csv record: {0}")]
    Csv(#[from] ::csv::Error),
}
