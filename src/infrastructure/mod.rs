// Copyright (c) 2025 Kirky.X
//
// Licensed under the MIT License
// See LICENSE file in the project root for full license information.

/// 文件导出模块
pub mod export;

/// Sirekap数据源模块
pub mod sirekap;
