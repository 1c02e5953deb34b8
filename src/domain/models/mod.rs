// Copyright (c) 2025 Kirky.X
//
// Licensed under the MIT License
// See LICENSE file in the project root for full license information.

/// 行政区划层级模型
pub mod location;

/// 计票数据模型
pub mod votes;
