// Copyright (c) 2025 Kirky.X
//
// Licensed under the MIT License
// See LICENSE file in the project root for full license information.

/// 区划层级处理器
pub mod location_handler;

/// 计票处理器
pub mod votes_handler;
