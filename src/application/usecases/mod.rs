// Copyright (c) 2025 Kirky.X
//
// Licensed under the MIT License
// See LICENSE file in the project root for full license information.

/// 层级装配用例
pub mod build_hierarchy;

/// 计票收集用例
pub mod collect_votes;
