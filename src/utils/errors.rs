// Copyright (c) 2025 Kirky.X
//
// Licensed under the MIT License
// See LICENSE file in the project root for full license information.

use crate::domain::models::location::Location;
use crate::infrastructure::sirekap::traits::FetchError;
use std::fmt;
use thiserror::Error;

/// 正在扩展的节点所处的层级
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Depth {
    Province,
    City,
    District,
}

impl fmt::Display for Depth {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Depth::Province => "province",
            Depth::City => "city",
            Depth::District => "district",
        };
        f.write_str(name)
    }
}

/// 层级装配错误类型
#[derive(Error, Debug)]
pub enum HierarchyError {
    /// 根级省份列表抓取失败，未尝试任何子级
    #[error("fetch province list: {0}")]
    Root(#[source] FetchError),

    /// 某个节点的子级抓取失败，携带失败节点的名称、代码与层级
    #[error("expand {depth} {name} ({code}): {source}")]
    Expand {
        depth: Depth,
        name: String,
        code: String,
        #[source]
        source: FetchError,
    },
}

impl HierarchyError {
    /// 把一次子级抓取失败包装为携带节点身份的错误
    pub fn expand(depth: Depth, node: &Location, source: FetchError) -> Self {
        Self::Expand {
            depth,
            name: node.name.clone(),
            code: node.code.clone(),
            source,
        }
    }
}
