// Copyright (c) 2025 Kirky.X
//
// Licensed under the MIT License
// See LICENSE file in the project root for full license information.

use serde::{Deserialize, Serialize};

/// 行政区划记录
///
/// 上游数据源返回的单条区划条目，字段名遵循Sirekap的印尼语命名。
/// `code`用于构造子级抓取URL，`level`由数据源提供，本地不做计算。
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Location {
    /// 区划名称
    #[serde(rename = "nama")]
    pub name: String,
    /// 数据源内部ID
    pub id: i64,
    /// 区划代码，构成子级抓取URL的路径段
    #[serde(rename = "kode")]
    pub code: String,
    /// 层级深度，数据源提供的透传字段
    #[serde(rename = "tingkat")]
    pub level: i64,
}

// 乡/村级没有子级，直接复用`Location`

/// 区/县级子树
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DistrictTree {
    #[serde(flatten)]
    pub location: Location,
    /// 乡/村列表
    #[serde(rename = "desa_kelurahan")]
    pub subdistricts: Vec<Location>,
}

/// 市/县级子树
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CityTree {
    #[serde(flatten)]
    pub location: Location,
    /// 区/县列表
    #[serde(rename = "kecamatan")]
    pub districts: Vec<DistrictTree>,
}

/// 省级子树
///
/// 一次完整抓取的根节点，向下嵌套市、区、乡三级
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ProvinceTree {
    #[serde(flatten)]
    pub location: Location,
    /// 市/县列表
    #[serde(rename = "kota_kabupaten")]
    pub cities: Vec<CityTree>,
}
