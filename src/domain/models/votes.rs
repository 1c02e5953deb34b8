// Copyright (c) 2025 Kirky.X
//
// Licensed under the MIT License
// See LICENSE file in the project root for full license information.

use serde::{Deserialize, Serialize};
use std::collections::HashMap;

/// 单个投票站（TPS）的计票文档
///
/// `chart`以候选人编号为键；没有上报数据的站点该字段为null
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TpsVotes {
    pub chart: Option<HashMap<String, i64>>,
    /// C1表单扫描件URL列表
    pub images: Option<Vec<String>>,
    pub administrasi: serde_json::Value,
    pub psu: serde_json::Value,
    pub ts: String,
    #[serde(default)]
    pub status_suara: bool,
    #[serde(default)]
    pub status_adm: bool,
}

/// 计票进度
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Progress {
    pub total: i64,
    pub progres: i64,
}

/// 全国总统选举计票文档
///
/// `table`以省代码为键，每行携带三位候选人的票数
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PresidentialNationwide {
    pub ts: String,
    pub psu: String,
    pub mode: String,
    pub chart: HashMap<String, f64>,
    pub table: HashMap<String, PresidentialRow>,
    pub progres: Progress,
}

/// 按省的总统选举计票行
///
/// 上游以候选人编号作为JSON键
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PresidentialRow {
    #[serde(rename = "100025", skip_serializing_if = "Option::is_none")]
    pub amin: Option<i64>,
    #[serde(rename = "100026", skip_serializing_if = "Option::is_none")]
    pub pagi: Option<i64>,
    #[serde(rename = "100027", skip_serializing_if = "Option::is_none")]
    pub gama: Option<i64>,
    pub psu: String,
    pub persen: f64,
    pub status_progress: bool,
}

/// 全国立法机构选举计票文档
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LegislativeNationwide {
    pub ts: String,
    pub psu: String,
    pub mode: String,
    pub chart: PartyVotes,
    pub table: HashMap<String, PartyVotes>,
    pub progres: Progress,
}

/// 按政党编号的立法机构选举计票
///
/// 上游以政党编号（"1".."17"、"24"）作为JSON键
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PartyVotes {
    #[serde(rename = "1", default)]
    pub pkb: i64,
    #[serde(rename = "2", default)]
    pub gerindra: i64,
    #[serde(rename = "3", default)]
    pub pdip: i64,
    #[serde(rename = "4", default)]
    pub golkar: i64,
    #[serde(rename = "5", default)]
    pub nasdem: i64,
    #[serde(rename = "6", default)]
    pub buruh: i64,
    #[serde(rename = "7", default)]
    pub gelora: i64,
    #[serde(rename = "8", default)]
    pub pks: i64,
    #[serde(rename = "9", default)]
    pub pkn: i64,
    #[serde(rename = "10", default)]
    pub hanura: i64,
    #[serde(rename = "11", default)]
    pub garuda: i64,
    #[serde(rename = "12", default)]
    pub pan: i64,
    #[serde(rename = "13", default)]
    pub pbb: i64,
    #[serde(rename = "14", default)]
    pub demokrat: i64,
    #[serde(rename = "15", default)]
    pub psi: i64,
    #[serde(rename = "16", default)]
    pub perindo: i64,
    #[serde(rename = "17", default)]
    pub ppp: i64,
    #[serde(rename = "24", default)]
    pub ummat: i64,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub psu: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub persen: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub status_progress: Option<bool>,
}
