// Copyright (c) 2025 Kirky.X
//
// Licensed under the MIT License
// See LICENSE file in the project root for full license information.

use crate::domain::models::votes::{LegislativeNationwide, PresidentialNationwide};
use crate::infrastructure::export::ExportError;
use chrono::{DateTime, Local};
use std::collections::HashMap;
use std::fs::OpenOptions;
use std::path::{Path, PathBuf};

/// 立法机构CSV的政党列头，顺序与写出的行一致
const PARTY_HEADER: [&str; 18] = [
    "PKB",
    "Gerindra",
    "PDI-P",
    "Golkar",
    "Nasdem",
    "Partai Buruh",
    "Gelora",
    "PKS",
    "PKN",
    "Hanura",
    "Garuda",
    "PAN",
    "PBB",
    "Demokrat",
    "PSI",
    "Perindo",
    "PPP",
    "Partai Ummat",
];

/// CSV文件导出器
///
/// 为每个省份维护一个追加写入的CSV时间序列文件，
/// 仅在文件首次创建时写表头
pub struct CsvExporter {
    output_dir: PathBuf,
}

impl CsvExporter {
    pub fn new(output_dir: impl Into<PathBuf>) -> Self {
        Self {
            output_dir: output_dir.into(),
        }
    }

    /// 为每个省份追加一行总统选举计票
    ///
    /// 文件名由小写省名（空格换下划线）派生；
    /// `table`中没有该省代码的行会被跳过
    ///
    /// # 返回值
    ///
    /// 返回本次写入的文件路径列表
    pub fn append_presidential(
        &self,
        province_names: &HashMap<String, String>,
        tally: &PresidentialNationwide,
        recorded_at: DateTime<Local>,
    ) -> Result<Vec<PathBuf>, ExportError> {
        let dir = self.output_dir.join("votes");
        std::fs::create_dir_all(&dir)?;

        let mut written = Vec::new();
        for (code, name) in province_names {
            let Some(row) = tally.table.get(code) else {
                continue;
            };

            let path = dir.join(province_file_name("votes_0", name));
            let record = vec![
                tally.ts.clone(),
                row.amin.unwrap_or(0).to_string(),
                row.pagi.unwrap_or(0).to_string(),
                row.gama.unwrap_or(0).to_string(),
                recorded_at.to_rfc3339(),
            ];
            append_record(
                &path,
                &["ts", "amin", "pagi", "gama", "created_at"],
                &record,
            )?;
            written.push(path);
        }

        Ok(written)
    }

    /// 为每个省份追加一行立法机构选举计票
    pub fn append_legislative(
        &self,
        province_names: &HashMap<String, String>,
        tally: &LegislativeNationwide,
        recorded_at: DateTime<Local>,
    ) -> Result<Vec<PathBuf>, ExportError> {
        let dir = self.output_dir.join("votes");
        std::fs::create_dir_all(&dir)?;

        let mut header = vec!["ts", "created_at"];
        header.extend(PARTY_HEADER);

        let mut written = Vec::new();
        for (code, name) in province_names {
            let Some(row) = tally.table.get(code) else {
                continue;
            };

            let path = dir.join(province_file_name("votes_dpr_0", name));
            let mut record = vec![tally.ts.clone(), recorded_at.to_rfc3339()];
            record.extend(
                [
                    row.pkb,
                    row.gerindra,
                    row.pdip,
                    row.golkar,
                    row.nasdem,
                    row.buruh,
                    row.gelora,
                    row.pks,
                    row.pkn,
                    row.hanura,
                    row.garuda,
                    row.pan,
                    row.pbb,
                    row.demokrat,
                    row.psi,
                    row.perindo,
                    row.ppp,
                    row.ummat,
                ]
                .iter()
                .map(|votes| votes.to_string()),
            );
            append_record(&path, &header, &record)?;
            written.push(path);
        }

        Ok(written)
    }
}

/// `votes_0_sulawesi_selatan.csv`风格的文件名
fn province_file_name(prefix: &str, province_name: &str) -> String {
    format!(
        "{}_{}.csv",
        prefix,
        province_name.to_lowercase().replace(' ', "_")
    )
}

/// 追加一行记录，文件不存在时先创建并写表头
fn append_record(path: &Path, header: &[&str], record: &[String]) -> Result<(), ExportError> {
    let is_create = !path.exists();
    let file = OpenOptions::new().create(true).append(true).open(path)?;

    let mut writer = ::csv::Writer::from_writer(file);
    if is_create {
        writer.write_record(header)?;
    }
    writer.write_record(record)?;
    writer.flush()?;

    Ok(())
}
