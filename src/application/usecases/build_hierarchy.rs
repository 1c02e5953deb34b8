// Copyright 2025 Kirky.X
//
// Licensed under the Apache License, Version 2.0 (the "License");
// you may not use this file except in compliance with the License.
// You may obtain a copy of the License at
//
//     http://www.apache.org/licenses/LICENSE-2.0
//
// Unless required by applicable law or agreed to in writing, software
// distributed under the License is distributed on an "AS IS" BASIS,
// WITHOUT WARRANTIES OR CONDITIONS OF ANY KIND, either express or implied.
// See the License for the specific language governing permissions and
// limitations under the License.

use crate::domain::models::location::{CityTree, DistrictTree, Location, ProvinceTree};
use crate::infrastructure::sirekap::traits::LocationSource;
use crate::utils::errors::{Depth, HierarchyError};
use crate::utils::task_group::BoundedTaskGroup;
use std::sync::{Arc, OnceLock};

/// 层级装配器
///
/// 以"0"为根抓取省份列表，再为每个省份调度一个扩展任务：
/// 省级扇出受有界任务组约束，省内的市、区、乡三级在单个任务内顺序抓取。
/// 结果按根响应的省份顺序装配，与任务完成顺序无关。
pub struct HierarchyBuilder<S> {
    source: Arc<S>,
    capacity: usize,
}

impl<S: LocationSource + 'static> HierarchyBuilder<S> {
    /// 创建一个新的HierarchyBuilder实例
    ///
    /// # 参数
    ///
    /// * `source` - 注入的区划数据源，在全部并发任务间共享
    /// * `capacity` - 省级扩展的最大并发任务数，至少为1
    pub fn new(source: Arc<S>, capacity: usize) -> Self {
        Self {
            source,
            capacity: capacity.max(1),
        }
    }

    /// 装配完整的四级区划森林
    ///
    /// 任意深度上的任意一次抓取失败都会让整个调用失败，
    /// 已在途的兄弟任务仍会运行到结束，其结果被丢弃；不返回部分树。
    ///
    /// # 参数
    ///
    /// * `max_roots` - 大于0时只扩展前N个省份（用于采样），否则扩展全部
    pub async fn build_tree(
        &self,
        max_roots: Option<usize>,
    ) -> Result<Vec<ProvinceTree>, HierarchyError> {
        let mut provinces = self
            .source
            .fetch_locations(&["0"])
            .await
            .map_err(HierarchyError::Root)?;

        if let Some(limit) = max_roots {
            if limit > 0 {
                provinces.truncate(limit);
            }
        }

        // Result slots are reserved by index before fan-out begins; each task
        // writes only its own slot, so no lock is needed.
        let slots: Arc<Vec<OnceLock<ProvinceTree>>> =
            Arc::new((0..provinces.len()).map(|_| OnceLock::new()).collect());

        let mut group = BoundedTaskGroup::new(self.capacity);
        for (idx, province) in provinces.into_iter().enumerate() {
            let source = Arc::clone(&self.source);
            let slots = Arc::clone(&slots);

            group
                .spawn(async move {
                    let tree = expand_province(source, province).await?;
                    let _ = slots[idx].set(tree);
                    Ok(())
                })
                .await;
        }

        group.wait().await?;

        let slots = Arc::into_inner(slots).expect("all expansion tasks have finished");
        let forest = slots
            .into_iter()
            .map(|slot| slot.into_inner().expect("expansion task filled its slot"))
            .collect();

        Ok(forest)
    }
}

/// 顺序扩展一个省份的完整子树
///
/// 空的子级列表不会触发更深一级的抓取
async fn expand_province<S: LocationSource>(
    source: Arc<S>,
    province: Location,
) -> Result<ProvinceTree, HierarchyError> {
    let cities = source
        .fetch_locations(&[province.code.as_str()])
        .await
        .map_err(|err| HierarchyError::expand(Depth::Province, &province, err))?;

    let mut city_trees = Vec::with_capacity(cities.len());
    for city in cities {
        let districts = source
            .fetch_locations(&[province.code.as_str(), city.code.as_str()])
            .await
            .map_err(|err| HierarchyError::expand(Depth::City, &city, err))?;

        let mut district_trees = Vec::with_capacity(districts.len());
        for district in districts {
            let subdistricts = source
                .fetch_locations(&[
                    province.code.as_str(),
                    city.code.as_str(),
                    district.code.as_str(),
                ])
                .await
                .map_err(|err| HierarchyError::expand(Depth::District, &district, err))?;

            district_trees.push(DistrictTree {
                location: district,
                subdistricts,
            });
        }

        city_trees.push(CityTree {
            location: city,
            districts: district_trees,
        });
    }

    Ok(ProvinceTree {
        location: province,
        cities: city_trees,
    })
}
