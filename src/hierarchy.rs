use indexmap::map::Entry;
use indexmap::IndexMap;
use serde::{Deserialize, Serialize};
use tracing::{debug, info, warn};

/// 名称与完整编码，既用于解析出的单行数据，也用于查询结果
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RegionEntry {
    pub name: String,
    pub code: String,
}

impl RegionEntry {
    pub fn new(name: impl Into<String>, code: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            code: code.into(),
        }
    }
}

/// 一行源数据：某个镇/街道及其完整的上级链
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RegionRecord {
    pub province: RegionEntry,
    pub city: RegionEntry,
    pub county: RegionEntry,
    pub town: RegionEntry,
}

/// 行政层级
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum Level {
    Province,
    City,
    County,
    Town,
}

impl Level {
    pub const ALL: [Level; 4] = [Level::Province, Level::City, Level::County, Level::Town];

    /// 该层级编码段在完整编码中的字符区间，镇级一直取到末尾
    pub fn span(self) -> (usize, Option<usize>) {
        match self {
            Level::Province => (0, Some(2)),
            Level::City => (2, Some(4)),
            Level::County => (4, Some(6)),
            Level::Town => (6, None),
        }
    }

    /// 从编码中切出该层级的编码段
    ///
    /// 编码长度不足时返回较短或空的编码段，不做校验。
    pub fn segment(self, code: &str) -> &str {
        let (start, end) = self.span();
        slice_chars(code, start, end)
    }

    pub fn child(self) -> Option<Level> {
        match self {
            Level::Province => Some(Level::City),
            Level::City => Some(Level::County),
            Level::County => Some(Level::Town),
            Level::Town => None,
        }
    }
}

fn slice_chars(s: &str, start: usize, end: Option<usize>) -> &str {
    let byte_at = |n: usize| s.char_indices().nth(n).map_or(s.len(), |(i, _)| i);
    let from = byte_at(start);
    let to = end.map_or(s.len(), byte_at).max(from);
    &s[from..to]
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Town {
    pub name: String,
    pub code: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct County {
    pub name: String,
    pub code: String,
    #[serde(default)]
    pub towns: IndexMap<String, Town>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct City {
    pub name: String,
    pub code: String,
    #[serde(default)]
    pub counties: IndexMap<String, County>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Province {
    pub name: String,
    pub code: String,
    #[serde(default)]
    pub cities: IndexMap<String, City>,
}

/// 省 → 市 → 县/区 → 镇/街道 四级结构，每层以编码段为键，保持首次插入顺序
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Hierarchy {
    pub provinces: IndexMap<String, Province>,
}

/// 各层级节点数量
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
pub struct HierarchyStats {
    pub provinces: usize,
    pub cities: usize,
    pub counties: usize,
    pub towns: usize,
}

impl Hierarchy {
    /// 由完整的记录序列一次性构建
    pub fn build<I>(records: I) -> Self
    where
        I: IntoIterator<Item = RegionRecord>,
    {
        let mut builder = HierarchyBuilder::new();
        for record in records {
            builder.push(record);
        }
        builder.finish()
    }

    pub fn is_empty(&self) -> bool {
        self.provinces.is_empty()
    }

    pub fn stats(&self) -> HierarchyStats {
        let mut stats = HierarchyStats {
            provinces: self.provinces.len(),
            ..Default::default()
        };
        for province in self.provinces.values() {
            stats.cities += province.cities.len();
            for city in province.cities.values() {
                stats.counties += city.counties.len();
                for county in city.counties.values() {
                    stats.towns += county.towns.len();
                }
            }
        }
        stats
    }

    /// 按插入顺序遍历所有镇/街道，附带其上级节点
    pub fn towns(&self) -> impl Iterator<Item = (&Province, &City, &County, &Town)> {
        self.provinces.values().flat_map(|p| {
            p.cities.values().flat_map(move |c| {
                c.counties
                    .values()
                    .flat_map(move |co| co.towns.values().map(move |t| (p, c, co, t)))
            })
        })
    }
}

/// 把记录逐条折叠进四级结构
///
/// 上级节点只在编码段第一次出现时创建，之后出现的同段记录沿用首次的名称；
/// 镇/街道总是被覆盖，同一编码段以最后一条记录为准。
#[derive(Debug, Default)]
pub struct HierarchyBuilder {
    hierarchy: Hierarchy,
    records: usize,
}

impl HierarchyBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn push(&mut self, record: RegionRecord) {
        let RegionRecord {
            province,
            city,
            county,
            town,
        } = record;

        let province_seg = Level::Province.segment(&province.code).to_string();
        let city_seg = Level::City.segment(&city.code).to_string();
        let county_seg = Level::County.segment(&county.code).to_string();
        let town_seg = Level::Town.segment(&town.code).to_string();

        let province_node = self
            .hierarchy
            .provinces
            .entry(province_seg)
            .or_insert_with(|| Province {
                name: province.name,
                code: province.code,
                cities: IndexMap::new(),
            });

        let city_node = province_node
            .cities
            .entry(city_seg)
            .or_insert_with(|| City {
                name: city.name,
                code: city.code,
                counties: IndexMap::new(),
            });

        let county_node = city_node
            .counties
            .entry(county_seg)
            .or_insert_with(|| County {
                name: county.name,
                code: county.code,
                towns: IndexMap::new(),
            });

        let node = Town {
            name: town.name,
            code: town.code,
        };
        match county_node.towns.entry(town_seg) {
            Entry::Occupied(mut slot) => {
                if slot.get().name != node.name {
                    warn!(code = %node.code, old = %slot.get().name, new = %node.name, "镇/街道编码重复，以后出现的记录为准");
                }
                slot.insert(node);
            }
            Entry::Vacant(slot) => {
                slot.insert(node);
            }
        }
        self.records += 1;
    }

    pub fn finish(self) -> Hierarchy {
        let stats = self.hierarchy.stats();
        debug!(records = self.records, "记录折叠完成");
        info!(
            provinces = stats.provinces,
            cities = stats.cities,
            counties = stats.counties,
            towns = stats.towns,
            "结构化数据生成完成"
        );
        self.hierarchy
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn segments_use_fixed_offsets() {
        assert_eq!(Level::Province.segment("220000"), "22");
        assert_eq!(Level::City.segment("220800"), "08");
        assert_eq!(Level::County.segment("220822"), "22");
        assert_eq!(Level::Town.segment("220822002"), "002");
    }

    #[test]
    fn short_codes_yield_degenerate_segments() {
        assert_eq!(Level::Province.segment("2"), "2");
        assert_eq!(Level::City.segment("2"), "");
        assert_eq!(Level::County.segment("22081"), "1");
        assert_eq!(Level::Town.segment("220822"), "");
        assert_eq!(Level::Town.segment(""), "");
    }

    #[test]
    fn slicing_counts_chars_not_bytes() {
        assert_eq!(slice_chars("吉林省", 1, Some(2)), "林");
        assert_eq!(slice_chars("吉林", 5, None), "");
    }
}
