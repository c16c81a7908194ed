use crate::hierarchy::{City, County, Hierarchy, Level, Province, RegionEntry, Town};

/// 默认的路径分隔符
pub const DEFAULT_SEPARATOR: &str = " > ";

/// 区域查询器，只读地遍历一棵已构建（或已加载）的四级结构
///
/// 所有查询都不会失败：未知的编码段返回空列表，无法解析的编码返回 `None`。
#[derive(Debug, Clone, Copy)]
pub struct RegionIndex<'a> {
    hierarchy: &'a Hierarchy,
}

impl<'a> RegionIndex<'a> {
    pub fn new(hierarchy: &'a Hierarchy) -> Self {
        Self { hierarchy }
    }

    pub fn hierarchy(&self) -> &'a Hierarchy {
        self.hierarchy
    }

    /// 获取所有省份
    pub fn list_provinces(&self) -> Vec<RegionEntry> {
        self.hierarchy
            .provinces
            .values()
            .map(|p| RegionEntry::new(&p.name, &p.code))
            .collect()
    }

    /// 根据省编码段获取城市
    pub fn list_cities(&self, province: &str) -> Vec<RegionEntry> {
        self.province(province)
            .map(|p| {
                p.cities
                    .values()
                    .map(|c| RegionEntry::new(&c.name, &c.code))
                    .collect()
            })
            .unwrap_or_default()
    }

    /// 根据省、市编码段获取县/区
    pub fn list_counties(&self, province: &str, city: &str) -> Vec<RegionEntry> {
        self.city(province, city)
            .map(|c| {
                c.counties
                    .values()
                    .map(|co| RegionEntry::new(&co.name, &co.code))
                    .collect()
            })
            .unwrap_or_default()
    }

    /// 根据省、市、县/区编码段获取镇/街道
    pub fn list_towns(&self, province: &str, city: &str, county: &str) -> Vec<RegionEntry> {
        self.county(province, city, county)
            .map(|co| {
                co.towns
                    .values()
                    .map(|t| RegionEntry::new(&t.name, &t.code))
                    .collect()
            })
            .unwrap_or_default()
    }

    pub fn province(&self, province: &str) -> Option<&'a Province> {
        self.hierarchy.provinces.get(province)
    }

    pub fn city(&self, province: &str, city: &str) -> Option<&'a City> {
        self.province(province)?.cities.get(city)
    }

    pub fn county(&self, province: &str, city: &str, county: &str) -> Option<&'a County> {
        self.city(province, city)?.counties.get(county)
    }

    pub fn town(&self, province: &str, city: &str, county: &str, town: &str) -> Option<&'a Town> {
        self.county(province, city, county)?.towns.get(town)
    }

    /// 根据完整编码获取地区名称
    ///
    /// 6 位编码以 "0000" 结尾为省级，以 "00" 结尾且城市存在为市级，
    /// 其余 6 位编码为县/区级；9 位编码为镇/街道级。其它长度一律查不到。
    pub fn resolve_name(&self, code: &str) -> Option<&'a str> {
        if code.is_empty() {
            return None;
        }
        let len = code.chars().count();
        let province = self.province(Level::Province.segment(code))?;

        if len == 6 && code.ends_with("0000") {
            return Some(province.name.as_str());
        }

        let city = province.cities.get(Level::City.segment(code));
        if len == 6 && code.ends_with("00") {
            if let Some(city) = city {
                return Some(city.name.as_str());
            }
        }

        let county = city.and_then(|c| c.counties.get(Level::County.segment(code)));
        match len {
            6 => county.map(|co| co.name.as_str()),
            9 => county
                .and_then(|co| co.towns.get(Level::Town.segment(code)))
                .map(|t| t.name.as_str()),
            _ => None,
        }
    }

    /// 获取完整的地区路径
    ///
    /// 逐级累积名称，遇到无法解析的层级即停止并返回已解析的部分；
    /// 连省份都查不到时返回 `None`。
    pub fn resolve_path(&self, code: &str) -> Option<Vec<&'a str>> {
        if code.is_empty() {
            return None;
        }
        let len = code.chars().count();
        let province = self.province(Level::Province.segment(code))?;
        let mut path = vec![province.name.as_str()];

        if len == 6 && code.ends_with("0000") {
            return Some(path);
        }

        let Some(city) = province.cities.get(Level::City.segment(code)) else {
            return Some(path);
        };
        path.push(city.name.as_str());
        if len == 6 && code.ends_with("00") {
            return Some(path);
        }

        let Some(county) = city.counties.get(Level::County.segment(code)) else {
            return Some(path);
        };
        path.push(county.name.as_str());
        if len != 9 {
            return Some(path);
        }

        if let Some(town) = county.towns.get(Level::Town.segment(code)) {
            path.push(town.name.as_str());
        }
        Some(path)
    }

    /// 用分隔符拼接完整路径，如 "吉林省 > 白城市 > 通榆县"
    pub fn format_path(&self, code: &str, separator: &str) -> Option<String> {
        self.resolve_path(code).map(|path| path.join(separator))
    }
}

impl Hierarchy {
    pub fn index(&self) -> RegionIndex<'_> {
        RegionIndex::new(self)
    }
}
