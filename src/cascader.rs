//! 省市县镇四级联动选择
//!
//! 与界面无关：界面层把用户的选择通过 [`Cascader::on_selection_changed`] 传进来，
//! 拿到下一级的候选项去渲染，并通过 [`SelectionListener`] 接收变化通知。

use crate::hierarchy::{Level, RegionEntry};
use crate::region_index::RegionIndex;

/// 未选择的层级在组合编码中的占位
const EMPTY_SEGMENT: &str = "00";

/// 当前各层级选中的编码段，空字符串表示未选择
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Selection {
    pub province: String,
    pub city: String,
    pub county: String,
    pub town: String,
}

impl Selection {
    pub fn get(&self, level: Level) -> &str {
        match level {
            Level::Province => &self.province,
            Level::City => &self.city,
            Level::County => &self.county,
            Level::Town => &self.town,
        }
    }

    fn slot(&mut self, level: Level) -> &mut String {
        match level {
            Level::Province => &mut self.province,
            Level::City => &mut self.city,
            Level::County => &mut self.county,
            Level::Town => &mut self.town,
        }
    }
}

/// 一次选择变化的快照
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SelectionChange {
    pub selection: Selection,
    pub code: String,
    pub path: Vec<String>,
}

pub trait SelectionListener {
    fn on_change(&mut self, change: &SelectionChange);
}

impl<F> SelectionListener for F
where
    F: FnMut(&SelectionChange),
{
    fn on_change(&mut self, change: &SelectionChange) {
        self(change)
    }
}

pub struct Cascader<'a> {
    index: RegionIndex<'a>,
    selection: Selection,
    listener: Option<Box<dyn SelectionListener + 'a>>,
}

impl<'a> Cascader<'a> {
    pub fn new(index: RegionIndex<'a>) -> Self {
        Self {
            index,
            selection: Selection::default(),
            listener: None,
        }
    }

    pub fn with_listener<L>(mut self, listener: L) -> Self
    where
        L: SelectionListener + 'a,
    {
        self.listener = Some(Box::new(listener));
        self
    }

    pub fn selection(&self) -> &Selection {
        &self.selection
    }

    /// 清空所有选择，不触发通知
    pub fn reset(&mut self) {
        self.selection = Selection::default();
    }

    /// 某一层级选中了新的编码段
    ///
    /// 更深的层级全部清空，返回下一级的候选项（选中镇/街道后为空）。
    pub fn on_selection_changed(&mut self, level: Level, segment: &str) -> Vec<RegionEntry> {
        self.select(level, segment);
        self.notify();
        level.child().map(|next| self.options(next)).unwrap_or_default()
    }

    /// 在当前选择下某一层级可供选择的候选项
    pub fn options(&self, level: Level) -> Vec<RegionEntry> {
        let s = &self.selection;
        match level {
            Level::Province => self.index.list_provinces(),
            Level::City if !s.province.is_empty() => self.index.list_cities(&s.province),
            Level::County if !s.city.is_empty() => {
                self.index.list_counties(&s.province, &s.city)
            }
            Level::Town if !s.county.is_empty() => {
                self.index.list_towns(&s.province, &s.city, &s.county)
            }
            _ => Vec::new(),
        }
    }

    /// 当前选择对应的组合编码，未选的省市县以 "00" 占位
    pub fn selected_code(&self) -> String {
        let s = &self.selection;
        let mut code = String::new();
        for seg in [&s.province, &s.city, &s.county] {
            code.push_str(if seg.is_empty() { EMPTY_SEGMENT } else { seg.as_str() });
        }
        code.push_str(&s.town);
        code
    }

    /// 当前选择对应的名称路径，遇到未选或不存在的层级即停止
    pub fn selected_path(&self) -> Vec<&'a str> {
        let s = &self.selection;
        let mut path = Vec::new();

        let Some(province) = self.non_empty(&s.province).and_then(|p| self.index.province(p))
        else {
            return path;
        };
        path.push(province.name.as_str());

        let Some(city) = self.non_empty(&s.city).and_then(|c| province.cities.get(c)) else {
            return path;
        };
        path.push(city.name.as_str());

        let Some(county) = self.non_empty(&s.county).and_then(|co| city.counties.get(co)) else {
            return path;
        };
        path.push(county.name.as_str());

        if let Some(town) = self.non_empty(&s.town).and_then(|t| county.towns.get(t)) {
            path.push(town.name.as_str());
        }
        path
    }

    /// 根据完整编码回填各级选择
    ///
    /// 省份必须存在才会回填；市、县编码段为 "00" 时停止；超过 6 位时回填镇/街道。
    /// 无论回填到哪一级都只通知一次。
    pub fn set_value_by_code(&mut self, code: &str) {
        if code.is_empty() {
            return;
        }
        self.reset();

        let province = Level::Province.segment(code);
        if !province.is_empty()
            && province != EMPTY_SEGMENT
            && self.index.province(province).is_some()
        {
            self.select(Level::Province, province);

            let city = Level::City.segment(code);
            if !city.is_empty() && city != EMPTY_SEGMENT {
                self.select(Level::City, city);

                let county = Level::County.segment(code);
                if !county.is_empty() && county != EMPTY_SEGMENT {
                    self.select(Level::County, county);

                    let town = Level::Town.segment(code);
                    if !town.is_empty() {
                        self.select(Level::Town, town);
                    }
                }
            }
        }

        self.notify();
    }

    fn select(&mut self, level: Level, segment: &str) {
        *self.selection.slot(level) = segment.to_string();
        for deeper in Level::ALL.iter().filter(|l| **l > level) {
            self.selection.slot(*deeper).clear();
        }
    }

    fn non_empty<'s>(&self, seg: &'s str) -> Option<&'s str> {
        (!seg.is_empty()).then_some(seg)
    }

    fn notify(&mut self) {
        if self.listener.is_none() {
            return;
        }
        let change = SelectionChange {
            selection: self.selection.clone(),
            code: self.selected_code(),
            path: self.selected_path().into_iter().map(String::from).collect(),
        };
        if let Some(listener) = self.listener.as_mut() {
            listener.on_change(&change);
        }
    }
}
