use std::path::Path;
use std::sync::Arc;

use tracing::info;

use crate::error::{RegionError, Result};
use crate::hierarchy::{Hierarchy, HierarchyStats};
use crate::interchange;
use crate::region_index::RegionIndex;
use crate::region_parser;

/// 区域管理器：持有当前加载的区域数据
///
/// 每次加载都会生成一棵新的结构，成功后才替换旧数据；已经拿到 `Arc` 的读者
/// 继续看到旧数据，永远不会看到构建到一半的结构。
#[derive(Debug, Default, Clone)]
pub struct RegionManager {
    hierarchy: Option<Arc<Hierarchy>>,
}

impl RegionManager {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn from_hierarchy(hierarchy: Hierarchy) -> Self {
        Self {
            hierarchy: Some(Arc::new(hierarchy)),
        }
    }

    pub fn is_loaded(&self) -> bool {
        self.hierarchy.is_some()
    }

    /// 解析源文本并构建，返回成功解析的记录数
    pub fn load_text(&mut self, text: &str) -> usize {
        let records = region_parser::parse_all(text);
        let count = records.len();
        self.replace(Hierarchy::build(records));
        count
    }

    pub fn load_text_file<P: AsRef<Path>>(&mut self, path: P) -> Result<usize> {
        let records = region_parser::load_text_file(path)?;
        let count = records.len();
        self.replace(Hierarchy::build(records));
        Ok(count)
    }

    pub fn load_json_str(&mut self, json: &str) -> Result<()> {
        let hierarchy = interchange::from_json_str(json)?;
        self.replace(hierarchy);
        Ok(())
    }

    pub fn load_json_file<P: AsRef<Path>>(&mut self, path: P) -> Result<()> {
        let hierarchy = interchange::load_json_file(path)?;
        self.replace(hierarchy);
        Ok(())
    }

    /// 按扩展名加载：`.json` 视为持久化数据，其它视为制表符分隔的源文本
    pub fn load_path<P: AsRef<Path>>(&mut self, path: P) -> Result<()> {
        let path = path.as_ref();
        let is_json = path
            .extension()
            .is_some_and(|ext| ext.eq_ignore_ascii_case("json"));
        if is_json {
            self.load_json_file(path)
        } else {
            self.load_text_file(path).map(|_| ())
        }
    }

    pub fn hierarchy(&self) -> Result<&Arc<Hierarchy>> {
        self.hierarchy.as_ref().ok_or(RegionError::NotLoaded)
    }

    pub fn index(&self) -> Result<RegionIndex<'_>> {
        self.hierarchy().map(|h| RegionIndex::new(h))
    }

    pub fn stats(&self) -> Result<HierarchyStats> {
        self.hierarchy().map(|h| h.stats())
    }

    pub fn save_json_file<P: AsRef<Path>>(&self, path: P, pretty: bool) -> Result<()> {
        interchange::save_json_file(self.hierarchy()?, path, pretty)
    }

    fn replace(&mut self, hierarchy: Hierarchy) {
        let stats = hierarchy.stats();
        info!(
            provinces = stats.provinces,
            towns = stats.towns,
            "区域数据已加载"
        );
        self.hierarchy = Some(Arc::new(hierarchy));
    }
}
