//! 四级行政区划（省、市、县/区、镇/街道）数据的解析、构建与查询
//!
//! ```
//! use text2region::{parse_all, Hierarchy};
//!
//! let text = "39997| 吉林省\t220000\t白城市\t220800\t通榆县\t220822\t八区街道\t220822002\t";
//! let hierarchy = Hierarchy::build(parse_all(text));
//! let index = hierarchy.index();
//! assert_eq!(index.resolve_name("220822"), Some("通榆县"));
//! ```

pub mod address_index;
pub mod cascader;
pub mod error;
pub mod hierarchy;
pub mod interchange;
pub mod logging;
pub mod manager;
pub mod region_index;
pub mod region_parser;

pub use address_index::{FieldWeights, RegionSearch, SearchHit};
pub use cascader::{Cascader, Selection, SelectionChange, SelectionListener};
pub use error::{RegionError, Result};
pub use hierarchy::{
    City, County, Hierarchy, HierarchyBuilder, HierarchyStats, Level, Province, RegionEntry,
    RegionRecord, Town,
};
pub use manager::RegionManager;
pub use region_index::{RegionIndex, DEFAULT_SEPARATOR};
pub use region_parser::{parse_all, parse_line};
