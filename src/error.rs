//! 区域数据处理的错误类型

use thiserror::Error;

/// 本库所有操作的错误类型
///
/// 行格式不完整（字段不足）与查无结果都不是错误：前者被静默跳过，
/// 后者返回空列表或 `None`。
#[derive(Debug, Error)]
pub enum RegionError {
    /// 读写文件失败
    #[error("I/O 错误: {0}")]
    Io(#[from] std::io::Error),

    /// 持久化数据缺少必需字段或结构不合法
    #[error("数据格式错误: {0}")]
    Format(String),

    /// 在加载任何区域数据之前就发起了查询
    #[error("尚未加载区域数据，请先解析源文本 (load_text) 或加载 JSON 数据 (load_json)")]
    NotLoaded,

    /// 导出扁平表格失败
    #[error("CSV 错误: {0}")]
    Csv(#[from] csv::Error),

    /// 全文索引失败
    #[error("索引错误: {0}")]
    Search(#[from] tantivy::TantivyError),

    /// 查询语句无法解析
    #[error("查询解析错误: {0}")]
    Query(#[from] tantivy::query::QueryParserError),
}

impl From<serde_json::Error> for RegionError {
    fn from(err: serde_json::Error) -> Self {
        if err.is_io() {
            return Self::Io(err.into());
        }
        Self::Format(err.to_string())
    }
}

pub type Result<T> = std::result::Result<T, RegionError>;
