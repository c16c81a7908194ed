use std::fs;
use std::path::Path;
use std::sync::LazyLock;

use regex::Regex;
use tracing::{debug, info};

use crate::error::Result;
use crate::hierarchy::{RegionEntry, RegionRecord};

/// 每行至少需要的字段数：省、市、县/区、镇/街道各一对名称与编码
pub const FIELD_COUNT: usize = 8;

// 形如 "39997| " 的行号前缀，只认 ASCII 数字
pub(crate) static LINE_NUMBER_PREFIX: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^[0-9]+\|\s*").expect("valid line-number regex"));

/// 解析一行源数据
///
/// 先去掉可选的行号前缀，再按制表符切分。字段不足 8 个的行返回 `None`，
/// 多余的字段（包括行尾制表符产生的空字段）被忽略。
pub fn parse_line(line: &str) -> Option<RegionRecord> {
    let clean = LINE_NUMBER_PREFIX.replace(line, "");
    let mut fields = clean.split('\t');

    let mut next_entry = || -> Option<RegionEntry> {
        let name = fields.next()?;
        let code = fields.next()?;
        Some(RegionEntry::new(name, code))
    };

    Some(RegionRecord {
        province: next_entry()?,
        city: next_entry()?,
        county: next_entry()?,
        town: next_entry()?,
    })
}

/// 解析整段文本，按输入顺序返回成功解析的记录
pub fn parse_all(text: &str) -> Vec<RegionRecord> {
    let mut total = 0usize;
    let records: Vec<RegionRecord> = text
        .trim()
        .split('\n')
        .inspect(|_| total += 1)
        .filter_map(parse_line)
        .collect();

    let skipped = total - records.len();
    if skipped > 0 {
        debug!(skipped, "跳过字段不足的行");
    }
    info!(records = records.len(), "解析完成");
    records
}

/// 读取 UTF-8 源文件并解析
pub fn load_text_file<P: AsRef<Path>>(path: P) -> Result<Vec<RegionRecord>> {
    let path = path.as_ref();
    let content = fs::read_to_string(path)?;
    info!(
        path = %path.display(),
        size_mb = %format!("{:.2}", content.len() as f64 / 1024.0 / 1024.0),
        "文件读取成功"
    );
    Ok(parse_all(&content))
}
