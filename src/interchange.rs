//! 持久化格式：嵌套的 JSON 文档，以及扁平的制表符分隔导出
//!
//! JSON 文档与内存结构一一对应：顶层以省编码段为键，每个节点带 `name`、`code`，
//! 子节点分别放在 `cities`、`counties`、`towns` 中。

use std::fs::{self, File};
use std::io::{BufReader, Write};
use std::path::Path;

use serde_json::Value;
use tempfile::NamedTempFile;
use tracing::info;

use crate::error::{RegionError, Result};
use crate::hierarchy::Hierarchy;
use crate::region_parser::LINE_NUMBER_PREFIX;

pub fn to_value(hierarchy: &Hierarchy) -> Result<Value> {
    Ok(serde_json::to_value(hierarchy)?)
}

/// 从 JSON 值还原结构，缺少 `name`/`code` 或子节点容器不是对象时返回格式错误
pub fn from_value(value: Value) -> Result<Hierarchy> {
    Ok(serde_json::from_value(value)?)
}

pub fn to_json_string(hierarchy: &Hierarchy, pretty: bool) -> Result<String> {
    let json = if pretty {
        serde_json::to_string_pretty(hierarchy)?
    } else {
        serde_json::to_string(hierarchy)?
    };
    Ok(json)
}

pub fn from_json_str(json: &str) -> Result<Hierarchy> {
    Ok(serde_json::from_str(json)?)
}

/// 保存为 JSON 文件
///
/// 先在内存中完成序列化，再写入同目录的临时文件并重命名，失败时不会留下残缺的输出。
pub fn save_json_file<P: AsRef<Path>>(hierarchy: &Hierarchy, path: P, pretty: bool) -> Result<()> {
    let path = path.as_ref();
    let json = to_json_string(hierarchy, pretty)?;

    let dir = match path.parent() {
        Some(parent) if !parent.as_os_str().is_empty() => parent,
        _ => Path::new("."),
    };
    let mut tmp = NamedTempFile::new_in(dir)?;
    tmp.write_all(json.as_bytes())?;
    tmp.flush()?;
    tmp.persist(path).map_err(|e| e.error)?;

    let size = fs::metadata(path)?.len();
    info!(
        path = %path.display(),
        size_mb = %format!("{:.2}", size as f64 / 1024.0 / 1024.0),
        "文件保存成功"
    );
    Ok(())
}

pub fn load_json_file<P: AsRef<Path>>(path: P) -> Result<Hierarchy> {
    let reader = BufReader::new(File::open(path)?);
    Ok(serde_json::from_reader(reader)?)
}

/// 每个镇/街道导出一行，列顺序与源数据一致（不带行号前缀）
///
/// 导出结果重新解析后必须还原出同一棵结构，所以写出任何内容之前先检查：
/// 没有下级的省、市、县/区，或名称、编码中含有制表符、换行符的节点，都返回格式错误。
pub fn write_flat<W: Write>(hierarchy: &Hierarchy, writer: W) -> Result<usize> {
    check_flat(hierarchy)?;

    let mut wtr = csv::WriterBuilder::new()
        .delimiter(b'\t')
        .quote_style(csv::QuoteStyle::Never)
        .has_headers(false)
        .from_writer(writer);

    let mut rows = 0;
    for (province, city, county, town) in hierarchy.towns() {
        wtr.write_record([
            &province.name,
            &province.code,
            &city.name,
            &city.code,
            &county.name,
            &county.code,
            &town.name,
            &town.code,
        ])?;
        rows += 1;
    }
    wtr.flush()?;
    Ok(rows)
}

fn check_flat(hierarchy: &Hierarchy) -> Result<()> {
    for province in hierarchy.provinces.values() {
        check_field(&province.name, &province.code)?;
        check_field(&province.code, &province.code)?;
        if LINE_NUMBER_PREFIX.is_match(&province.name) {
            return Err(RegionError::Format(format!(
                "省份 {} 的名称 {:?} 会被当作行号前缀",
                province.code, province.name
            )));
        }
        if province.cities.is_empty() {
            return Err(childless("省份", &province.code));
        }
        for city in province.cities.values() {
            check_field(&city.name, &city.code)?;
            check_field(&city.code, &city.code)?;
            if city.counties.is_empty() {
                return Err(childless("城市", &city.code));
            }
            for county in city.counties.values() {
                check_field(&county.name, &county.code)?;
                check_field(&county.code, &county.code)?;
                if county.towns.is_empty() {
                    return Err(childless("县/区", &county.code));
                }
                for town in county.towns.values() {
                    check_field(&town.name, &town.code)?;
                    check_field(&town.code, &town.code)?;
                }
            }
        }
    }
    Ok(())
}

fn check_field(value: &str, code: &str) -> Result<()> {
    if value.contains(['\t', '\r', '\n']) || value.trim() != value {
        return Err(RegionError::Format(format!(
            "编码 {} 的字段 {:?} 含有制表符、换行符或首尾空白，无法导出为扁平表格",
            code, value
        )));
    }
    Ok(())
}

fn childless(level: &str, code: &str) -> RegionError {
    RegionError::Format(format!("{} {} 没有下级节点，无法导出为扁平表格", level, code))
}
