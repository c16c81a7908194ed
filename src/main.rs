use std::fs::File;
use std::io::{self, BufWriter, Write};
use std::path::{Path, PathBuf};

use anyhow::Context;
use clap::{Parser, Subcommand};

use text2region::{
    interchange, logging, region_parser, Hierarchy, RegionEntry, RegionManager, RegionSearch,
    DEFAULT_SEPARATOR,
};

#[derive(Debug, Parser)]
#[command(name = "text2region", version, about = "四级行政区划数据的构建与查询")]
struct Cli {
    /// 区域数据：`.json` 为已生成的结构化数据，其它扩展名按制表符分隔的源文本解析
    #[arg(long, global = true, env = "TEXT2REGION_DATA", default_value = "region_data.json")]
    data: PathBuf,

    /// 输出调试日志
    #[arg(short, long, global = true)]
    verbose: bool,

    #[command(subcommand)]
    command: Command,
}

#[derive(Debug, Subcommand)]
enum Command {
    /// 解析源文本并生成结构化 JSON 数据
    Generate {
        input: PathBuf,
        #[arg(short, long, default_value = "region_data.json")]
        output: PathBuf,
        /// 不缩进输出
        #[arg(long)]
        compact: bool,
    },
    #[command(flatten)]
    Query(QueryCommand),
}

/// 需要先加载区域数据的子命令
#[derive(Debug, Subcommand)]
enum QueryCommand {
    /// 列出所有省份
    Provinces,
    /// 列出某省的城市
    Cities { province: String },
    /// 列出某市的县/区
    Counties { province: String, city: String },
    /// 列出某县/区的镇/街道
    Towns {
        province: String,
        city: String,
        county: String,
    },
    /// 根据完整编码获取名称
    Name { code: String },
    /// 根据完整编码获取完整路径
    Path {
        code: String,
        #[arg(long, default_value = DEFAULT_SEPARATOR)]
        separator: String,
    },
    /// 按名称搜索
    Search {
        query: String,
        #[arg(short, long, default_value_t = 10)]
        limit: usize,
    },
    /// 导出为制表符分隔的扁平表格
    Flatten {
        #[arg(short, long)]
        output: Option<PathBuf>,
    },
}

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();
    logging::init(cli.verbose);

    match cli.command {
        Command::Generate {
            input,
            output,
            compact,
        } => generate(&input, &output, !compact),
        Command::Query(command) => query(&cli.data, command),
    }
}

fn query(data: &Path, command: QueryCommand) -> anyhow::Result<()> {
    let mut manager = RegionManager::new();
    manager
        .load_path(data)
        .with_context(|| format!("加载数据失败: {}", data.display()))?;
    let hierarchy = manager.hierarchy()?;
    let index = hierarchy.index();

    let mut out = io::stdout().lock();
    match command {
        QueryCommand::Provinces => print_entries(&mut out, &index.list_provinces())?,
        QueryCommand::Cities { province } => {
            print_entries(&mut out, &index.list_cities(&province))?
        }
        QueryCommand::Counties { province, city } => {
            print_entries(&mut out, &index.list_counties(&province, &city))?
        }
        QueryCommand::Towns {
            province,
            city,
            county,
        } => print_entries(&mut out, &index.list_towns(&province, &city, &county))?,
        QueryCommand::Name { code } => match index.resolve_name(&code) {
            Some(name) => writeln!(out, "{}", name)?,
            None => writeln!(out, "未找到编码 {} 对应的地区", code)?,
        },
        QueryCommand::Path { code, separator } => match index.format_path(&code, &separator) {
            Some(path) => writeln!(out, "{}", path)?,
            None => writeln!(out, "未找到编码 {} 对应的地区", code)?,
        },
        QueryCommand::Search { query, limit } => {
            let search = RegionSearch::build(hierarchy)?;
            let hits = search.search(&query, limit)?;
            writeln!(out, "找到 {} 条结果:", hits.len())?;
            for hit in &hits {
                writeln!(out, "{}", hit)?;
            }
        }
        QueryCommand::Flatten { output } => {
            let rows = match output {
                Some(path) => {
                    let file = File::create(&path)
                        .with_context(|| format!("无法创建文件: {}", path.display()))?;
                    interchange::write_flat(hierarchy, BufWriter::new(file))?
                }
                None => interchange::write_flat(hierarchy, &mut out)?,
            };
            tracing::info!(rows, "导出完成");
        }
    }

    Ok(())
}

fn generate(input: &Path, output: &Path, pretty: bool) -> anyhow::Result<()> {
    println!("开始处理文件: {}", input.display());
    let records = region_parser::load_text_file(input)
        .with_context(|| format!("读取源文件失败: {}", input.display()))?;
    println!("解析完成，共 {} 条记录", records.len());

    let hierarchy = Hierarchy::build(records);
    let stats = hierarchy.stats();
    println!("结构化数据生成完成，包含:");
    println!("- {} 个省/自治区/直辖市", stats.provinces);
    println!("- {} 个市/自治州", stats.cities);
    println!("- {} 个县/区", stats.counties);
    println!("- {} 个镇/街道", stats.towns);

    interchange::save_json_file(&hierarchy, output, pretty)
        .with_context(|| format!("保存失败: {}", output.display()))?;
    println!("已保存到: {}", output.display());
    Ok(())
}

fn print_entries<W: Write>(mut out: W, entries: &[RegionEntry]) -> io::Result<()> {
    if entries.is_empty() {
        return writeln!(out, "(无)");
    }
    for entry in entries {
        writeln!(out, "{}\t{}", entry.code, entry.name)?;
    }
    Ok(())
}
