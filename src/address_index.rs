use tantivy::collector::TopDocs;
use tantivy::query::QueryParser;
use tantivy::schema::*;
use tantivy::{doc, Index, IndexReader, ReloadPolicy, TantivyDocument};
use tantivy_jieba::JiebaTokenizer;
use tracing::{debug, info};

use crate::error::Result;
use crate::hierarchy::Hierarchy;

/// 字段权重配置
#[derive(Debug, Clone)]
pub struct FieldWeights {
    pub province: f32,
    pub city: f32,
    pub county: f32,
    pub town: f32,
}

impl Default for FieldWeights {
    fn default() -> Self {
        Self {
            province: 1.0, // 省权重最低
            city: 2.0,
            county: 4.0,
            town: 8.0, // 镇/街道权重最高
        }
    }
}

/// 名称搜索结果
#[derive(Debug, Clone, PartialEq)]
pub struct SearchHit {
    pub code: String,
    /// 从省到命中层级的名称
    pub path: Vec<String>,
    pub score: f32,
}

impl std::fmt::Display for SearchHit {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "编码: {} | {}", self.code, self.path.join(" > "))
    }
}

/// 区域名称全文索引
///
/// 每个层级的每个节点都是一篇文档，文档带上全部上级名称，
/// 所以 "通榆县 开通镇" 这类跨层级的查询也能命中。
pub struct RegionSearch {
    index: Index,
    reader: IndexReader,
    province: Field,
    city: Field,
    county: Field,
    town: Field,
    code: Field,
    weights: FieldWeights,
}

impl RegionSearch {
    /// 使用默认权重为整棵结构建立索引
    pub fn build(hierarchy: &Hierarchy) -> Result<Self> {
        Self::with_weights(hierarchy, FieldWeights::default())
    }

    pub fn with_weights(hierarchy: &Hierarchy, weights: FieldWeights) -> Result<Self> {
        info!("正在初始化区域名称索引...");

        let mut schema_builder = Schema::builder();

        // jieba 分词，保留词频与位置信息
        let text_indexing = TextFieldIndexing::default()
            .set_tokenizer("jieba")
            .set_index_option(IndexRecordOption::WithFreqsAndPositions);
        let text_options = TextOptions::default()
            .set_indexing_options(text_indexing)
            .set_stored();

        let province = schema_builder.add_text_field("province", text_options.clone());
        let city = schema_builder.add_text_field("city", text_options.clone());
        let county = schema_builder.add_text_field("county", text_options.clone());
        let town = schema_builder.add_text_field("town", text_options);
        let code = schema_builder.add_text_field("code", STRING | STORED);

        let index = Index::create_in_ram(schema_builder.build());
        index.tokenizers().register("jieba", JiebaTokenizer {});

        let mut writer = index.writer_with_num_threads(1, 50_000_000)?;
        let mut docs = 0usize;
        for p in hierarchy.provinces.values() {
            writer.add_document(doc!(province => p.name.as_str(), code => p.code.as_str()))?;
            docs += 1;
            for c in p.cities.values() {
                writer.add_document(doc!(
                    province => p.name.as_str(),
                    city => c.name.as_str(),
                    code => c.code.as_str()
                ))?;
                docs += 1;
                for co in c.counties.values() {
                    writer.add_document(doc!(
                        province => p.name.as_str(),
                        city => c.name.as_str(),
                        county => co.name.as_str(),
                        code => co.code.as_str()
                    ))?;
                    docs += 1;
                    for t in co.towns.values() {
                        writer.add_document(doc!(
                            province => p.name.as_str(),
                            city => c.name.as_str(),
                            county => co.name.as_str(),
                            town => t.name.as_str(),
                            code => t.code.as_str()
                        ))?;
                        docs += 1;
                    }
                }
            }
        }
        writer.commit()?;
        debug!(docs, "索引写入完成");

        let reader = index
            .reader_builder()
            .reload_policy(ReloadPolicy::Manual)
            .try_into()?;
        reader.reload()?;

        Ok(Self {
            index,
            reader,
            province,
            city,
            county,
            town,
            code,
            weights,
        })
    }

    /// 创建配置了字段权重的 QueryParser
    fn create_query_parser(&self) -> QueryParser {
        let mut query_parser = QueryParser::for_index(
            &self.index,
            vec![self.province, self.city, self.county, self.town],
        );
        query_parser.set_field_boost(self.province, self.weights.province);
        query_parser.set_field_boost(self.city, self.weights.city);
        query_parser.set_field_boost(self.county, self.weights.county);
        query_parser.set_field_boost(self.town, self.weights.town);
        query_parser
    }

    pub fn weights(&self) -> &FieldWeights {
        &self.weights
    }

    pub fn set_weights(&mut self, weights: FieldWeights) {
        self.weights = weights;
    }

    /// 按名称搜索，按得分从高到低返回至多 `limit` 条
    pub fn search(&self, query_str: &str, limit: usize) -> Result<Vec<SearchHit>> {
        let searcher = self.reader.searcher();
        let query = self.create_query_parser().parse_query(query_str)?;
        let top_docs = searcher.search(&query, &TopDocs::with_limit(limit.max(1)))?;

        let mut hits = Vec::with_capacity(top_docs.len());
        for (score, doc_address) in top_docs {
            let doc: TantivyDocument = searcher.doc(doc_address)?;
            hits.push(self.to_hit(&doc, score));
        }
        Ok(hits)
    }

    pub fn search_first(&self, query_str: &str) -> Result<Option<SearchHit>> {
        Ok(self.search(query_str, 1)?.into_iter().next())
    }

    fn to_hit(&self, doc: &TantivyDocument, score: f32) -> SearchHit {
        let text = |field: Field| {
            doc.get_first(field)
                .and_then(|v| v.as_str())
                .unwrap_or("")
                .to_string()
        };
        let path = [self.province, self.city, self.county, self.town]
            .into_iter()
            .map(&text)
            .take_while(|name| !name.is_empty())
            .collect();

        SearchHit {
            code: text(self.code),
            path,
            score,
        }
    }
}
