mod helpers;

use helpers::{sample_hierarchy, SAMPLE};
use text2region::{parse_all, parse_line, Hierarchy, HierarchyBuilder, HierarchyStats};

#[test]
fn test_build_sample_stats() {
    let hierarchy = sample_hierarchy();
    assert_eq!(
        hierarchy.stats(),
        HierarchyStats {
            provinces: 11,
            cities: 18,
            counties: 20,
            towns: 24,
        }
    );
}

#[test]
fn test_build_keeps_first_seen_order() {
    let hierarchy = sample_hierarchy();
    let keys: Vec<&str> = hierarchy.provinces.keys().map(String::as_str).collect();
    assert_eq!(
        keys,
        ["52", "45", "41", "21", "43", "22", "32", "31", "51", "12", "11"]
    );

    let guangxi = &hierarchy.provinces["45"];
    let towns: Vec<&str> = guangxi.cities["06"].counties["03"]
        .towns
        .keys()
        .map(String::as_str)
        .collect();
    assert_eq!(towns, ["002", "001", "003"]);
}

#[test]
fn test_build_keys_by_own_code_segments() {
    let hierarchy = sample_hierarchy();
    let county = &hierarchy.provinces["22"].cities["08"].counties["22"];
    assert_eq!(county.name, "通榆县");
    assert_eq!(county.code, "220822");
    assert_eq!(county.towns["002"].name, "八区街道");
    assert_eq!(county.towns["002"].code, "220822002");
}

#[test]
fn test_build_is_idempotent() {
    let first = Hierarchy::build(parse_all(SAMPLE));
    let second = Hierarchy::build(parse_all(SAMPLE));
    assert_eq!(first, second);
}

#[test]
fn test_duplicate_town_last_wins() {
    let text = "1| 吉林省\t220000\t白城市\t220800\t通榆县\t220822\t八区街道\t220822002\t\n\
                2| 吉林省\t220000\t白城市\t220800\t通榆县\t220822\t开通镇\t220822100\t\n\
                3| 吉林省\t220000\t白城市\t220800\t通榆县\t220822\t新八区街道\t220822002\t";
    let hierarchy = Hierarchy::build(parse_all(text));
    let towns = &hierarchy.provinces["22"].cities["08"].counties["22"].towns;

    assert_eq!(towns.len(), 2);
    assert_eq!(towns["002"].name, "新八区街道");
    // 覆盖不改变位置
    assert_eq!(towns.get_index(0).map(|(k, _)| k.as_str()), Some("002"));
}

#[test]
fn test_ancestors_keep_first_name() {
    let text = "吉林省\t220000\t白城市\t220800\t通榆县\t220822\t八区街道\t220822002\n\
                吉林\t220000\t白城\t220800\t通榆\t220822\t开通镇\t220822100";
    let hierarchy = Hierarchy::build(parse_all(text));
    let province = &hierarchy.provinces["22"];
    assert_eq!(province.name, "吉林省");
    assert_eq!(province.cities["08"].name, "白城市");
    assert_eq!(province.cities["08"].counties["22"].name, "通榆县");
}

#[test]
fn test_degenerate_codes_become_keys() {
    let record = parse_line("短\t1\t短市\t1\t短县\t1\t短镇\t1").unwrap();
    let mut builder = HierarchyBuilder::new();
    builder.push(record);
    let hierarchy = builder.finish();

    let province = &hierarchy.provinces["1"];
    let county = &province.cities[""].counties[""];
    assert_eq!(county.towns[""].name, "短镇");
}

#[test]
fn test_empty_input_builds_empty_hierarchy() {
    let hierarchy = Hierarchy::build(parse_all(""));
    assert!(hierarchy.is_empty());
    assert_eq!(hierarchy.stats(), HierarchyStats::default());
}

#[test]
fn test_towns_iterates_in_order() {
    let hierarchy = sample_hierarchy();
    let first = hierarchy.towns().next().map(|(p, c, co, t)| {
        (p.name.as_str(), c.name.as_str(), co.name.as_str(), t.name.as_str())
    });
    assert_eq!(first, Some(("贵州省", "毕节市", "七星关区", "德溪街道")));
    assert_eq!(hierarchy.towns().count(), 24);
}
