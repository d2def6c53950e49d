//! Import-direction behavior: per-field fallback, container atomicity,
//! optional and enum semantics, strict scalar parsing.

use confmap::{BeanMapper, Mapped, MappingError, Node, Path, from_node, record, tree};
use confmap::{DecodeResult, decode_node, mapped_enum};
use indexmap::IndexMap;

record! {
    pub struct Basics {
        pub count: i64 = 1,
        pub label: String = String::from("x"),
    }
}

mapped_enum! {
    pub enum GameMode {
        Creative,
        Survival,
    }
}

record! {
    pub struct WithEnum {
        pub mode: GameMode = GameMode::Survival,
    }
}

record! {
    pub struct WithOptional {
        pub limit: Option<i64> = Some(10),
    }
}

record! {
    pub struct Empty {}
}

record! {
    pub struct Nested {
        pub basics: Basics = Basics::default(),
        pub enabled: bool = true,
    }
}

#[test]
fn record_fields_fall_back_independently() {
    confmap_testhelpers::setup();
    // `count` absent, `label` present but shaped wrong: both keep defaults.
    let node = tree!({ "label": 42 });

    let basics: Basics = from_node(&node).unwrap().unwrap();

    assert_eq!(basics.count, 1);
    assert_eq!(basics.label, "x");
}

#[test]
fn record_keeps_good_fields_next_to_bad_ones() {
    confmap_testhelpers::setup();
    let node = tree!({ "count": 7, "label": [1, 2] });

    let basics: Basics = from_node(&node).unwrap().unwrap();

    assert_eq!(basics.count, 7);
    assert_eq!(basics.label, "x");
}

#[test]
fn record_field_keys_match_case_insensitively() {
    confmap_testhelpers::setup();
    let node = tree!({ "COUNT": 3, "Label": "hi" });

    let basics: Basics = from_node(&node).unwrap().unwrap();

    assert_eq!(basics.count, 3);
    assert_eq!(basics.label, "hi");
}

#[test]
fn one_bad_element_rejects_the_whole_sequence() {
    confmap_testhelpers::setup();
    let node = tree!([1, "bad", 3]);

    let decoded: Option<Vec<i64>> = from_node(&node).unwrap();

    // Never a truncated [1, 3].
    assert_eq!(decoded, None);
}

#[test]
fn well_formed_sequence_preserves_order() {
    confmap_testhelpers::setup();
    let node = tree!([3, 1, 2]);

    let decoded: Option<Vec<i64>> = from_node(&node).unwrap();

    assert_eq!(decoded, Some(vec![3, 1, 2]));
}

#[test]
fn one_bad_entry_rejects_the_whole_map() {
    confmap_testhelpers::setup();
    let node = tree!({ "a": 1, "b": "bad", "c": 3 });

    let decoded: Option<IndexMap<String, i64>> = from_node(&node).unwrap();

    assert_eq!(decoded, None);
}

#[test]
fn map_keys_are_taken_verbatim() {
    confmap_testhelpers::setup();
    let node = tree!({ "MiXeD": 1, "other.key?": 2 });

    let decoded: IndexMap<String, i64> = from_node(&node).unwrap().unwrap();

    assert_eq!(decoded.get("MiXeD"), Some(&1));
    assert_eq!(decoded.get("other.key?"), Some(&2));
}

#[test]
fn absent_optional_decodes_to_empty_not_failure() {
    confmap_testhelpers::setup();
    let descriptor = <Option<i64>>::descriptor();

    let result = decode_node(None, &descriptor).unwrap();

    assert!(result.is_decoded());
}

#[test]
fn null_optional_decodes_to_empty() {
    confmap_testhelpers::setup();
    let node = tree!({ "limit": null });

    let value: WithOptional = from_node(&node).unwrap().unwrap();

    // Null is an explicit empty optional, not "keep the Some(10) default".
    assert_eq!(value.limit, None);
}

#[test]
fn present_optional_wraps_the_inner_value() {
    confmap_testhelpers::setup();
    let node = tree!({ "limit": 25 });

    let value: WithOptional = from_node(&node).unwrap().unwrap();

    assert_eq!(value.limit, Some(25));
}

#[test]
fn mismatched_optional_inner_value_keeps_the_default() {
    confmap_testhelpers::setup();
    let node = tree!({ "limit": "lots" });

    let value: WithOptional = from_node(&node).unwrap().unwrap();

    assert_eq!(value.limit, Some(10));
}

#[test]
fn enum_names_match_case_insensitively() {
    confmap_testhelpers::setup();
    let node = tree!({ "mode": "creative" });

    let value: WithEnum = from_node(&node).unwrap().unwrap();

    assert_eq!(value.mode, GameMode::Creative);
}

#[test]
fn unknown_enum_name_keeps_the_default() {
    confmap_testhelpers::setup();
    let node = tree!({ "mode": "bogus" });

    let value: WithEnum = from_node(&node).unwrap().unwrap();

    assert_eq!(value.mode, GameMode::Survival);
}

#[test]
fn integers_parse_from_text_but_never_truncate_floats() {
    confmap_testhelpers::setup();
    assert_eq!(from_node::<i64>(&tree!("42")).unwrap(), Some(42));
    assert_eq!(from_node::<i64>(&tree!(3.7)).unwrap(), None);
    assert_eq!(from_node::<i64>(&tree!(true)).unwrap(), None);
    // Out of range for the narrow target.
    assert_eq!(from_node::<u8>(&tree!(300)).unwrap(), None);
    assert_eq!(from_node::<f64>(&tree!(3)).unwrap(), Some(3.0));
    assert_eq!(from_node::<String>(&tree!(42)).unwrap(), None);
}

#[test]
fn nested_records_decode_recursively() {
    confmap_testhelpers::setup();
    let node = tree!({
        "basics": { "count": 9 },
        "enabled": false,
    });

    let nested: Nested = from_node(&node).unwrap().unwrap();

    assert_eq!(nested.basics.count, 9);
    assert_eq!(nested.basics.label, "x");
    assert!(!nested.enabled);
}

#[test]
fn record_from_non_mapping_degrades_to_caller_default() {
    confmap_testhelpers::setup();
    let node = tree!([1, 2, 3]);

    let decoded: Option<Basics> = from_node(&node).unwrap();

    assert_eq!(decoded, None);
}

#[test]
fn field_less_record_is_a_structural_error() {
    confmap_testhelpers::setup();
    let node = tree!({ "anything": 1 });

    let result = from_node::<Empty>(&node);

    assert!(matches!(
        result,
        Err(MappingError::NoWritableFields { .. })
    ));
}

#[test]
fn mapper_uses_whole_tree_for_the_root_path() {
    confmap_testhelpers::setup();
    let root = tree!({ "count": 4, "label": "root" });

    let basics: Basics = BeanMapper::new()
        .map(&root, &Path::root())
        .unwrap()
        .unwrap();

    assert_eq!(basics.count, 4);
    assert_eq!(basics.label, "root");
}

#[test]
fn mapper_reports_absent_subtree_as_none() {
    confmap_testhelpers::setup();
    let root = tree!({ "somewhere": { "count": 4 } });
    let path: Path = "elsewhere".parse().unwrap();

    let decoded: Option<Basics> = BeanMapper::new().map(&root, &path).unwrap();

    assert_eq!(decoded, None);
}

#[test]
fn decode_result_of_missing_scalar_is_use_default() {
    confmap_testhelpers::setup();
    let descriptor = i64::descriptor();

    let absent = decode_node(None, &descriptor).unwrap();
    let null = decode_node(Some(&Node::Null), &descriptor).unwrap();

    assert!(matches!(absent, DecodeResult::UseDefault));
    assert!(matches!(null, DecodeResult::UseDefault));
}
