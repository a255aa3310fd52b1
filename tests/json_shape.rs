#![cfg(feature = "serde")]

use std::fs;
use std::path::PathBuf;

use serde_json::{from_value, json, to_value};

use infomap_reader::{parse, parse_tree, CluNode, Link, NodeFile, OutputFile, TreeFile, TreeNode};

fn fixture_path(name: &str) -> PathBuf {
    let mut p = PathBuf::from(env!("CARGO_MANIFEST_DIR"));
    p.push("tests");
    p.push("fixtures");
    p.push(name);
    p
}

fn read_fixture(name: &str) -> String {
    let path = fixture_path(name);
    fs::read_to_string(&path)
        .unwrap_or_else(|e| panic!("failed to read {}: {}", path.display(), e))
}

#[test]
fn tree_file_serializes_with_flattened_camel_case_header() {
    let file = parse_tree(&read_fixture("network.ftree"), false).expect("parse ftree fixture");
    let v = to_value(&file).expect("serialize");

    // Header fields sit at the top level, in camelCase.
    assert!(v.get("header").is_none());
    assert_eq!(v["version"], json!("v2.4.0"));
    assert_eq!(v["args"], json!("./Infomap network.net output/ --ftree"));
    assert_eq!(v["numLevels"], json!(2));
    assert_eq!(v["numTopModules"], json!(2));
    assert_eq!(v["codelength"].as_f64(), Some(2.32073));
    let savings = v["relativeCodelengthSavings"].as_f64().expect("savings");
    assert!((savings - 0.102384).abs() < 1e-12);
    assert!(v.get("bipartiteStartId").is_none());

    assert_eq!(v["directed"], json!(true));
    let modules = v["modules"].as_array().expect("modules array");
    assert_eq!(modules.len(), 3);
    assert_eq!(modules[0]["path"], json!([0]));
    assert_eq!(modules[0]["numEdges"], json!(2));
    assert_eq!(modules[0]["numChildren"], json!(2));
    assert_eq!(modules[0]["enterFlow"].as_f64(), Some(0.0));
    assert!(modules[0].get("links").is_none());

    let node = &v["nodes"][0];
    assert_eq!(node["path"], json!([1, 1]));
    assert_eq!(node["name"], json!("c"));
    assert_eq!(node["id"], json!(3));
}

#[test]
fn plain_tree_omits_absent_options() {
    let file = parse_tree(&read_fixture("twotriangles.tree"), false).expect("parse tree fixture");
    let v = to_value(&file).expect("serialize");

    assert!(v.get("directed").is_none());
    assert!(v.get("modules").is_none());
    assert!(v.get("bipartiteStartId").is_none());
    assert_eq!(v["startedAt"], json!("2022-03-15 10:21:52"));

    let node = &v["nodes"][0];
    assert!(node.get("stateId").is_none());
    assert!(node.get("layerId").is_none());
}

#[test]
fn clu_node_shape() {
    let node = CluNode {
        id: 1,
        state_id: None,
        module_id: 2,
        flow: Some(0.5),
        layer_id: None,
    };
    assert_eq!(
        to_value(node).expect("serialize"),
        json!({ "id": 1, "moduleId": 2, "flow": 0.5 })
    );
}

#[test]
fn link_serializes_with_plain_keys() {
    let link = Link { source: 1, target: 2, flow: 0.5 };
    assert_eq!(
        to_value(link).expect("serialize"),
        json!({ "source": 1, "target": 2, "flow": 0.5 })
    );
}

#[test]
fn output_file_serializes_transparently() {
    let input = read_fixture("twotriangles.clu");
    let output = parse(&input).expect("auto parse");
    let inner = match &output {
        OutputFile::Clu(file) => to_value(file).expect("serialize inner"),
        OutputFile::Tree(_) => panic!("clu input dispatched to the tree decoder"),
    };

    // The untagged enum adds no wrapper object.
    assert_eq!(to_value(&output).expect("serialize"), inner);
}

#[test]
fn tree_file_value_round_trips() {
    let file = parse_tree(&read_fixture("states.tree"), false).expect("parse states fixture");
    let v = to_value(&file).expect("serialize");
    let back: TreeFile = from_value(v).expect("deserialize");
    assert_eq!(back, file);
}

#[test]
fn node_file_deserializes_by_shape() {
    let tree = from_value::<NodeFile>(json!([
        { "path": [1, 1], "flow": 0.5, "name": "a", "id": 1 }
    ]))
    .expect("deserialize tree nodes");
    assert_eq!(
        tree,
        NodeFile::Tree(vec![TreeNode {
            path: vec![1, 1],
            flow: Some(0.5),
            name: "a".to_string(),
            state_id: None,
            id: 1,
            layer_id: None,
        }])
    );

    let clu = from_value::<NodeFile>(json!([{ "id": 1, "moduleId": 2 }]))
        .expect("deserialize clu nodes");
    assert_eq!(
        clu,
        NodeFile::Clu(vec![CluNode {
            id: 1,
            state_id: None,
            module_id: 2,
            flow: None,
            layer_id: None,
        }])
    );
}
