use permit_tree_core::{
    aggregate, build_tree, to_json_pretty, Amount, PermitRecord, PermitTree, ZipCode,
};
use serde_json::{json, Value};

fn scenario() -> Vec<PermitRecord> {
    vec![
        PermitRecord::new(90210_i64, "New", Amount::Int(1000)),
        PermitRecord::new(90210_i64, "New", Amount::Int(500)),
        PermitRecord::new(90210_i64, "Alter", Amount::Int(200)),
    ]
}

#[test]
fn empty_table_serializes_to_bare_root() {
    let tree = build_tree(Vec::new());
    let text = to_json_pretty(&tree).unwrap();

    assert_eq!(
        text,
        "{\n    \"city\": {\n        \"parent\": \"city\",\n        \"children\": []\n    }\n}"
    );
}

#[test]
fn scenario_groups_leaves_under_one_zip() {
    let tree = build_tree(aggregate(&scenario()));
    let value: Value = serde_json::from_str(&to_json_pretty(&tree).unwrap()).unwrap();

    assert_eq!(
        value,
        json!({
            "city": {
                "parent": "city",
                "children": [
                    {
                        "zip_code": 90210,
                        "parent": 90210,
                        "children": [
                            { "building_type": "Alter", "value": 200 },
                            { "building_type": "New", "value": 1500 }
                        ]
                    }
                ]
            }
        })
    );
}

#[test]
fn key_order_follows_the_schema() {
    let text = to_json_pretty(&build_tree(aggregate(&scenario()))).unwrap();

    let pos = |needle: &str| text.find(needle).unwrap();
    assert!(pos("\"city\"") < pos("\"parent\": \"city\""));
    assert!(pos("\"parent\": \"city\"") < pos("\"zip_code\""));
    assert!(pos("\"zip_code\": 90210") < pos("\"parent\": 90210"));
    assert!(pos("\"building_type\": \"Alter\"") < pos("\"value\": 200"));
    assert!(text.contains("\n                \"zip_code\": 90210,"));
}

#[test]
fn each_zip_code_appears_once() {
    let records = vec![
        PermitRecord::new(2_i64, "a", Amount::Int(1)),
        PermitRecord::new(1_i64, "b", Amount::Int(1)),
        PermitRecord::new(2_i64, "c", Amount::Int(1)),
        PermitRecord::new(1_i64, "a", Amount::Int(1)),
        PermitRecord::new(3_i64, "a", Amount::Int(1)),
    ];

    let tree = build_tree(aggregate(&records));
    let zips: Vec<&ZipCode> = tree.zip_codes().iter().map(|z| &z.zip_code).collect();

    assert_eq!(
        zips,
        vec![&ZipCode::Number(1), &ZipCode::Number(2), &ZipCode::Number(3)]
    );
    assert_eq!(tree.stats().building_types, 5);
}

#[test]
fn text_zip_codes_stay_strings() {
    let records = vec![PermitRecord::new("02134", "New", Amount::Int(1))];
    let value = serde_json::to_value(build_tree(aggregate(&records))).unwrap();

    assert_eq!(value["city"]["children"][0]["zip_code"], json!("02134"));
    assert_eq!(value["city"]["children"][0]["parent"], json!("02134"));
}

#[test]
fn stats_and_lookups() {
    let mut records = scenario();
    records.push(PermitRecord::new(10001_i64, "Sign", Amount::Float(12.5)));
    let tree = build_tree(aggregate(&records));

    let stats = tree.stats();
    assert_eq!(stats.zip_codes, 2);
    assert_eq!(stats.building_types, 3);
    assert!((stats.total_cost - 1712.5).abs() < 1e-9);

    let zip = tree.find_zip(&ZipCode::Number(90210)).unwrap();
    assert_eq!(zip.total(), Amount::Int(1700));
    assert_eq!(zip.find_building_type("New").unwrap().value, Amount::Int(1500));
    assert!(zip.find_building_type("Sign").is_none());
    assert!(tree.find_zip(&ZipCode::Number(99999)).is_none());
}

#[test]
fn default_tree_is_empty_city() {
    let tree = PermitTree::default();
    assert_eq!(tree.city.parent, "city");
    assert!(tree.zip_codes().is_empty());
    assert_eq!(tree, build_tree(Vec::new()));
}
