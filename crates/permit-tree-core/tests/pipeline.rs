use permit_tree_core::{
    read_json, run, write_json, Amount, ColumnNames, PermitError, RunConfig, ZipCode,
};
use std::collections::HashMap;
use std::fs;

const PERMITS: &str = "\
Zip Code,Permit Type Description,Construction Cost
94110,Alteration,300
90210,New,1000
90210,New,500
90210,Alter,200
94110,Alteration,0.5
10001,Sign,
";

fn config_in(dir: &tempfile::TempDir) -> RunConfig {
    let input = dir.path().join("permits.csv");
    fs::write(&input, PERMITS).unwrap();
    RunConfig {
        input,
        output: dir.path().join("output.json"),
        columns: ColumnNames::default(),
    }
}

#[test]
fn run_writes_the_same_text_it_returns() {
    let dir = tempfile::tempdir().unwrap();
    let config = config_in(&dir);

    let text = run(&config).unwrap();

    assert_eq!(fs::read_to_string(&config.output).unwrap(), text);
    assert!(text.starts_with("{\n    \"city\": {"));
}

#[test]
fn output_round_trips_to_input_totals() {
    let dir = tempfile::tempdir().unwrap();
    let config = config_in(&dir);
    run(&config).unwrap();

    let tree = read_json(&config.output).unwrap();

    let mut expected: HashMap<ZipCode, f64> = HashMap::new();
    for line in PERMITS.lines().skip(1) {
        let fields: Vec<&str> = line.split(',').collect();
        let cost = fields[2].parse::<f64>().unwrap_or(0.0);
        *expected.entry(ZipCode::parse(fields[0]).unwrap()).or_default() += cost;
    }

    assert_eq!(tree.zip_codes().len(), expected.len());
    for node in tree.zip_codes() {
        let total = node.total().as_f64();
        assert!((total - expected[&node.zip_code]).abs() < 1e-9, "{}", node.zip_code);
    }

    let sf = tree.find_zip(&ZipCode::Number(94110)).unwrap();
    assert_eq!(sf.children.len(), 1);
    assert_eq!(sf.children[0].value, Amount::Float(300.5));

    let ny = tree.find_zip(&ZipCode::Number(10001)).unwrap();
    assert_eq!(ny.children[0].value, Amount::Int(0));
}

#[test]
fn unwritable_output_is_an_io_error() {
    let dir = tempfile::tempdir().unwrap();
    let mut config = config_in(&dir);
    config.output = dir.path().join("missing-dir").join("output.json");

    let err = run(&config).unwrap_err();
    match err {
        PermitError::Io(e) => assert!(e.to_string().contains("missing-dir"), "{e}"),
        other => panic!("unexpected error: {other}"),
    }
}

#[test]
fn write_json_replaces_previous_output() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("output.json");
    fs::write(&path, "stale and much longer than the new contents").unwrap();

    write_json(&path, "{}").unwrap();

    assert_eq!(fs::read_to_string(&path).unwrap(), "{}");
}

#[test]
fn missing_input_leaves_no_output() {
    let dir = tempfile::tempdir().unwrap();
    let config = RunConfig {
        input: dir.path().join("absent.csv"),
        output: dir.path().join("output.json"),
        columns: ColumnNames::default(),
    };

    assert!(matches!(run(&config), Err(PermitError::NotFound(_))));
    assert!(!config.output.exists());
}

#[test]
fn na_costs_never_reach_the_output_as_null() {
    let dir = tempfile::tempdir().unwrap();
    let input = dir.path().join("permits.csv");
    fs::write(
        &input,
        "Zip Code,Permit Type Description,Construction Cost\n\
         90210,New,100\n\
         90210,New,NaN\n\
         90210,Alter,N/A\n",
    )
    .unwrap();
    let config = RunConfig {
        input,
        output: dir.path().join("output.json"),
        columns: ColumnNames::default(),
    };

    let text = run(&config).unwrap();
    assert!(!text.contains("null"), "{text}");

    let tree = read_json(&config.output).unwrap();
    let zip = tree.find_zip(&ZipCode::Number(90210)).unwrap();
    assert_eq!(zip.find_building_type("New").unwrap().value, Amount::Int(100));
    assert_eq!(zip.find_building_type("Alter").unwrap().value, Amount::Int(0));
}

#[test]
fn infinite_cost_fails_the_run_without_output() {
    let dir = tempfile::tempdir().unwrap();
    let input = dir.path().join("permits.csv");
    fs::write(
        &input,
        "Zip Code,Permit Type Description,Construction Cost\n90210,New,1e400\n",
    )
    .unwrap();
    let config = RunConfig {
        input,
        output: dir.path().join("output.json"),
        columns: ColumnNames::default(),
    };

    assert!(matches!(run(&config), Err(PermitError::InvalidData(_))));
    assert!(!config.output.exists());
}
