use id3tree::prelude::*;
use id3tree::CountMap;

use std::collections::HashMap;


const MARKET: &str = "\
old,yes,swr,down
old,no,swr,down
old,no,hwr,down
mid,yes,swr,down
mid,yes,hwr,down
mid,no,hwr,up
mid,no,swr,up
new,yes,swr,up
new,no,hwr,up
new,no,swr,up
";


fn market_rows() -> Vec<Vec<&'static str>> {
    vec![
        vec!["old", "yes", "swr", "down"],
        vec!["old", "no",  "swr", "down"],
        vec!["old", "no",  "hwr", "down"],
        vec!["mid", "yes", "swr", "down"],
        vec!["mid", "yes", "hwr", "down"],
        vec!["mid", "no",  "hwr", "up"],
        vec!["mid", "no",  "swr", "up"],
        vec!["new", "yes", "swr", "up"],
        vec!["new", "no",  "hwr", "up"],
        vec!["new", "no",  "swr", "up"],
    ]
}


fn market() -> DecisionTable {
    DecisionTable::new(market_rows()).unwrap()
}


fn count_map(pairs: &[(&str, f64)]) -> CountMap {
    pairs.iter()
        .map(|&(k, v)| (k.to_string(), v))
        .collect::<HashMap<_, _>>()
}


#[test]
fn read_from_file() {
    let mut path = std::env::current_dir().unwrap();
    path.push("tests/dataset/market.csv");

    let table = TableReader::new()
        .file(path)
        .read()
        .unwrap();

    assert_eq!(table, market());
}


#[test]
fn parse_equals_rows() {
    assert_eq!(parse_table(MARKET).unwrap(), market());
}


#[test]
fn decisions() {
    let table = parse_table(MARKET).unwrap();
    assert_eq!(
        table.decisions(),
        vec!["down", "down", "down", "down", "down", "up", "up", "up", "up", "up"]
    );
    assert_eq!(table.decisions_count(), 10.0);
}


#[test]
fn attributes() {
    let table = parse_table(MARKET).unwrap();
    let want = market_rows()
        .into_iter()
        .map(|row| row[..3].to_vec())
        .collect::<Vec<_>>();
    let got = table.attributes()
        .into_iter()
        .map(|row| row.to_vec())
        .collect::<Vec<_>>();
    assert_eq!(got, want);
}


#[test]
fn count_maps() {
    let table = market();
    assert_eq!(table.decisions_count_map(), count_map(&[("down", 5.0), ("up", 5.0)]));
    assert_eq!(
        table.attributes_count_map(),
        vec![
            count_map(&[("old", 3.0), ("mid", 4.0), ("new", 3.0)]),
            count_map(&[("yes", 4.0), ("no", 6.0)]),
            count_map(&[("swr", 6.0), ("hwr", 4.0)]),
        ]
    );
    assert_eq!(table.number_of_columns(), 3);
}


#[test]
fn count_sums_equal_row_count() {
    let table = market();
    let n = table.decisions_count();
    assert_eq!(table.decisions_count_map().values().sum::<f64>(), n);
    for column in table.attributes_count_map() {
        assert_eq!(column.values().sum::<f64>(), n);
    }
}


#[test]
fn row_numbers_with_attribute() {
    let table = market();
    assert_eq!(table.row_numbers_with_attribute(0, "old"), vec![0, 1, 2]);
    assert_eq!(table.row_numbers_with_attribute(0, "mid"), vec![3, 4, 5, 6]);
    assert_eq!(table.row_numbers_with_attribute(0, "new"), vec![7, 8, 9]);
    assert!(table.row_numbers_with_attribute(0, "ancient").is_empty());
}


#[test]
fn decisions_for_attribute() {
    let table = market();
    assert_eq!(
        table.decisions_count_map_for_attribute(0, "mid"),
        count_map(&[("down", 2.0), ("up", 2.0)])
    );
    assert!(table.decisions_count_map_for_attribute(0, "ancient").is_empty());
}


#[test]
fn sub_table() {
    let table = market();
    let got = table.sub_table(&[3, 4, 5, 6]).unwrap();
    let want = DecisionTable::new(vec![
        vec!["mid", "yes", "swr", "down"],
        vec!["mid", "yes", "hwr", "down"],
        vec!["mid", "no",  "hwr", "up"],
        vec!["mid", "no",  "swr", "up"],
    ]).unwrap();
    assert_eq!(got, want);
    assert_eq!(got.decisions_count_map(), count_map(&[("down", 2.0), ("up", 2.0)]));
}


#[test]
fn sub_table_edge_cases() {
    let table = market();

    let empty = table.sub_table(&[]).unwrap();
    assert!(empty.is_empty());
    assert_eq!(empty.number_of_columns(), table.number_of_columns());

    let all = (0..table.len()).collect::<Vec<_>>();
    assert_eq!(table.sub_table(&all).unwrap(), table);

    let repeated = table.sub_table(&[9, 9, 0]).unwrap();
    assert_eq!(repeated.decisions(), vec!["up", "up", "down"]);

    let err = table.sub_table(&[0, 10]).unwrap_err();
    assert!(matches!(err, Error::IndexOutOfRange { index: 10, n_rows: 10 }));
}


#[test]
fn selected_rows_share_the_value() {
    let table = market();
    for column in 0..table.number_of_columns() {
        for value in table.distinct_values(column) {
            let indices = table.row_numbers_with_attribute(column, value);
            let sub = table.sub_table(&indices).unwrap();
            assert!(sub.rows().iter().all(|row| row[column] == value));
        }
    }
}


#[test]
fn empty_table() {
    let rows: Vec<Vec<String>> = Vec::new();
    let table = DecisionTable::new(rows).unwrap();
    assert_eq!(table.number_of_columns(), 0);
    assert!(table.decisions_count_map().is_empty());
    assert!(table.attributes_count_map().is_empty());
    assert_eq!(table.decisions_count(), 0.0);
}


#[test]
fn header_names_columns() {
    let text = format!("age,competition,type,profit\n{MARKET}");
    let table = TableParser::new()
        .has_header(true)
        .parse(&text)
        .unwrap();
    assert_eq!(table.len(), 10);
    assert_eq!(table.attribute_names(), vec!["age", "competition", "type"]);
}


#[test]
fn malformed_text() {
    let err = parse_table("old,yes,down\nold,down\n").unwrap_err();
    assert!(matches!(err, Error::MalformedTable { line: 2, .. }));
}
