use id3tree::prelude::*;
use id3tree::{Node, Role};
use id3tree::research::CrossValidation;


// Market toy example: the profit goes `down` or `up`
// depending on the age of the product, the competition,
// and the type (software/hardware).
//
//                 age ?
//        old /     | mid      \ new
//          down  competition ?  up
//              yes /      \ no
//              down        up
fn market() -> DecisionTable {
    let mut path = std::env::current_dir().unwrap();
    path.push("tests/dataset/market.csv");

    TableReader::new()
        .file(path)
        .read()
        .unwrap()
        .with_attribute_names(["age", "competition", "type"])
}


#[test]
fn market_tree_shape() {
    let tree = build_tree(&market()).unwrap();

    let want = Node::attribute("age", 0, [
        ("old", Node::leaf("down")),
        ("mid", Node::attribute("competition", 1, [
            ("yes", Node::leaf("down")),
            ("no", Node::leaf("up")),
        ])),
        ("new", Node::leaf("up")),
    ]);
    assert_eq!(tree.root(), &want);
    assert_eq!(tree.leaves(), 4);
    assert_eq!(tree.depth(), 2);
    assert_eq!(tree.root().role(), Role::Attribute { column: 0 });
}


#[test]
fn gini_grows_the_same_market_tree() {
    let table = market();
    let entropy = build_tree(&table).unwrap();
    let gini = Id3Builder::new()
        .criterion(Criterion::Gini)
        .build()
        .fit(&table)
        .unwrap();
    assert_eq!(entropy, gini);
}


#[test]
fn information_gain_of_market_columns() {
    let table = market();
    let gains = (0..3)
        .map(|c| Criterion::Entropy.gain(&table, c))
        .collect::<Vec<_>>();

    assert!((gains[0] - 0.6).abs() < 1e-9);
    assert!((gains[1] - 0.124_511_2).abs() < 1e-6);
    assert!(gains[2].abs() < 1e-9);
}


#[test]
fn building_twice_is_identical() {
    let table = market();
    let a = build_tree(&table).unwrap();
    let b = build_tree(&table).unwrap();
    assert_eq!(a, b);
    assert_eq!(a.to_json().unwrap(), b.to_json().unwrap());
}


#[test]
fn training_rows_are_classified_back() {
    let table = market();
    let tree = build_tree(&table).unwrap();

    for row in table.rows() {
        let (record, decision) = row.split_at(row.len() - 1);
        assert_eq!(tree.classify(record).unwrap(), decision[0]);
    }
    assert_eq!(tree.classify_all(&table).unwrap(), table.decisions());
    assert_eq!(tree.accuracy(&table), 1.0);
}


#[test]
fn unseen_value_is_unclassifiable() {
    let tree = build_tree(&market()).unwrap();

    let err = tree.classify(&["ancient", "yes", "swr"]).unwrap_err();
    assert!(matches!(
        err,
        Error::UnclassifiableInput { ref attribute, ref value }
            if attribute == "age" && value == "ancient"
    ));

    // `type` is never tested, so any value passes.
    assert_eq!(tree.classify(&["mid", "no", "firmware"]).unwrap(), "up");

    let err = tree.classify(&["mid"]).unwrap_err();
    assert!(matches!(err, Error::ShortRecord { column: 1, len: 1 }));
}


#[test]
fn empty_table_gives_the_unknown_leaf() {
    let rows: Vec<Vec<String>> = Vec::new();
    let table = DecisionTable::new(rows).unwrap();

    let tree = build_tree(&table).unwrap();
    assert_eq!(tree.root(), &Node::leaf("unknown"));

    let tree = Id3Builder::new()
        .unknown_label("n/a")
        .build()
        .fit(&table)
        .unwrap();
    assert_eq!(tree.classify::<&str>(&[]).unwrap(), "n/a");
}


#[test]
fn colliding_rows_get_a_majority_leaf() {
    let table = parse_table("\
        a,x,yes\n\
        a,x,no\n\
        a,x,no\n\
        b,x,yes\n\
    ").unwrap();
    let tree = build_tree(&table).unwrap();

    assert_eq!(tree.classify(&["a", "x"]).unwrap(), "no");
    assert_eq!(tree.classify(&["b", "x"]).unwrap(), "yes");
}


#[test]
fn majority_tie_goes_to_first_row() {
    let table = parse_table("a,up\na,down\n").unwrap();
    let tree = build_tree(&table).unwrap();
    assert_eq!(tree.root(), &Node::leaf("up"));
}


#[test]
fn decision_only_rows() {
    let table = parse_table("yes\nyes\n").unwrap();
    assert_eq!(table.number_of_columns(), 0);

    let tree = build_tree(&table).unwrap();
    assert_eq!(tree.classify::<&str>(&[]).unwrap(), "yes");
}


#[test]
fn recursion_limit() {
    let err = Id3Builder::new()
        .max_depth(1)
        .build()
        .fit(&market())
        .unwrap_err();
    assert!(matches!(err, Error::RecursionLimit { limit: 1 }));

    assert!(Id3Builder::new().max_depth(2).build().fit(&market()).is_ok());
}


#[test]
fn json_round_trip() {
    let tree = build_tree(&market()).unwrap();
    let json = tree.to_json().unwrap();
    let restored = DecisionTree::from_json(&json).unwrap();
    assert_eq!(restored, tree);
    assert_eq!(restored.classify(&["mid", "yes", "hwr"]).unwrap(), "down");
}


#[test]
fn dot_file() {
    let tree = build_tree(&market()).unwrap();
    let mut path = std::env::temp_dir();
    path.push("id3tree_market.dot");

    tree.to_dot_file(&path).unwrap();
    let dot = std::fs::read_to_string(&path).unwrap();
    assert_eq!(dot, tree.to_dot());
    assert!(dot.contains("label = \"age ?\""));
    assert!(dot.contains("label = \"competition ?\""));
    let _ = std::fs::remove_file(path);
}


#[test]
fn cross_validation() {
    let table = market();
    let cv = CrossValidation::new(&table)
        .n_folds(5)
        .seed(777)
        .shuffle();

    for (train, test) in cv {
        let tree = build_tree(&train).unwrap();
        assert_eq!(tree.accuracy(&train), 1.0);

        let acc = tree.accuracy(&test);
        assert!((0.0..=1.0).contains(&acc));
    }
}
