//! End-to-end tests: model reply text to display tree.

use bookwright_core::{count_nodes, fixture_book, outline_to_tree, parse_book};

#[test]
fn test_fixture_tree_shape() {
    let book = fixture_book().unwrap();
    let tree = outline_to_tree(&book);

    assert_eq!(count_nodes(&tree), 1 + 3 + 7 + 19);
    let root = &tree[0];
    assert_eq!(root.id(), "The Tech Consultant's Guide: From Code to Consulting");
    assert_eq!(
        root.description(),
        "A Practical Handbook for Aspiring Tech Consultants"
    );
    assert_eq!(
        root.find("3.3.3").map(|n| n.description().as_str()),
        Some(
            "The Internet of Things for Tech Consultants - An introduction to the internet of \
             things (IoT) and its applications for tech consultants, including smart homes, \
             connected cars, and industrial automation. (40)"
        )
    );
}

#[test]
fn test_messy_reply_still_renders() {
    let reply = r#"Of course! Here's your outline:

```json
{
  "bt": "Rust for Consultants",
  "ss": null,
  "cs": [
    {"cn": "1", "ct": "Ownership", "cd": "Borrowing without tears", "cp": "twenty",
     "ss": [{"scn": 1, "sct": "Moves", "scp": 4.0, "scs": null}]},
    {"ct": "Lifetimes", "ss": []}
  ]
}
```
Let me know if you want more detail."#;

    let book = parse_book(reply).unwrap();
    let tree = outline_to_tree(&book);
    let root = &tree[0];

    assert_eq!(root.id(), "Rust for Consultants");
    assert_eq!(root.description(), "");
    assert_eq!(count_nodes(&tree), 4);
    assert_eq!(
        root.find("1").map(|n| n.description().as_str()),
        Some("Ownership - Borrowing without tears")
    );
    assert_eq!(root.find("1.1").map(|n| n.description().as_str()), Some("Moves (4)"));
    assert_eq!(root.find("2").map(|n| n.child_nodes().len()), Some(0));
}

#[test]
fn test_tree_serializes_to_display_shape() {
    let book = parse_book(r#"{"bt":"T","ss":"S","cs":[{"ct":"C","ss":[{"sct":"D","scs":[{"st":"E"}]}]}]}"#)
        .unwrap();
    let json = serde_json::to_value(outline_to_tree(&book)).unwrap();

    assert_eq!(
        json,
        serde_json::json!([{
            "id": "T",
            "description": "S",
            "children": [{
                "id": "1",
                "description": "C",
                "children": [{
                    "id": "1.1",
                    "description": "D",
                    "children": [{"id": "1.1.1", "description": "E"}]
                }]
            }]
        }])
    );
}
