#![allow(clippy::unwrap_used, clippy::expect_used)]

use super::*;
use pretty_assertions::assert_eq;

#[test]
fn test_display() {
    assert_eq!(Path::from_segments(["a", "b", "c"]).to_string(), "a.b.c");
    assert_eq!(Path::implicit().to_string(), ".");
    assert_eq!(Path::from_segments(["items"]).at(2).to_string(), "items[2]");
}

#[test]
fn test_implicit() {
    let path = Path::implicit();
    assert!(path.is_implicit());
    assert!(path.to_ref().is_empty());
}

#[test]
fn test_segments_equality() {
    let a = Path::from_segments(["user", "name"]);
    let b = Path::from_segments(vec![String::from("user"), String::from("name")]);
    assert_eq!(a, b);
    assert_ne!(a, Path::from_segments(["user"]));
}

#[test]
fn test_split_first_keeps_index() {
    let path = Path::from_segments(["a", "b", "c"]);
    let lookup = path.at(4);

    let (head, rest) = lookup.split_first().expect("non-empty path");
    assert_eq!(head, "a");
    assert_eq!(rest.segments().collect::<Vec<_>>(), vec!["b", "c"]);
    assert_eq!(rest.index(), Some(4));

    let (_, rest) = rest.split_first().expect("two segments left");
    let (last, rest) = rest.split_first().expect("one segment left");
    assert_eq!(last, "c");
    assert!(rest.is_empty());
    assert!(rest.split_first().is_none());
}
