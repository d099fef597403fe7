use super::*;

#[test]
fn test_empty_source_is_eof() {
    let cursor = Cursor::new("");
    assert!(cursor.is_eof());
    assert_eq!(cursor.current(), 0);
    assert_eq!(cursor.rest(), "");
}

#[test]
fn test_advance_is_clamped() {
    let mut cursor = Cursor::new("abc");
    cursor.advance_n(2);
    assert_eq!(cursor.current(), b'c');
    cursor.advance_n(10);
    assert!(cursor.is_eof());
    assert_eq!(cursor.pos(), 3);
}

#[test]
fn test_find_is_relative_to_position() {
    let finder = Finder::new("{{");
    let mut cursor = Cursor::new("a{{b}}c{{d}}");
    assert_eq!(cursor.find(&finder), Some(1));
    cursor.advance_n(3);
    assert_eq!(cursor.find(&finder), Some(4));
    cursor.advance_n(5);
    assert_eq!(cursor.find(&finder), None);
}

#[test]
fn test_copy_snapshot() {
    let mut cursor = Cursor::new("hello");
    let snapshot = cursor;
    cursor.advance_n(3);
    assert_eq!(snapshot.pos(), 0);
    assert_eq!(cursor.rest(), "lo");
    assert_eq!(cursor.slice(snapshot.pos(), cursor.pos()), "hel");
}
