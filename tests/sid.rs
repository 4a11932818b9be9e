use rtwtrace::sid::Sid;

#[test]
fn parse_nested_sid() {
    let sid = Sid::parse("untitled:14:215").unwrap();
    assert_eq!(sid.model, "untitled");
    assert_eq!(sid.path, vec![14, 215]);
    assert!(!sid.is_root());
    assert_eq!(sid.to_string(), "untitled:14:215");

    let parent = sid.parent().unwrap();
    assert_eq!(parent.to_string(), "untitled:14");
    let root = parent.parent().unwrap();
    assert!(root.is_root());
    assert_eq!(root.to_string(), "untitled");
    assert_eq!(root.parent(), None);
}

#[test]
fn reject_malformed_sids() {
    assert_eq!(Sid::parse(""), None);
    assert_eq!(Sid::parse(":3"), None);
    assert_eq!(Sid::parse("untitled:x"), None);
    assert_eq!(Sid::parse("untitled::3"), None);
}

#[test]
fn model_prefix() {
    assert_eq!(Sid::model_of("untitled:19"), "untitled");
    assert_eq!(Sid::model_of("untitled"), "untitled");
}
