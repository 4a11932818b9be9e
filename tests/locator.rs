use rtwtrace::locator::LocatorError;
use rtwtrace::model::{SourceLocation, TraceEntry};

#[test]
fn not_traceable_entry() {
    let entry: TraceEntry = "msg=rtwMsg_notTraceable&block=untitled:14:215".parse().unwrap();
    assert_eq!(
        entry,
        TraceEntry::NotTraceable {
            block: Some("untitled:14:215".into())
        }
    );
    assert!(entry.locations().is_empty());
    assert_eq!(entry.to_string(), "msg=rtwMsg_notTraceable&block=untitled:14:215");
}

#[test]
fn not_traceable_without_block_writes_back_unchanged() {
    let entry = TraceEntry::parse("msg=rtwMsg_notTraceable").unwrap();
    assert_eq!(entry, TraceEntry::NotTraceable { block: None });
    assert_eq!(entry.to_string(), "msg=rtwMsg_notTraceable");
}

#[test]
fn message_mixed_with_locators_is_rejected() {
    assert_eq!(
        TraceEntry::parse("untitled.c:3&msg=rtwMsg_reducedBlock"),
        Err(LocatorError::MixedEntry {
            msg: "rtwMsg_reducedBlock".into()
        })
    );
    assert_eq!(
        TraceEntry::parse("msg=rtwMsg_notTraceable&block=untitled:1&untitled.h:9"),
        Err(LocatorError::MixedEntry {
            msg: "rtwMsg_notTraceable".into()
        })
    );
}

#[test]
fn multi_file_locations() {
    let entry = TraceEntry::parse("untitled.c:49,68&untitled.h:86").unwrap();
    assert_eq!(
        entry,
        TraceEntry::Locations(vec![
            SourceLocation {
                file: "untitled.c".into(),
                lines: vec![49, 68]
            },
            SourceLocation {
                file: "untitled.h".into(),
                lines: vec![86]
            },
        ])
    );
    assert_eq!(entry.to_string(), "untitled.c:49,68&untitled.h:86");
    assert_eq!(entry.locations()[1].report_page(), "untitled_h.html");
}

#[test]
fn semicolon_delimiter_is_accepted() {
    let entry = TraceEntry::parse("a.c:1; b.c:2").unwrap();
    let files: Vec<&str> = entry.locations().iter().map(|l| l.file.as_str()).collect();
    assert_eq!(files, vec!["a.c", "b.c"]);
}

#[test]
fn malformed_entries() {
    assert_eq!(TraceEntry::parse(""), Err(LocatorError::Empty));
    assert_eq!(TraceEntry::parse(" & "), Err(LocatorError::Empty));
    assert_eq!(
        TraceEntry::parse("untitled.c:4x"),
        Err(LocatorError::BadLine {
            locator: "untitled.c:4x".into(),
            value: "4x".into()
        })
    );
}

#[test]
fn json_shape() {
    let entry = TraceEntry::parse("untitled.h:93").unwrap();
    let json = serde_json::to_value(&entry).unwrap();
    assert_eq!(
        json,
        serde_json::json!({
            "kind": "locations",
            "value": [{ "file": "untitled.h", "lines": [93] }]
        })
    );
}
