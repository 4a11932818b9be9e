use rtwtrace::TraceTable;
use rtwtrace::trace::Inconsistency;

#[test]
fn names_only_table_counts_as_empty() {
    let mut b = TraceTable::builder("m");
    b.name("<Root>", "m");
    let table = b.build();

    assert_eq!(table.len(), 0);
    assert!(table.is_empty());
    assert_eq!(table.get_sid("<Root>").unwrap().sid, "m");
}

#[test]
fn len_and_is_empty_follow_url_hashes() {
    let mut b = TraceTable::builder("m");
    b.url_hash("m:1", "m.c:4");
    let table = b.build();

    assert_eq!(table.len(), 1);
    assert!(!table.is_empty());
    assert_eq!(
        table.check(),
        vec![Inconsistency::MissingReverse { sid: "m:1".into() }]
    );
}

#[test]
fn model_is_derived_from_first_sid() {
    let mut b = rtwtrace::TraceTableBuilder::new();
    b.url_hash("pump:3", "pump.c:12").name("<Root>/Gain1", "pump:3");
    let table = b.build();
    assert_eq!(table.model(), "pump");
    assert!(table.check().is_empty());
}
