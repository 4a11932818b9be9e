use rtwtrace::model::{RtwnameRef, SidRef};
use rtwtrace::untitled::{self, NAMES, URL_HASHES};

#[test]
fn url_hash_of_gain1() {
    let table = untitled::table();
    assert_eq!(
        table.get_url_hash("untitled:19"),
        Some("untitled.c:46&untitled.h:118&untitled_data.c:41")
    );
}

#[test]
fn every_literal_url_hash_is_returned_verbatim() {
    let table = untitled::table();
    assert_eq!(table.len(), URL_HASHES.len());
    for &(sid, entry) in URL_HASHES {
        assert_eq!(table.get_url_hash(sid), Some(entry), "sid {}", sid);
    }
}

#[test]
fn name_and_sid_round_trip() {
    let table = untitled::table();
    assert_eq!(
        table.get_sid("<Root>/Gain1"),
        Some(SidRef { sid: "untitled:19" })
    );
    assert_eq!(
        table.get_rtwname("untitled:19"),
        Some(RtwnameRef {
            rtwname: "<Root>/Gain1"
        })
    );

    for &(rtwname, sid) in NAMES {
        assert_eq!(table.get_sid(rtwname).map(|r| r.sid), Some(sid));
        // The last pair written for a SID owns its reverse entry.
        let last = NAMES.iter().rev().find(|(_, s)| *s == sid).unwrap().0;
        assert_eq!(table.get_rtwname(sid).map(|r| r.rtwname), Some(last));
    }
}

#[test]
fn subsystem_aliases_resolve_to_parent_path() {
    let table = untitled::table();
    assert_eq!(table.get_sid("<S1>").unwrap().sid, "untitled:14");
    assert_eq!(table.get_rtwname("untitled:14").unwrap().rtwname, "<Root>/PWM");

    let aliases: Vec<(&str, &str)> = table
        .aliases()
        .iter()
        .map(|a| (a.rtwname, a.canonical))
        .collect();
    assert_eq!(
        aliases,
        vec![
            ("<S1>", "<Root>/PWM"),
            ("<S2>", "<Root>/PWM1"),
            ("<S3>", "<Root>/PWM2"),
        ]
    );
}

#[test]
fn unknown_keys_are_absent() {
    let table = untitled::table();
    assert_eq!(table.get_url_hash("does-not-exist"), None);
    assert_eq!(table.get_sid("<Root>/Nope"), None);
    assert_eq!(table.get_rtwname("untitled:999"), None);
    assert!(table.trace_entry("does-not-exist").is_none());
    // Inport blocks have names but no url hash.
    assert_eq!(table.get_url_hash("untitled:14:116"), None);
}

#[test]
fn table_is_consistent() {
    let table = untitled::table();
    assert_eq!(table.model(), "untitled");
    assert!(table.check().is_empty(), "{:?}", table.check());
}

#[test]
fn sine_wave_locations() {
    let table = untitled::table();
    let entry = table.trace_entry("untitled:16").unwrap().unwrap();
    let files: Vec<&str> = entry.locations().iter().map(|l| l.file.as_str()).collect();
    assert_eq!(files, vec!["untitled.c", "untitled.h", "untitled_data.c"]);
    assert_eq!(entry.locations()[1].lines, vec![85, 106, 109, 112, 115]);

    let not_traceable = table.trace_entry("untitled:1").unwrap().unwrap();
    assert!(!not_traceable.is_traceable());
}
