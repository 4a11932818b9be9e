use camino::{Utf8Path, Utf8PathBuf};
use rtwtrace::parser::{ContentSource, TraceInfoParser, ZipSource};
use std::io::{Cursor, Write};
use zip::write::FileOptions;

const UNTITLED_JS: &str = include_str!("data/untitled_traceInfo.js");

fn packaged_report() -> Vec<u8> {
    let mut buf = Cursor::new(Vec::new());
    {
        let mut zip = zip::ZipWriter::new(&mut buf);
        let options = FileOptions::default();
        zip.add_directory("untitled_ert_rtw/html/", options).unwrap();
        zip.start_file("untitled_ert_rtw/untitled.c", options).unwrap();
        zip.write_all(b"/* generated */\n").unwrap();
        zip.start_file("untitled_ert_rtw/html/untitled_traceInfo.js", options)
            .unwrap();
        zip.write_all(UNTITLED_JS.as_bytes()).unwrap();
        zip.finish().unwrap();
    }
    buf.into_inner()
}

#[test]
fn list_dir_skips_directory_entries() {
    let mut source = ZipSource::new(Cursor::new(packaged_report())).unwrap();
    let files = source.list_dir(Utf8Path::new("untitled_ert_rtw")).unwrap();
    assert_eq!(
        files,
        vec![
            Utf8PathBuf::from("untitled_ert_rtw/html/untitled_traceInfo.js"),
            Utf8PathBuf::from("untitled_ert_rtw/untitled.c"),
        ]
    );
    let text = source
        .read_to_string(Utf8Path::new("./untitled_ert_rtw/untitled.c"))
        .unwrap();
    assert_eq!(text, "/* generated */\n");
}

#[test]
fn parses_report_from_archive_root() {
    let source = ZipSource::new(Cursor::new(packaged_report())).unwrap();
    let mut parser = TraceInfoParser::new(source);
    let table = parser.parse_report("").unwrap();
    assert_eq!(table.model(), "untitled");
    assert_eq!(table.get_url_hash("untitled:8"), Some("untitled.h:93"));
    assert_eq!(table.get_rtwname("untitled:17").unwrap().rtwname, "<Root>/PWM2");
}
