//! Traceability tables of the `untitled` model, as emitted by the code
//! generator into `untitled_ert_rtw/html/untitled_traceInfo.js`.

use crate::trace::TraceTable;

pub const MODEL: &str = "untitled";

/// `(sid, url hash)` in generator order.
pub const URL_HASHES: &[(&str, &str)] = &[
    ("untitled:1", "msg=rtwMsg_notTraceable&block=untitled:1"),
    ("untitled:13", "msg=rtwMsg_notTraceable&block=untitled:13"),
    ("untitled:9", "msg=rtwMsg_notTraceable&block=untitled:9"),
    ("untitled:11", "msg=rtwMsg_notTraceable&block=untitled:11"),
    ("untitled:20", "untitled.c:49,68&untitled.h:86"),
    ("untitled:10", "msg=rtwMsg_notTraceable&block=untitled:10"),
    ("untitled:19", "untitled.c:46&untitled.h:118&untitled_data.c:41"),
    ("untitled:8", "untitled.h:93"),
    ("untitled:21", "untitled.h:97"),
    (
        "untitled:16",
        "untitled.c:41&untitled.h:85,106,109,112,115&untitled_data.c:29,32,35,38",
    ),
    ("untitled:14:114", "msg=rtwMsg_notTraceable&block=untitled:14:114"),
    ("untitled:14:215", "msg=rtwMsg_notTraceable&block=untitled:14:215"),
    ("untitled:15:114", "msg=rtwMsg_notTraceable&block=untitled:15:114"),
    ("untitled:15:215", "msg=rtwMsg_notTraceable&block=untitled:15:215"),
    ("untitled:17:114", "untitled.c:70,77"),
    ("untitled:17:215", "untitled.c:76,198&untitled.h:103&untitled_data.c:26"),
];

/// `(rtwname, sid)` in generator order. Subsystems appear twice: as `<Sn>`
/// and as their `<Root>/…` path, the latter taking the reverse entry.
pub const NAMES: &[(&str, &str)] = &[
    ("<Root>", "untitled"),
    ("<S1>", "untitled:14"),
    ("<S2>", "untitled:15"),
    ("<S3>", "untitled:17"),
    ("<Root>/Analog Input", "untitled:1"),
    ("<Root>/Constant", "untitled:13"),
    ("<Root>/Data Type Conversion", "untitled:9"),
    ("<Root>/Data Type Conversion1", "untitled:11"),
    ("<Root>/Data Type Conversion3", "untitled:20"),
    ("<Root>/Gain", "untitled:10"),
    ("<Root>/Gain1", "untitled:19"),
    ("<Root>/PWM", "untitled:14"),
    ("<Root>/PWM1", "untitled:15"),
    ("<Root>/PWM2", "untitled:17"),
    ("<Root>/Scope", "untitled:8"),
    ("<Root>/Scope1", "untitled:21"),
    ("<Root>/Sine Wave", "untitled:16"),
    ("<S1>/In1", "untitled:14:116"),
    ("<S1>/Data Type Conversion", "untitled:14:114"),
    ("<S1>/PWM", "untitled:14:215"),
    ("<S2>/In1", "untitled:15:116"),
    ("<S2>/Data Type Conversion", "untitled:15:114"),
    ("<S2>/PWM", "untitled:15:215"),
    ("<S3>/In1", "untitled:17:116"),
    ("<S3>/Data Type Conversion", "untitled:17:114"),
    ("<S3>/PWM", "untitled:17:215"),
];

/// Build the `untitled` table. Call once and share the result.
pub fn table() -> TraceTable {
    let mut builder = TraceTable::builder(MODEL);
    for &(sid, entry) in URL_HASHES {
        builder.url_hash(sid, entry);
    }
    for &(rtwname, sid) in NAMES {
        builder.name(rtwname, sid);
    }
    builder.build()
}
