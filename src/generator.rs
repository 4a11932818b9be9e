//! Generate `<model>_traceInfo.js` text from a [`TraceTable`].
//!
//! The layout follows the code generator's output: two constructor functions
//! with tab-indented assignments, a `/* rtwname */` comment above every url
//! hash, and a `.instance` line after each function.

use crate::trace::TraceTable;
use indexmap::IndexMap;

pub fn generate_trace_info(table: &TraceTable) -> String {
    let mut out = String::with_capacity(128 * (table.len() + 1));
    write_url_hashes(&mut out, table);
    write_name_maps(&mut out, table);
    out
}

fn write_url_hashes(out: &mut String, table: &TraceTable) {
    out.push_str("function RTW_Sid2UrlHash() {\n");
    out.push_str("\tthis.urlHashMap = new Array();\n");
    for (sid, entry) in table.url_hashes() {
        if let Some(name) = table.get_rtwname(sid) {
            out.push_str("\t/* ");
            out.push_str(&name.rtwname.replace("*/", "* /"));
            out.push_str(" */\n");
        }
        out.push_str(&format!(
            "\tthis.urlHashMap[{}] = {};\n",
            js_string(sid),
            js_string(entry)
        ));
    }
    out.push_str("\tthis.getUrlHash = function(sid) { return this.urlHashMap[sid];}\n");
    out.push_str("}\n");
    out.push_str("RTW_Sid2UrlHash.instance = new RTW_Sid2UrlHash();\n");
}

fn write_name_maps(out: &mut String, table: &TraceTable) {
    out.push_str("function RTW_rtwnameSIDMap() {\n");
    out.push_str("\tthis.rtwnameHashMap = new Array();\n");
    out.push_str("\tthis.sidHashMap = new Array();\n");

    // Reverse state a reader ends up with after the paired lines below.
    let mut implied: IndexMap<&str, &str> = IndexMap::new();
    for (rtwname, sid) in table.names() {
        write_forward(out, rtwname, sid);
        write_reverse(out, sid, rtwname);
        implied.insert(sid, rtwname);
    }
    for (sid, rtwname) in table.sids() {
        if implied.get(sid) != Some(&rtwname) {
            write_reverse(out, sid, rtwname);
        }
    }

    out.push_str("\tthis.getSID = function(rtwname) { return this.rtwnameHashMap[rtwname];}\n");
    out.push_str("\tthis.getRtwname = function(sid) { return this.sidHashMap[sid];}\n");
    out.push_str("}\n");
    out.push_str("RTW_rtwnameSIDMap.instance = new RTW_rtwnameSIDMap();\n");
}

fn write_forward(out: &mut String, rtwname: &str, sid: &str) {
    out.push_str(&format!(
        "\tthis.rtwnameHashMap[{}] = {{sid: {}}};\n",
        js_string(rtwname),
        js_string(sid)
    ));
}

fn write_reverse(out: &mut String, sid: &str, rtwname: &str) {
    out.push_str(&format!(
        "\tthis.sidHashMap[{}] = {{rtwname: {}}};\n",
        js_string(sid),
        js_string(rtwname)
    ));
}

/// Double-quoted JavaScript string literal.
fn js_string(s: &str) -> String {
    let mut out = String::with_capacity(s.len() + 2);
    out.push('"');
    for ch in s.chars() {
        match ch {
            '"' => out.push_str("\\\""),
            '\\' => out.push_str("\\\\"),
            '\n' => out.push_str("\\n"),
            '\r' => out.push_str("\\r"),
            '\t' => out.push_str("\\t"),
            c if c.is_control() => out.push_str(&format!("\\u{:04x}", c as u32)),
            c => out.push(c),
        }
    }
    out.push('"');
    out
}
