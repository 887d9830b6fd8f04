#![allow(missing_docs)]
#![allow(dead_code)]

use std::fmt::Write;

/// Deterministic log-like text: short ASCII lines, lines just over each tier
/// limit, multi-byte lines and the occasional blank line.
pub fn make_corpus(records: usize) -> String {
    let mut s = String::new();
    for i in 0..records {
        match i % 7 {
            0 => writeln!(s, "record {i}: ok").unwrap(),
            1 => s.push_str(&"a".repeat(141)),
            2 => s.push_str(&"ñ".repeat(81)),
            3 => s.push_str(&"😊".repeat(150)),
            4 => {}
            5 => write!(s, "déjà vu #{i}").unwrap(),
            _ => s.push_str(&"€".repeat(53)),
        }
        if i % 7 != 0 {
            s.push('\n');
        }
    }
    s
}
