//! Fuzz target for single rule rows.
//!
//! Goal: `RuleEntry::parse` returns a `FormatError` for bad rows and **never panics**.
//! Any row that parses must survive a display/parse round-trip with the same meaning.
//!
//! Run with:
//! ```bash
//! cargo +nightly fuzz run fuzz_rule_entry
//! ```

#![no_main]

use arbitrary::Arbitrary;
use libfuzzer_sys::fuzz_target;
use modsync_domain::rule::RuleEntry;

#[derive(Arbitrary, Debug)]
struct RowInput {
    id: String,
    flag: String,
    min: String,
    max: String,
}

fuzz_target!(|input: RowInput| {
    if input.id.len() + input.flag.len() + input.min.len() + input.max.len() > 1024 {
        return;
    }

    let row = format!("{} | {} | {} | {}", input.id, input.flag, input.min, input.max);
    if let Ok(entry) = RuleEntry::parse(&row) {
        let reparsed = RuleEntry::parse(&entry.to_string()).expect("display output reparses");
        assert_eq!(reparsed, entry);
    }
});
