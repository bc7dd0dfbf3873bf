//! Fuzz target for rule-list documents.
//!
//! Goal: splitting a file into header and rows, drift detection, and row parsing
//! should **never panic** on any input.
//!
//! Run with:
//! ```bash
//! cargo +nightly fuzz run fuzz_list_document
//! ```

#![no_main]

use libfuzzer_sys::fuzz_target;

fuzz_target!(|data: &[u8]| {
    // Limit input size to avoid OOM and keep fuzzing fast
    if data.len() > 64 * 1024 {
        return;
    }

    let _ = modsync_lists::fuzz::parse_document(data);
    let _ = modsync_lists::fuzz::parse_rows(data);
});
