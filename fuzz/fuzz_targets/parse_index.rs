// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Fuzz target for index JSON parsing.
//!
//! The index file comes from a static host over the network. Truncated
//! responses, CDN error pages, BOMs, emoji in titles, deeply nested junk:
//! parsing must produce a well-formed index or a clean error, never a panic.

#![no_main]

use libfuzzer_sys::fuzz_target;
use sift::parse_index;

fuzz_target!(|data: &[u8]| {
    let json = match std::str::from_utf8(data) {
        Ok(s) => s,
        Err(_) => return,
    };

    // INVARIANT 1: parse_index never panics, whatever the payload.
    let index = match parse_index(json) {
        Ok(index) => index,
        Err(_) => return,
    };

    // INVARIANT 2: A parsed index is internally consistent.
    assert_eq!(
        index.articles().len(),
        index.texts().len(),
        "Articles and normalized texts must stay paired"
    );
    assert_eq!(index.len(), index.articles().len());

    // INVARIANT 3: Parsing is deterministic.
    let reparsed = parse_index(json).expect("Second parse of accepted input failed");
    assert_eq!(reparsed.len(), index.len());
    assert_eq!(reparsed.articles(), index.articles());

    // INVARIANT 4: Lookup agrees with len().
    assert!(index.get(index.len()).is_none());
    if !index.is_empty() {
        assert!(index.get(0).is_some());
    }
});
