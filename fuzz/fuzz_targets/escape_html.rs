// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Fuzz target for HTML escaping.
//!
//! Everything the renderer writes between tags went through `escape_html`
//! first, so this one function is the entire XSS defense. Feed it garbage
//! and make sure nothing active survives.

#![no_main]

use libfuzzer_sys::fuzz_target;
use sift::escape_html;

/// Reverse the escaping. `&amp;` must be decoded last or a literal
/// `&amp;lt;` in the input would collapse twice.
fn unescape_html(s: &str) -> String {
    s.replace("&lt;", "<")
        .replace("&gt;", ">")
        .replace("&quot;", "\"")
        .replace("&#39;", "'")
        .replace("&amp;", "&")
}

fuzz_target!(|text: &str| {
    // INVARIANT 1: escape_html() never panics.
    let escaped = escape_html(text);

    // INVARIANT 2: No markup-significant character survives.
    assert!(
        !escaped.contains('<') && !escaped.contains('>'),
        "Escaped output still contains a tag delimiter"
    );
    assert!(
        !escaped.contains('"') && !escaped.contains('\''),
        "Escaped output still contains a quote"
    );

    // INVARIANT 3: Escaping is lossless.
    assert_eq!(unescape_html(&escaped), text, "Escape/unescape round trip lost data");

    // INVARIANT 4: Bounded growth. The widest expansion is one byte
    // into the six-byte `&quot;`.
    assert!(
        escaped.len() <= text.len() * 6,
        "Escaped output grew from {} to {} bytes",
        text.len(),
        escaped.len()
    );

    // INVARIANT 5: Text without special characters passes through untouched.
    let has_special = text.chars().any(|c| matches!(c, '&' | '<' | '>' | '"' | '\''));
    if !has_special {
        assert_eq!(escaped, text, "Special-free text was modified");
    }
});
