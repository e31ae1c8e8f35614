/*
 * SPDX-License-Identifier: Apache-2.0
 * Copyright 2025 ByteDance and/or its affiliates.
 */

use std::fmt::Write;

/// Base naming transform applied to meter names and tags before the
/// storage-safety pass. Pluggable so hosts can keep their registry's
/// convention.
pub trait NamingConvention: Send + Sync {
    fn meter_name(&self, name: &str) -> String;
    fn tag_key(&self, key: &str) -> String;
    fn tag_value(&self, value: &str) -> String;
}

/// Passes names through unchanged.
pub struct Identity;

impl NamingConvention for Identity {
    fn meter_name(&self, name: &str) -> String {
        name.to_string()
    }

    fn tag_key(&self, key: &str) -> String {
        key.to_string()
    }

    fn tag_value(&self, value: &str) -> String {
        value.to_string()
    }
}

/// Lower snake-case word separation: `httpRequests` becomes
/// `http_requests`. Tag values pass through unchanged.
pub struct SnakeCase;

fn to_snake_case(s: &str) -> String {
    let mut out = String::with_capacity(s.len() + 4);
    let mut prev_lower = false;
    for c in s.chars() {
        if c.is_uppercase() {
            if prev_lower {
                out.push('_');
            }
            out.extend(c.to_lowercase());
            prev_lower = false;
        } else {
            out.push(c);
            prev_lower = c.is_lowercase();
        }
    }
    out
}

impl NamingConvention for SnakeCase {
    fn meter_name(&self, name: &str) -> String {
        to_snake_case(name)
    }

    fn tag_key(&self, key: &str) -> String {
        to_snake_case(key)
    }

    fn tag_value(&self, value: &str) -> String {
        value.to_string()
    }
}

/// Characters that collide with the storage cluster's query/filter
/// expression syntax and may not appear in exported names.
const FORBIDDEN_CHARS: &[char] = &['{', '}', '(', ')', ':', ',', '=', '[', ']'];

/// Storage-safe naming: applies a delegate convention, escapes the
/// result JSON-style, then replaces each forbidden character with `_`.
pub struct StoreNamingConvention {
    delegate: Box<dyn NamingConvention>,
}

impl Default for StoreNamingConvention {
    fn default() -> Self {
        StoreNamingConvention {
            delegate: Box::new(SnakeCase),
        }
    }
}

impl StoreNamingConvention {
    pub fn new(delegate: Box<dyn NamingConvention>) -> Self {
        StoreNamingConvention { delegate }
    }

    fn format(&self, s: &str) -> String {
        let escaped = escape_json(s);
        let mut out = String::with_capacity(escaped.len());
        for c in escaped.chars() {
            if FORBIDDEN_CHARS.contains(&c) {
                out.push('_');
            } else {
                out.push(c);
            }
        }
        out
    }
}

fn escape_json(s: &str) -> String {
    let mut out = String::with_capacity(s.len());
    for c in s.chars() {
        match c {
            '"' => out.push_str("\\\""),
            '\\' => out.push_str("\\\\"),
            '\n' => out.push_str("\\n"),
            '\r' => out.push_str("\\r"),
            '\t' => out.push_str("\\t"),
            '\u{8}' => out.push_str("\\b"),
            '\u{c}' => out.push_str("\\f"),
            c if (c as u32) < 0x20 => {
                let _ = write!(out, "\\u{:04x}", c as u32);
            }
            c => out.push(c),
        }
    }
    out
}

impl NamingConvention for StoreNamingConvention {
    fn meter_name(&self, name: &str) -> String {
        self.format(&self.delegate.meter_name(name))
    }

    fn tag_key(&self, key: &str) -> String {
        self.format(&self.delegate.tag_key(key))
    }

    fn tag_value(&self, value: &str) -> String {
        self.format(&self.delegate.tag_value(value))
    }
}
