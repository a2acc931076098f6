// Line filtering and record shapes for passwd and shadow listings.
//
// Malformed lines are dropped, never reported as errors. Each predicate
// below is one piece of that policy.

use crate::core_unshadow::error::Listing;

/// name, placeholder, uid, gid, gecos, home, shell
pub const ACCOUNT_MIN_FIELDS: usize = 7;
/// name, hash
pub const SECRET_MIN_FIELDS: usize = 2;

pub const FIELD_SEPARATOR: &str = ":";

/// Blank, whitespace-only and `#` comment lines carry no record.
pub fn is_ignorable_line(line: &str) -> bool {
    line.trim().is_empty() || line.starts_with('#')
}

pub fn has_account_shape(fields: &[&str]) -> bool {
    fields.len() >= ACCOUNT_MIN_FIELDS
}

pub fn has_secret_shape(fields: &[&str]) -> bool {
    fields.len() >= SECRET_MIN_FIELDS
}

pub fn split_fields(line: &str) -> Vec<&str> {
    line.split(FIELD_SEPARATOR).collect()
}

/// One passwd line, all fields kept verbatim.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AccountRecord<'a> {
    fields: Vec<&'a str>,
}

impl<'a> AccountRecord<'a> {
    pub fn from_line(line: &'a str) -> Option<Self> {
        let fields = split_fields(line);
        if !has_account_shape(&fields) {
            return None;
        }
        Some(AccountRecord { fields })
    }

    pub fn username(&self) -> &'a str {
        self.fields[0]
    }

    pub fn password_placeholder(&self) -> &'a str {
        self.fields[1]
    }

    pub fn uid(&self) -> &'a str {
        self.fields[2]
    }

    /// Serializes the record with `hash` in place of the placeholder.
    pub fn with_secret(&self, hash: &str) -> String {
        let mut fields: Vec<&str> = self.fields.iter().copied().collect();
        fields[1] = hash;
        fields.join(FIELD_SEPARATOR)
    }
}

/// The part of a shadow line the merge uses.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SecretRecord<'a> {
    pub username: &'a str,
    pub secret_hash: &'a str,
}

impl<'a> SecretRecord<'a> {
    pub fn from_line(line: &'a str) -> Option<Self> {
        let fields = split_fields(line);
        if !has_secret_shape(&fields) {
            return None;
        }
        Some(SecretRecord {
            username: fields[0],
            secret_hash: fields[1],
        })
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SkipReason {
    TooFewFields { found: usize, required: usize },
}

/// A record line that was dropped while parsing.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SkippedLine {
    pub listing: Listing,
    pub line_number: usize,
    pub reason: SkipReason,
}

impl SkippedLine {
    pub fn too_few_fields(listing: Listing, line_number: usize, line: &str) -> Self {
        let required = match listing {
            Listing::Account => ACCOUNT_MIN_FIELDS,
            Listing::Secret => SECRET_MIN_FIELDS,
        };
        SkippedLine {
            listing,
            line_number,
            reason: SkipReason::TooFewFields {
                found: split_fields(line).len(),
                required,
            },
        }
    }
}
