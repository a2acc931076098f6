// src/constants.rs

pub const DEFAULT_CONFIG_PATH: &str = "/etc/rouillejtr.conf";

pub const FORMATS_TIMEOUT_SECS: u64 = 10;
pub const CRACK_TIMEOUT_SECS: u64 = 300;
pub const SHOW_TIMEOUT_SECS: u64 = 30;
pub const VERSION_TIMEOUT_SECS: u64 = 5;

pub const SESSION_FILE_EXTENSION: &str = "rec";
pub const SESSION_NAME_MAX_LENGTH: usize = 50;
pub const DEFAULT_SESSION_NAME: &str = "default";

pub const RECENT_CRACKS_SHOWN: usize = 5;
pub const FORMATS_LISTED_IN_ERRORS: usize = 10;

/// Common Linux crypt formats, as named by john.
pub const HASH_FORMATS: [(&str, &str); 5] = [
    ("descrypt", "Traditional DES crypt"),
    ("md5crypt", "MD5-based crypt (older Linux/BSD)"),
    ("sha256crypt", "SHA-256 crypt"),
    ("sha512crypt", "SHA-512 crypt (modern Linux default)"),
    ("bcrypt", "bcrypt (OpenBSD, some Linux)"),
];
