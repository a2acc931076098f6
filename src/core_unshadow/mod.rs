pub mod error;
pub mod merger;
pub mod records;

#[cfg(test)]
mod test_unshadow;

pub use error::UnshadowError;
pub use merger::{merge, merge_bytes, merge_with_report, unshadow_files, MergeReport};
