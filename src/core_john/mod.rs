pub mod crack;
pub mod error;
pub mod output;
pub mod wrapper;

pub use crack::{run_crack, CrackOutcome, CrackRequest};
pub use error::JohnError;
pub use wrapper::JohnWrapper;
