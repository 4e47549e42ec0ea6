pub mod drug;
pub mod error;
pub mod extraction;

pub use drug::DrugRecord;
pub use error::{RecordError, Result};
pub use extraction::ExtractedMedication;
