//! pH Strip Common Library
//!
//! CLIとデスクトップアプリで共有される型と解析ロジック

pub mod error;
pub mod matcher;
pub mod palette;
pub mod sampler;
pub mod types;

pub use error::{Error, Result};
pub use matcher::{closest_ph, match_color, ColorMatch};
pub use palette::{description_for, example_for, ReferenceEntry, REFERENCE_PALETTE};
pub use sampler::{sample, sample_region, SampleRegion};
pub use types::{AnalysisResult, Rgb};
