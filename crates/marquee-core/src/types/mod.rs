pub mod extracted;
pub mod quality;
pub mod result;

pub use extracted::Extracted;
pub use quality::Quality;
pub use result::ParsedMetadata;
