//! # Marquee Core
//!
//! Recovers structured metadata from noisy release file names and download
//! URLs: a clean title, release year, season/episode, video quality, audio
//! languages and file size. The same fields can be rendered back into a
//! canonical download label.
//!
//! ## Quick Start
//!
//! ```rust
//! use marquee_core::{generate_label, LabelFields, LanguageSeparator, ParserConfig, ReleaseParser};
//!
//! let parser = ReleaseParser::new(ParserConfig::new().with_current_year(2026)).unwrap();
//! let result = parser
//!     .parse("Kung.Fu.Panda.4.2024.1080p.WEB-DL.Hindi-English.1.4GB.mkv")
//!     .unwrap();
//!
//! assert_eq!(result.title, "Kung Fu Panda 4");
//! assert_eq!(result.year, Some(2024));
//! assert_eq!(result.size.as_deref(), Some("1.4GB"));
//!
//! let label = generate_label(&LabelFields::from(&result), LanguageSeparator::Plus);
//! assert_eq!(label, "1080p Hindi+English [1.4GB]");
//! ```
pub mod error;
pub mod label;
pub mod lexicon;
pub mod parser;
pub mod source;
pub mod types;

// Re-export primary API
pub use error::{MarqueeError, Result};
pub use label::{generate_label, LabelFields, LanguageSeparator, ParseSeparatorError};
pub use lexicon::{Lexicon, DUAL_AUDIO};
pub use parser::{parse, parse_url, ParserConfig, ReleaseParser};
pub use source::filename_from_url;
pub use types::{Extracted, ParsedMetadata, Quality};
