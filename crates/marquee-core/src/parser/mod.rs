pub mod extractors;
pub mod normalizer;
pub mod title;
pub mod unified;

pub use extractors::{year_in_window, FieldExtractors, SeasonEpisode};
pub use normalizer::{Normalized, Normalizer};
pub use title::{resolve_boundary, TitleCleaner};
pub use unified::{parse, parse_url, ParserConfig, ReleaseParser};
