//! Shared state handed to every route handler.

use std::sync::Arc;
use std::time::Duration;

use marquee_core::{LanguageSeparator, ReleaseParser};

use crate::lookup::YearLookup;

#[derive(Clone)]
pub struct AppContext {
    pub parser: Arc<ReleaseParser>,
    /// Year backfill; `None` disables it.
    pub lookup: Option<Arc<dyn YearLookup>>,
    pub lookup_timeout: Duration,
    pub separator: LanguageSeparator,
}

impl AppContext {
    pub fn new(parser: ReleaseParser) -> Self {
        Self {
            parser: Arc::new(parser),
            lookup: None,
            lookup_timeout: Duration::from_secs(5),
            separator: LanguageSeparator::default(),
        }
    }

    pub fn with_lookup(mut self, lookup: Arc<dyn YearLookup>, timeout: Duration) -> Self {
        self.lookup = Some(lookup);
        self.lookup_timeout = timeout;
        self
    }

    pub fn with_separator(mut self, separator: LanguageSeparator) -> Self {
        self.separator = separator;
        self
    }
}
