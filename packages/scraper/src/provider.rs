//! Common capability of the feed adapters: build the canonical document set
//! for one region.

use std::path::{Path, PathBuf};

use serde::Serialize;

use crate::error::Result;
use crate::http::FeedSource;
use crate::output::{region_dir, write_documents};
use crate::types::DocumentSet;

/// A feed adapter for one region.
pub trait Provider {
    /// Club document entry.
    type Club: Serialize;

    /// Fixture document entry.
    type Fixture: Serialize;

    /// Standings document entry.
    type Standing: Serialize;

    /// Short region code, used for logging and the output directory.
    fn region_code(&self) -> &str;

    /// Fetch and normalize everything for the region.
    ///
    /// Any error means the region produced nothing usable.
    fn collect(
        &self,
        feed: &dyn FeedSource,
    ) -> Result<DocumentSet<Self::Club, Self::Fixture, Self::Standing>>;
}

/// Collect a region and write its documents under `output_base`.
///
/// Documents are only written once collection succeeded, so a failed region
/// leaves any previous output untouched.
///
/// # Returns
/// The directory the documents were written to.
pub fn run_region<P: Provider>(
    provider: &P,
    feed: &dyn FeedSource,
    output_base: &Path,
    year: &str,
) -> Result<PathBuf> {
    let code = provider.region_code();
    tracing::info!(region = code, year, "Collecting region");

    let docs = provider.collect(feed)?;

    let dir = region_dir(output_base, code, year);
    write_documents(&docs, &dir)?;

    tracing::info!(
        region = code,
        leagues = docs.leagues.len(),
        clubs = docs.clubs.len(),
        dir = %dir.display(),
        "Region saved"
    );
    Ok(dir)
}
