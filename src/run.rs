//! Run orchestration: configuration, collaborators, core, output.
//!
//! Strict ordering: the reference set is fully built before any inclusion
//! decision, and an empty reference set skips the listing entirely (nothing
//! could ever match). A failure in either collaborator aborts the run with
//! no partial output.

use crate::cli::{Cli, Command};
use crate::error::{ErrorKind, Result};
use crate::{export, report};
use exn::ResultExt;
use futures::TryStreamExt;
use mediasweep_config::{Config, RulesConfig};
use mediasweep_recon::{Reconciler, ReferenceSet, Taxonomy};
use mediasweep_refdb::{Database, media_urls, user_pictures};
use mediasweep_storage::{BucketLister, StoredObject};
use tracing::{info, instrument, warn};

pub async fn run(cli: Cli) -> Result<()> {
    let mut config = mediasweep_config::load(cli.config.as_deref()).or_raise(|| ErrorKind::Config)?;
    if let Some(prefix) = cli.prefix {
        config.storage.prefix = Some(prefix);
    }
    if cli.exclude_document_snapshots {
        config.rules.exclude_document_snapshots = true;
    }

    let references = fetch_references(&config).await?;
    let objects = if references.is_empty() {
        warn!("reference set is empty; no object can match, skipping the bucket listing");
        Vec::new()
    } else {
        list_objects(&config).await?
    };
    info!(references = references.len(), objects = objects.len(), "reconciling listing");

    let taxonomy = taxonomy_from_rules(&config.rules);
    let reconciler =
        Reconciler::new(&taxonomy, &references, config.rules.exclude_document_snapshots);
    match cli.command {
        Command::Export { output } => {
            let rows = reconciler.export_rows(&objects).or_raise(|| ErrorKind::Export)?;
            export::write_rows(&rows, output.as_deref())?;
        },
        Command::Stats => {
            let tree = reconciler.statistics(&objects);
            let mut stdout = std::io::stdout().lock();
            report::render(&tree, &mut stdout).or_raise(|| ErrorKind::Report)?;
        },
    }
    Ok(())
}

/// Build the reference set from the two database collections.
///
/// The queries are independent read snapshots (skew between them is
/// acceptable), so both are issued at once.
#[instrument(skip_all)]
async fn fetch_references(config: &Config) -> Result<ReferenceSet> {
    let db = Database::connect(&config.database.url).await.or_raise(|| ErrorKind::Database)?;
    let queried = tokio::try_join!(media_urls(&db), user_pictures(&db));
    let (urls, pictures) = queried.or_raise(|| ErrorKind::Database)?;
    db.close().await;
    Ok(ReferenceSet::build(urls, pictures))
}

/// Materialize the full (optionally prefixed) bucket listing.
#[instrument(skip_all, fields(bucket = %config.storage.bucket))]
async fn list_objects(config: &Config) -> Result<Vec<StoredObject>> {
    let storage = &config.storage;
    let lister = BucketLister::new(
        &storage.bucket,
        &storage.region,
        storage.endpoint.clone(),
        &storage.key_id,
        &storage.key_secret,
    );
    lister.stream(storage.prefix.as_deref()).try_collect().await.or_raise(|| ErrorKind::Listing)
}

/// Apply configured overrides on top of the canonical taxonomy.
fn taxonomy_from_rules(rules: &RulesConfig) -> Taxonomy {
    let mut taxonomy = Taxonomy::default();
    if let Some(extensions) = &rules.image_extensions {
        taxonomy.image_extensions = extensions.iter().cloned().collect();
    }
    if let Some(extensions) = &rules.video_extensions {
        taxonomy.video_extensions = extensions.iter().cloned().collect();
    }
    if let Some(extensions) = &rules.document_extensions {
        taxonomy.document_extensions = extensions.iter().cloned().collect();
    }
    taxonomy.document_folder = rules.document_folder.clone();
    taxonomy.thumbnail_scope = rules.thumbnail_scope.clone();
    taxonomy
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_taxonomy_overrides() {
        let rules = RulesConfig {
            thumbnail_scope: "Media/".to_string(),
            image_extensions: Some(vec!["jpg".to_string()]),
            ..RulesConfig::default()
        };
        let taxonomy = taxonomy_from_rules(&rules);
        assert_eq!(taxonomy.thumbnail_scope, "Media/");
        assert!(taxonomy.image_extensions.contains("jpg"));
        assert!(!taxonomy.image_extensions.contains("png"));
        // Untouched sets keep the canonical vocabulary.
        assert!(taxonomy.video_extensions.contains("mp4"));
    }
}
