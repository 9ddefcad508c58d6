//! Background catalog loading.
//!
//! Reading and parsing the CMS export runs on its own thread so the event
//! loop keeps drawing (and the throbber keeps spinning) while it happens. The
//! result comes back over a crossbeam channel and is polled once per tick.
//!
//! ```no_run
//! use folio::loader::{CatalogLoader, CatalogSource};
//!
//! let mut loader = CatalogLoader::spawn(CatalogSource::Seed);
//! loop {
//!     if let Some(result) = loader.try_recv() {
//!         match result {
//!             Ok(catalog) => println!("{} works", catalog.works.len()),
//!             Err(e) => println!("load failed: {e}"),
//!         }
//!         break;
//!     }
//! }
//! ```

use std::path::PathBuf;
use std::thread;

use crossbeam::channel::{bounded, Receiver, TryRecvError};

use crate::data::Catalog;
use crate::error::{FolioError, Result};

/// Where the catalog comes from.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CatalogSource {
    /// A JSON export on disk.
    File(PathBuf),
    /// The bundled seed data.
    Seed,
}

impl CatalogSource {
    pub fn describe(&self) -> String {
        match self {
            CatalogSource::File(path) => path.display().to_string(),
            CatalogSource::Seed => "built-in seed".to_string(),
        }
    }

    fn fetch(&self) -> Result<Catalog> {
        match self {
            CatalogSource::File(path) => Catalog::load(path),
            CatalogSource::Seed => Ok(Catalog::seed()),
        }
    }
}

/// Handle to a single in-flight catalog load.
pub struct CatalogLoader {
    receiver: Receiver<Result<Catalog>>,
    source: CatalogSource,
    done: bool,
}

impl CatalogLoader {
    /// Starts loading on a background thread and returns immediately.
    pub fn spawn(source: CatalogSource) -> Self {
        let (sender, receiver) = bounded(1);
        let job = source.clone();

        thread::spawn(move || {
            let result = job.fetch();
            if let Err(e) = &result {
                tracing::warn!(source = %job.describe(), error = %e, "catalog load failed");
            }
            // The receiver may already be gone if the app quit early.
            let _ = sender.send(result);
        });

        tracing::info!(source = %source.describe(), "catalog load started");
        Self {
            receiver,
            source,
            done: false,
        }
    }

    pub fn source(&self) -> &CatalogSource {
        &self.source
    }

    /// Returns the result once it is available. Yields it exactly once;
    /// later calls return `None`.
    pub fn try_recv(&mut self) -> Option<Result<Catalog>> {
        if self.done {
            return None;
        }

        match self.receiver.try_recv() {
            Ok(result) => {
                self.done = true;
                Some(result)
            }
            Err(TryRecvError::Empty) => None,
            Err(TryRecvError::Disconnected) => {
                self.done = true;
                Some(Err(FolioError::LoaderDisconnected))
            }
        }
    }

    pub fn is_pending(&self) -> bool {
        !self.done
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::time::{Duration, Instant};
    use tempfile::TempDir;

    fn wait(loader: &mut CatalogLoader) -> Result<Catalog> {
        let deadline = Instant::now() + Duration::from_secs(5);
        loop {
            if let Some(result) = loader.try_recv() {
                return result;
            }
            assert!(Instant::now() < deadline, "loader did not finish in time");
            std::thread::sleep(Duration::from_millis(10));
        }
    }

    #[test]
    fn test_seed_load_completes() {
        let mut loader = CatalogLoader::spawn(CatalogSource::Seed);
        assert!(loader.is_pending());

        let catalog = wait(&mut loader).expect("seed should load");
        assert!(!catalog.works.is_empty());
        assert!(!loader.is_pending());
        assert!(loader.try_recv().is_none());
    }

    #[test]
    fn test_file_load_completes() {
        let dir = TempDir::new().expect("Failed to create temp directory");
        let path = dir.path().join("catalog.json");
        std::fs::write(&path, r#"{ "works": [{ "title": "Only", "slug": "only" }] }"#).unwrap();

        let mut loader = CatalogLoader::spawn(CatalogSource::File(path));
        let catalog = wait(&mut loader).unwrap();
        assert_eq!(catalog.works.len(), 1);
    }

    #[test]
    fn test_missing_file_reports_error() {
        let mut loader =
            CatalogLoader::spawn(CatalogSource::File("/nonexistent/catalog.json".into()));
        assert!(matches!(wait(&mut loader), Err(FolioError::Read { .. })));
    }
}
