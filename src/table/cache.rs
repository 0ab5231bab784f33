use std::path::PathBuf;
use std::sync::Arc;
use std::time::{Duration, Instant};
use tracing::{debug, warn};

use crate::error::Result;
use crate::readers::RateTableReader;
use crate::table::RateTable;

/// File-backed rate table reloaded once its snapshot is older than the TTL.
///
/// Owned by a single caller; there is at most one load in flight.
pub struct CachedRateTable {
    reader: RateTableReader,
    rates_path: PathBuf,
    products_path: Option<PathBuf>,
    ttl: Duration,
    snapshot: Option<(Instant, Arc<RateTable>)>,
}

impl CachedRateTable {
    pub fn new(rates_path: PathBuf, products_path: Option<PathBuf>, ttl: Duration) -> Self {
        Self {
            reader: RateTableReader::new(),
            rates_path,
            products_path,
            ttl,
            snapshot: None,
        }
    }

    /// Current table, reloading from disk if the snapshot is missing or stale.
    ///
    /// A failed reload drops the stale snapshot and returns the error.
    pub fn get(&mut self) -> Result<Arc<RateTable>> {
        if let Some((loaded, table)) = &self.snapshot {
            if loaded.elapsed() < self.ttl {
                debug!("Rate table cache hit");
                return Ok(Arc::clone(table));
            }
            debug!("Rate table snapshot expired after {:?}", self.ttl);
        }

        self.snapshot = None;
        match self
            .reader
            .load(&self.rates_path, self.products_path.as_deref())
        {
            Ok(table) => {
                let table = Arc::new(table);
                self.snapshot = Some((Instant::now(), Arc::clone(&table)));
                Ok(table)
            }
            Err(e) => {
                warn!("Failed to load rate table: {}", e);
                Err(e)
            }
        }
    }

    pub fn invalidate(&mut self) {
        self.snapshot = None;
    }

    pub fn ttl(&self) -> Duration {
        self.ttl
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::ErrorKind;
    use crate::models::ContainerSize;
    use std::fs;
    use std::path::Path;
    use tempfile::TempDir;

    fn write_rates(path: &Path, price: f64) {
        fs::write(
            path,
            format!("Port,Container Size,Volume (m3),Price\nFuzhou FZG,20GP,28,{}\n", price),
        )
        .unwrap();
    }

    #[test]
    fn test_snapshot_reused_within_ttl() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("rates.csv");
        write_rates(&path, 5379.19);

        let mut cache = CachedRateTable::new(path.clone(), None, Duration::from_secs(3600));
        let first = cache.get().unwrap();

        write_rates(&path, 1000.0);
        let second = cache.get().unwrap();

        assert!(Arc::ptr_eq(&first, &second));
        let rate = second
            .lookup_container_rate("Fuzhou FZG", ContainerSize::Gp20)
            .unwrap();
        assert_eq!(rate.price, 5379.19);
    }

    #[test]
    fn test_reload_after_expiry() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("rates.csv");
        write_rates(&path, 5379.19);

        let mut cache = CachedRateTable::new(path.clone(), None, Duration::ZERO);
        cache.get().unwrap();

        write_rates(&path, 1000.0);
        let table = cache.get().unwrap();
        let rate = table
            .lookup_container_rate("Fuzhou FZG", ContainerSize::Gp20)
            .unwrap();
        assert_eq!(rate.price, 1000.0);
    }

    #[test]
    fn test_invalidate_forces_reload() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("rates.csv");
        write_rates(&path, 5379.19);

        let mut cache = CachedRateTable::new(path.clone(), None, Duration::from_secs(3600));
        let first = cache.get().unwrap();
        cache.invalidate();
        let second = cache.get().unwrap();
        assert!(!Arc::ptr_eq(&first, &second));
    }

    #[test]
    fn test_failed_reload_drops_snapshot() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("rates.csv");
        write_rates(&path, 5379.19);

        let mut cache = CachedRateTable::new(path.clone(), None, Duration::ZERO);
        cache.get().unwrap();

        fs::remove_file(&path).unwrap();
        let err = cache.get().unwrap_err();
        assert_eq!(err.kind(), ErrorKind::DataUnavailable);
        assert!(cache.snapshot.is_none());
    }
}
