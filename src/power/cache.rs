use crate::power::error::FetchError;
use crate::power::provider::{DailyProvider, FetchRequest};
use crate::types::series::ParameterSet;
use log::debug;
use ordered_float::OrderedFloat;
use std::collections::{hash_map::Entry, HashMap};
use tokio::sync::Mutex;

type CacheKey = (OrderedFloat<f64>, OrderedFloat<f64>, chrono::NaiveDate, chrono::NaiveDate);

fn cache_key(request: &FetchRequest) -> CacheKey {
    (
        OrderedFloat(request.location.lat()),
        OrderedFloat(request.location.lon()),
        request.start,
        request.end,
    )
}

/// Wraps a provider and keeps every fetched [`ParameterSet`] in memory, keyed by the full request.
///
/// Each caller receives its own clone, so requests for different points or ranges never
/// see each other's data.
///
/// Entries are never evicted. A long-running service queried for arbitrary points should
/// call [`CachedProvider::clear`] periodically to bound memory.
pub struct CachedProvider<P> {
    inner: P,
    cache: Mutex<HashMap<CacheKey, ParameterSet>>,
}

impl<P> CachedProvider<P> {
    pub fn new(inner: P) -> Self {
        Self {
            inner,
            cache: Mutex::new(HashMap::new()),
        }
    }

    pub fn inner(&self) -> &P {
        &self.inner
    }

    pub async fn len(&self) -> usize {
        self.cache.lock().await.len()
    }

    pub async fn is_empty(&self) -> bool {
        self.cache.lock().await.is_empty()
    }

    pub async fn clear(&self) {
        self.cache.lock().await.clear();
    }
}

impl<P: DailyProvider + Sync> DailyProvider for CachedProvider<P> {
    fn source_name(&self) -> &str {
        self.inner.source_name()
    }

    async fn fetch_daily(&self, request: FetchRequest) -> Result<ParameterSet, FetchError> {
        let key = cache_key(&request);

        {
            let cache = self.cache.lock().await;
            if let Some(cached) = cache.get(&key) {
                debug!("Cache hit for {:?}", request);
                return Ok(cached.clone());
            }
        }

        // The lock is not held during the download.
        let fetched = self.inner.fetch_daily(request).await?;

        let mut cache = self.cache.lock().await;
        match cache.entry(key) {
            // Another request for the same key finished first; keep its copy.
            Entry::Occupied(entry) => Ok(entry.get().clone()),
            Entry::Vacant(entry) => {
                entry.insert(fetched.clone());
                Ok(fetched)
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::lat_lon::LatLon;
    use crate::types::series::DailySeries;
    use chrono::NaiveDate;
    use std::sync::atomic::{AtomicUsize, Ordering};

    /// Returns a set whose single value encodes the request's latitude.
    struct CountingProvider {
        calls: AtomicUsize,
    }

    impl DailyProvider for CountingProvider {
        fn source_name(&self) -> &str {
            "counting"
        }

        async fn fetch_daily(&self, request: FetchRequest) -> Result<ParameterSet, FetchError> {
            self.calls.fetch_add(1, Ordering::SeqCst);
            let mut set = ParameterSet::new();
            set.insert(
                "T2M",
                [(request.end, request.location.lat())].into_iter().collect::<DailySeries>(),
            );
            Ok(set)
        }
    }

    struct FailingProvider;

    impl DailyProvider for FailingProvider {
        fn source_name(&self) -> &str {
            "failing"
        }

        async fn fetch_daily(&self, _request: FetchRequest) -> Result<ParameterSet, FetchError> {
            Err(FetchError::Provider {
                provider: "failing".to_string(),
                message: "offline".to_string(),
            })
        }
    }

    fn request(lat: f64, end_day: u32) -> FetchRequest {
        FetchRequest::new(
            LatLon::new(lat, 10.0).unwrap(),
            NaiveDate::from_ymd_opt(2000, 1, 1).unwrap(),
            NaiveDate::from_ymd_opt(2020, 7, end_day).unwrap(),
        )
    }

    #[tokio::test]
    async fn test_second_fetch_is_served_from_cache() -> Result<(), FetchError> {
        let provider = CachedProvider::new(CountingProvider {
            calls: AtomicUsize::new(0),
        });

        let first = provider.fetch_daily(request(50.0, 15)).await?;
        let second = provider.fetch_daily(request(50.0, 15)).await?;

        assert_eq!(first, second);
        assert_eq!(provider.inner().calls.load(Ordering::SeqCst), 1);
        assert_eq!(provider.len().await, 1);
        assert_eq!(provider.source_name(), "counting");
        Ok(())
    }

    #[tokio::test]
    async fn test_requests_are_isolated_by_key() -> Result<(), FetchError> {
        let provider = CachedProvider::new(CountingProvider {
            calls: AtomicUsize::new(0),
        });

        let north = provider.fetch_daily(request(50.0, 15)).await?;
        let south = provider.fetch_daily(request(-50.0, 15)).await?;
        let other_day = provider.fetch_daily(request(50.0, 16)).await?;

        assert_ne!(north, south);
        assert_ne!(north, other_day);
        assert_eq!(provider.inner().calls.load(Ordering::SeqCst), 3);
        assert_eq!(provider.len().await, 3);

        provider.clear().await;
        assert!(provider.is_empty().await);
        Ok(())
    }

    #[tokio::test]
    async fn test_concurrent_requests_get_their_own_data() -> Result<(), FetchError> {
        let provider = CachedProvider::new(CountingProvider {
            calls: AtomicUsize::new(0),
        });

        let (a, b) = tokio::join!(
            provider.fetch_daily(request(10.0, 15)),
            provider.fetch_daily(request(20.0, 15))
        );
        let date = NaiveDate::from_ymd_opt(2020, 7, 15).unwrap();
        assert_eq!(a?.get("T2M").unwrap().get(date), Some(10.0));
        assert_eq!(b?.get("T2M").unwrap().get(date), Some(20.0));
        Ok(())
    }

    #[tokio::test]
    async fn test_errors_are_not_cached() {
        let provider = CachedProvider::new(FailingProvider);
        assert!(provider.fetch_daily(request(0.0, 15)).await.is_err());
        assert!(provider.is_empty().await);
    }
}
