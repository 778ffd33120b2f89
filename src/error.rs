use crate::power::error::FetchError;
use crate::types::error::{InputError, SeriesError};
use thiserror::Error;

#[derive(Debug, Error)]
pub enum ClimatologyError {
    #[error(transparent)]
    Input(#[from] InputError),

    #[error(transparent)]
    Fetch(#[from] FetchError),

    /// Lets callers building their own series with `?` share this error type.
    #[error(transparent)]
    Series(#[from] SeriesError),
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::power::provider::DailyProvider;
    use crate::types::series::DailySeries;

    fn parse_own_series() -> Result<DailySeries, ClimatologyError> {
        Ok(DailySeries::parse_entries("T2M", [("2020-07-15", 1.0)])?)
    }

    #[test]
    fn test_series_errors_convert_for_callers() {
        assert!(matches!(
            parse_own_series(),
            Err(ClimatologyError::Series(SeriesError::InvalidDateKey { .. }))
        ));
    }

    struct OfflineProvider;

    impl DailyProvider for OfflineProvider {
        fn source_name(&self) -> &str {
            "offline"
        }

        async fn fetch_daily(
            &self,
            _request: crate::power::provider::FetchRequest,
        ) -> Result<crate::types::series::ParameterSet, FetchError> {
            Err(FetchError::Provider {
                provider: self.source_name().to_string(),
                message: "no connection".to_string(),
            })
        }
    }

    #[tokio::test]
    async fn test_custom_provider_failure_reaches_caller() {
        let client = crate::climatology::Climatology::with_provider(OfflineProvider);
        let result = client
            .likelihood()
            .location(crate::types::lat_lon::LatLon::new(0.0, 0.0).unwrap())
            .date("07/15/2020")
            .call()
            .await;
        let err = result.unwrap_err();
        assert!(matches!(
            err,
            ClimatologyError::Fetch(FetchError::Provider { ref provider, .. }) if provider == "offline"
        ));
        assert_eq!(err.to_string(), "Provider 'offline' failed: no connection");
    }
}
