//! Dataset loading from local files or http(s) URLs.

use anyhow::Context;
use log::info;
use rain_core::Dataset;
use std::time::Duration;

pub fn is_url(source: &str) -> bool {
    source.starts_with("http://") || source.starts_with("https://")
}

/// Read `source` and validate it as a chart dataset.
///
/// URLs are fetched with `reqwest`; anything else is read as a file. Either
/// way the body may be plain or gzip-compressed JSON.
pub async fn load_dataset(source: &str) -> anyhow::Result<Dataset> {
    let bytes = if is_url(source) {
        let client = reqwest::Client::builder()
            .timeout(Duration::from_secs(60))
            .build()?;
        let response = client.get(source).send().await?;
        if !response.status().is_success() {
            anyhow::bail!("Bad response for {}: {}", source, response.status());
        }
        response.bytes().await?.to_vec()
    } else {
        tokio::fs::read(source)
            .await
            .with_context(|| format!("Failed to read {}", source))?
    };
    info!("Read {} bytes from {}", bytes.len(), source);

    Dataset::from_bytes(&bytes).with_context(|| format!("Invalid rainfall dataset in {}", source))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_data::DATASET_JSON;

    #[test]
    fn test_is_url() {
        assert!(is_url("https://example.com/rain.json"));
        assert!(is_url("http://localhost:8080/rain.json.gz"));
        assert!(!is_url("./rain.json"));
        assert!(!is_url("/tmp/https.json"));
    }

    #[tokio::test]
    async fn test_load_from_file() {
        let path = std::env::temp_dir().join(format!("rain-cmd-load-{}.json", std::process::id()));
        tokio::fs::write(&path, DATASET_JSON).await.unwrap();

        let dataset = load_dataset(path.to_str().unwrap()).await.unwrap();
        tokio::fs::remove_file(&path).await.unwrap();

        assert_eq!(dataset.series().len(), 3);
        assert_eq!(dataset.current().id.to_string(), "2024");
    }

    #[tokio::test]
    async fn test_missing_file_names_the_path() {
        let err = load_dataset("/nonexistent/rain.json").await.unwrap_err();
        assert!(err.to_string().contains("/nonexistent/rain.json"));
    }
}
