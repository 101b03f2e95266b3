//! ECG sample document loading.
//!
//! A sample document is a JSON object with a `data` array whose elements each carry an
//! `ecg.Samples` array. The player consumes the concatenation of every `Samples` array.
//! Documents are read from a local path or fetched over HTTP(S).

pub mod document;

pub use document::parse_samples;

use std::path::PathBuf;
use thiserror::Error;

/// Failures while obtaining a sample buffer.
#[derive(Debug, Error)]
pub enum SourceError {
    #[error("failed to read {path}: {source}")]
    Read {
        path: PathBuf,
        source: std::io::Error,
    },
    #[error("failed to fetch {url}: {source}")]
    Fetch { url: String, source: reqwest::Error },
    #[error("{url} responded with HTTP {status}")]
    Status { url: String, status: u16 },
    #[error("malformed sample document: {0}")]
    Parse(#[from] serde_json::Error),
    #[error("sample document contains no samples")]
    Empty,
}

/// Where the sample document lives.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SampleSource {
    File(PathBuf),
    Url(String),
}

impl SampleSource {
    /// Interprets `location` as a URL when it has an http(s) scheme, otherwise as a path.
    pub fn parse(location: &str) -> Self {
        let trimmed = location.trim();
        if trimmed.starts_with("http://") || trimmed.starts_with("https://") {
            Self::Url(trimmed.to_string())
        } else {
            Self::File(PathBuf::from(trimmed))
        }
    }

    /// Reads the document and returns its flattened samples.
    ///
    /// # Errors
    /// - If the file cannot be read or the request fails
    /// - If the server answers with a non-success status
    /// - If the JSON does not match the sample document layout
    /// - If the document holds no samples at all
    pub async fn fetch(&self) -> Result<Vec<f64>, SourceError> {
        let body = match self {
            Self::File(path) => {
                tracing::debug!("Reading samples from {}", path.display());
                tokio::fs::read_to_string(path)
                    .await
                    .map_err(|source| SourceError::Read {
                        path: path.clone(),
                        source,
                    })?
            }
            Self::Url(url) => {
                tracing::debug!("Fetching samples from {}", url);
                let response =
                    reqwest::get(url)
                        .await
                        .map_err(|source| SourceError::Fetch {
                            url: url.clone(),
                            source,
                        })?;
                let status = response.status();
                if !status.is_success() {
                    return Err(SourceError::Status {
                        url: url.clone(),
                        status: status.as_u16(),
                    });
                }
                response.text().await.map_err(|source| SourceError::Fetch {
                    url: url.clone(),
                    source,
                })?
            }
        };

        let samples = parse_samples(&body)?;
        if samples.is_empty() {
            return Err(SourceError::Empty);
        }
        tracing::info!("Loaded {} samples from {}", samples.len(), self);
        Ok(samples)
    }
}

impl std::fmt::Display for SampleSource {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::File(path) => write!(f, "{}", path.display()),
            Self::Url(url) => write!(f, "{url}"),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_location() {
        assert_eq!(
            SampleSource::parse("https://example.com/ecgData.json"),
            SampleSource::Url("https://example.com/ecgData.json".to_string())
        );
        assert_eq!(
            SampleSource::parse(" demos/ecgData.json "),
            SampleSource::File(PathBuf::from("demos/ecgData.json"))
        );
    }

    #[tokio::test]
    async fn test_fetch_from_file() {
        let path = std::env::temp_dir().join(format!("ecgview-source-{}.json", std::process::id()));
        std::fs::write(
            &path,
            r#"{"data":[{"ecg":{"Samples":[1,2]}},{"ecg":{"Samples":[3]}}]}"#,
        )
        .unwrap();

        let samples = SampleSource::File(path.clone()).fetch().await.unwrap();
        std::fs::remove_file(&path).unwrap();

        assert_eq!(samples, vec![1.0, 2.0, 3.0]);
    }

    #[tokio::test]
    async fn test_fetch_missing_file() {
        let source = SampleSource::File(PathBuf::from("/nonexistent/ecgview/ecgData.json"));
        assert!(matches!(source.fetch().await, Err(SourceError::Read { .. })));
    }

    #[tokio::test]
    async fn test_fetch_rejects_document_without_samples() {
        let path = std::env::temp_dir().join(format!("ecgview-empty-{}.json", std::process::id()));
        std::fs::write(&path, r#"{"data":[{"ecg":{"Samples":[]}}]}"#).unwrap();

        let result = SampleSource::File(path.clone()).fetch().await;
        std::fs::remove_file(&path).unwrap();

        assert!(matches!(result, Err(SourceError::Empty)));
    }
}
