//! Serde layout of the sample document.

use serde::Deserialize;

/// Top-level document: `{"data": [...]}`.
#[derive(Debug, Deserialize)]
pub struct EcgDocument {
    pub data: Vec<EcgRecord>,
}

/// One record of the `data` array.
#[derive(Debug, Deserialize)]
pub struct EcgRecord {
    pub ecg: EcgReading,
}

#[derive(Debug, Deserialize)]
pub struct EcgReading {
    #[serde(rename = "Samples")]
    pub samples: Vec<f64>,
}

impl EcgDocument {
    /// Concatenates every record's samples in document order.
    pub fn into_samples(self) -> Vec<f64> {
        self.data
            .into_iter()
            .flat_map(|record| record.ecg.samples)
            .collect()
    }
}

/// Parses a sample document and flattens it into a single buffer.
pub fn parse_samples(json: &str) -> Result<Vec<f64>, serde_json::Error> {
    let document: EcgDocument = serde_json::from_str(json)?;
    Ok(document.into_samples())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_flattens_in_document_order() {
        let json = r#"{
            "data": [
                {"ecg": {"Samples": [0.1, -0.2]}},
                {"ecg": {"Samples": []}},
                {"ecg": {"Samples": [3, 4.5]}}
            ]
        }"#;
        assert_eq!(parse_samples(json).unwrap(), vec![0.1, -0.2, 3.0, 4.5]);
    }

    #[test]
    fn test_ignores_unknown_fields() {
        let json = r#"{
            "device": "chest-strap",
            "data": [{"timestamp": 1, "ecg": {"Samples": [7], "SampleRate": 130}}]
        }"#;
        assert_eq!(parse_samples(json).unwrap(), vec![7.0]);
    }

    #[test]
    fn test_demo_document() {
        let samples = parse_samples(include_str!("../../demos/ecgData.json")).unwrap();
        assert_eq!(samples.len(), 6 * 260);
        assert!(samples.iter().all(|s| s.is_finite()));
    }

    #[test]
    fn test_rejects_record_without_ecg() {
        assert!(parse_samples(r#"{"data":[{"hr":60}]}"#).is_err());
        assert!(parse_samples(r#"{"data":[{"ecg":{"Samples":["a"]}}]}"#).is_err());
        assert!(parse_samples("not json").is_err());
    }
}
