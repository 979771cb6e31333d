// ============================================================================
// DATASET SERVICE - SOLO carga de data.json (stateless)
// ============================================================================

use std::fmt;

use gloo_net::http::Request;

use crate::models::Dataset;

#[derive(Debug, Clone, PartialEq)]
pub enum DatasetError {
    Network(String),
    Http { status: u16, status_text: String },
    Parse(String),
}

impl fmt::Display for DatasetError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            DatasetError::Network(msg) => write!(f, "Network error: {}", msg),
            DatasetError::Http { status, status_text } => {
                write!(f, "HTTP {}: {}", status, status_text)
            }
            DatasetError::Parse(msg) => write!(f, "Parse error: {}", msg),
        }
    }
}

impl std::error::Error for DatasetError {}

pub async fn fetch_dataset(url: &str) -> Result<Dataset, DatasetError> {
    log::info!("📥 [DATA] Cargando {}", url);

    let response = Request::get(url)
        .send()
        .await
        .map_err(|e| DatasetError::Network(e.to_string()))?;

    if !response.ok() {
        return Err(DatasetError::Http {
            status: response.status(),
            status_text: response.status_text(),
        });
    }

    let body = response
        .text()
        .await
        .map_err(|e| DatasetError::Network(e.to_string()))?;
    let dataset = parse_dataset(&body)?;
    log::info!("✅ [DATA] {} puestos cargados", dataset.stalls.len());
    Ok(dataset)
}

pub fn parse_dataset(body: &str) -> Result<Dataset, DatasetError> {
    serde_json::from_str(body).map_err(|e| DatasetError::Parse(e.to_string()))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_dataset_rejects_missing_meta() {
        let err = parse_dataset(r#"{"stalls": []}"#).unwrap_err();
        assert!(matches!(err, DatasetError::Parse(_)));
    }

    #[test]
    fn test_parse_dataset_accepts_empty_stalls() {
        let dataset =
            parse_dataset(r#"{"meta": {"co2GoalPerMealKg": 2.0}, "stalls": []}"#).unwrap();
        assert!(dataset.stalls.is_empty());
        assert_eq!(dataset.co2_goal(), 2.0);
    }
}
