//! Local catalog override.
//!
//! A locally stored JSON blob can substitute the catalog wholesale, the
//! way the original site let a stored dataset shadow its built-in one.
//! Malformed content is never an error: it is ignored and loading falls
//! through to the next source.

use std::path::Path;

use tracing::warn;

use crate::domain::Offering;

use super::wire::{OfferingDto, convert_catalog};

/// Parse an override blob into offerings.
///
/// Returns `None` when the blob is not a JSON array of offering records;
/// the caller treats that as "no override". A valid array with some
/// invalid records keeps the valid ones.
pub fn parse_override(blob: &str) -> Option<Vec<Offering>> {
    let value: serde_json::Value = match serde_json::from_str(blob) {
        Ok(v) => v,
        Err(e) => {
            warn!(error = %e, "override blob is not valid JSON, ignoring");
            return None;
        }
    };

    if !value.is_array() {
        warn!("override blob is not an array, ignoring");
        return None;
    }

    let dtos: Vec<OfferingDto> = match serde_json::from_value(value) {
        Ok(dtos) => dtos,
        Err(e) => {
            warn!(error = %e, "override blob has unexpected shape, ignoring");
            return None;
        }
    };

    Some(convert_catalog(&dtos))
}

/// Read and parse an override file, if present and well-formed.
pub async fn read_override(path: &Path) -> Option<Vec<Offering>> {
    let blob = match tokio::fs::read_to_string(path).await {
        Ok(blob) => blob,
        Err(e) => {
            warn!(path = %path.display(), error = %e, "cannot read override file, ignoring");
            return None;
        }
    };

    parse_override(&blob)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    const VALID_BLOB: &str = r#"[{
        "id": "F1",
        "originCode": "DEL",
        "originName": "Delhi",
        "destinationCode": "BOM",
        "destinationName": "Mumbai",
        "departAt": "2025-06-01T06:00:00Z",
        "arriveAt": "2025-06-01T08:15:00Z",
        "stops": 0,
        "carrier": "IndiGo",
        "price": 4500
    }]"#;

    #[test]
    fn parses_valid_blob() {
        let offerings = parse_override(VALID_BLOB).unwrap();
        assert_eq!(offerings.len(), 1);
        assert_eq!(offerings[0].id, "F1");
    }

    #[test]
    fn rejects_non_json() {
        assert!(parse_override("not json at all").is_none());
    }

    #[test]
    fn rejects_non_array() {
        assert!(parse_override(r#"{"offerings": []}"#).is_none());
        assert!(parse_override("42").is_none());
        assert!(parse_override("null").is_none());
    }

    #[test]
    fn rejects_wrong_element_shape() {
        assert!(parse_override(r#"[{"foo": "bar"}]"#).is_none());
        assert!(parse_override(r#"[1, 2, 3]"#).is_none());
    }

    #[test]
    fn empty_array_is_a_valid_empty_override() {
        let offerings = parse_override("[]").unwrap();
        assert!(offerings.is_empty());
    }

    #[tokio::test]
    async fn reads_override_file() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        file.write_all(VALID_BLOB.as_bytes()).unwrap();

        let offerings = read_override(file.path()).await.unwrap();
        assert_eq!(offerings.len(), 1);
    }

    #[tokio::test]
    async fn missing_file_is_no_override() {
        assert!(
            read_override(Path::new("/nonexistent/override.json"))
                .await
                .is_none()
        );
    }
}
