use log::info;
use std::fs;
use std::path::Path;

use crate::error::Result;
use crate::schema::Deal;

/// Deserializes a deal collection from a JSON array.
///
/// The expected shape matches the exporting CRM (camelCase keys, logistics
/// optional per deal). Malformed dates fail here rather than propagating
/// into the report arithmetic.
pub fn load_deals_from_json(json: &str) -> Result<Vec<Deal>> {
    let deals: Vec<Deal> = serde_json::from_str(json)?;
    info!("Loaded {} deals from JSON", deals.len());
    Ok(deals)
}

pub fn load_deals_from_file<P: AsRef<Path>>(path: P) -> Result<Vec<Deal>> {
    let contents = fs::read_to_string(path)?;
    load_deals_from_json(&contents)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::ReportError;

    #[test]
    fn test_load_deals_from_json() {
        let json = r#"[
            {
                "id": "deal-0",
                "closeDate": "2025-03-01",
                "title": "Deal",
                "contact": { "id": "c-0", "name": "Client", "phone": "+7 999 000 0000" },
                "manager": "M1",
                "containers": []
            }
        ]"#;

        let deals = load_deals_from_json(json).unwrap();
        assert_eq!(deals.len(), 1);
        assert!(deals[0].logistics.is_none());
        assert!(deals[0].containers.is_empty());
    }

    #[test]
    fn test_malformed_date_is_rejected() {
        let json = r#"[
            {
                "id": "deal-0",
                "closeDate": "01.03.2025",
                "title": "Deal",
                "contact": { "id": "c-0", "name": "Client", "phone": "+7 999 000 0000" },
                "manager": "M1",
                "containers": []
            }
        ]"#;

        let err = load_deals_from_json(json).unwrap_err();
        assert!(matches!(err, ReportError::SerializationError(_)));
    }
}
