use serde::{Deserialize, Serialize};

/// Tipo de reporte (hoy solo basura)
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum ReportKind {
    #[default]
    Trash,
}

/// Reporte de basura marcado en el mapa por un visitante
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Report {
    pub id: String,
    pub lat: f64,
    pub lng: f64,
    #[serde(rename = "type", default)]
    pub kind: ReportKind,
    /// Epoch en milisegundos
    pub t: i64,
}

impl Report {
    /// Edad del reporte respecto a `now_ms` (negativa si viene del futuro).
    /// Satura con `t` corruptos en storage.
    pub fn age_ms(&self, now_ms: i64) -> i64 {
        now_ms.saturating_sub(self.t)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_report_wire_format() {
        let report = Report {
            id: "1700000000000-ab12c".to_string(),
            lat: 55.6173,
            lng: 12.0784,
            kind: ReportKind::Trash,
            t: 1_700_000_000_000,
        };
        let json = serde_json::to_value(&report).unwrap();
        assert_eq!(json["type"], "trash");
        assert_eq!(json["t"], 1_700_000_000_000i64);
        assert!(json.get("kind").is_none());
    }

    #[test]
    fn test_report_without_type_defaults_to_trash() {
        let report: Report =
            serde_json::from_str(r#"{"id":"x","lat":1.0,"lng":2.0,"t":5}"#).unwrap();
        assert_eq!(report.kind, ReportKind::Trash);
    }

    #[test]
    fn test_age_saturates_on_extreme_times() {
        let mut report: Report =
            serde_json::from_str(r#"{"id":"x","lat":1.0,"lng":2.0,"t":5}"#).unwrap();
        assert_eq!(report.age_ms(10), 5);
        assert_eq!(report.age_ms(0), -5);

        report.t = i64::MIN;
        assert_eq!(report.age_ms(1_720_000_000_000), i64::MAX);
        report.t = i64::MAX;
        assert_eq!(report.age_ms(-10), i64::MIN);
    }
}
