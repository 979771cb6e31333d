// ============================================================================
// HEAT VIEWMODEL - Reportes recientes → puntos de calor
// ============================================================================

use std::collections::HashMap;

use crate::models::{HeatPoint, Report};

/// Puntos de demo para no mostrar un mapa vacío la primera vez
pub const FALLBACK_HEAT_POINTS: [HeatPoint; 3] = [
    HeatPoint::new(55.6184, 12.0796, 0.5),
    HeatPoint::new(55.6179, 12.0745, 0.7),
    HeatPoint::new(55.6169, 12.0812, 0.4),
];

pub struct HeatViewModel;

impl HeatViewModel {
    /// Agrupa por coordenada redondeada a 5 decimales (~1 m) y normaliza por el grupo mayor.
    /// El orden de salida no está definido.
    pub fn compute_heat_points(reports: &[Report], now_ms: i64, window_ms: i64) -> Vec<HeatPoint> {
        let mut counts: HashMap<(String, String), u32> = HashMap::new();
        for report in reports.iter().filter(|r| r.age_ms(now_ms) < window_ms) {
            let key = (format!("{:.5}", report.lat), format!("{:.5}", report.lng));
            *counts.entry(key).or_insert(0) += 1;
        }

        if counts.is_empty() {
            return FALLBACK_HEAT_POINTS.to_vec();
        }

        let max = counts.values().copied().max().unwrap_or(1).max(1) as f64;
        counts
            .into_iter()
            .filter_map(|((lat, lng), count)| {
                let lat = lat.parse::<f64>().ok()?;
                let lng = lng.parse::<f64>().ok()?;
                Some(HeatPoint::new(lat, lng, round_to(count as f64 / max, 2)))
            })
            .collect()
    }
}

fn round_to(value: f64, decimals: i32) -> f64 {
    let factor = 10f64.powi(decimals);
    (value * factor).round() / factor
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::ReportKind;

    const HOUR_MS: i64 = 60 * 60 * 1000;
    const WINDOW: i64 = 24 * HOUR_MS;
    const NOW: i64 = 1_720_000_000_000;

    fn report(lat: f64, lng: f64, t: i64) -> Report {
        Report { id: format!("{}-x", t), lat, lng, kind: ReportKind::Trash, t }
    }

    fn sorted(mut points: Vec<HeatPoint>) -> Vec<HeatPoint> {
        points.sort_by(|a, b| a.lat.total_cmp(&b.lat).then(a.lng.total_cmp(&b.lng)));
        points
    }

    #[test]
    fn test_no_reports_gives_fallback() {
        let points = HeatViewModel::compute_heat_points(&[], NOW, WINDOW);
        assert_eq!(points, FALLBACK_HEAT_POINTS.to_vec());
        let intensities: Vec<f64> = points.iter().map(|p| p.intensity).collect();
        assert_eq!(intensities, vec![0.5, 0.7, 0.4]);
    }

    #[test]
    fn test_same_rounded_coordinate_collapses_to_one_point() {
        let reports = vec![
            report(55.618_401, 12.079_601, NOW - 10),
            report(55.618_404, 12.079_599, NOW - 20),
            report(55.618_400, 12.079_600, NOW - 30),
        ];
        let points = HeatViewModel::compute_heat_points(&reports, NOW, WINDOW);
        assert_eq!(points, vec![HeatPoint::new(55.6184, 12.0796, 1.0)]);
    }

    #[test]
    fn test_old_reports_are_excluded() {
        let reports = vec![
            report(55.6, 12.0, NOW - WINDOW),      // justo 24h: fuera
            report(55.7, 12.1, NOW - 25 * HOUR_MS),
        ];
        let points = HeatViewModel::compute_heat_points(&reports, NOW, WINDOW);
        assert_eq!(points, FALLBACK_HEAT_POINTS.to_vec());

        let reports = vec![
            report(55.6, 12.0, NOW - WINDOW + 1),
            report(55.7, 12.1, NOW - 25 * HOUR_MS),
        ];
        let points = HeatViewModel::compute_heat_points(&reports, NOW, WINDOW);
        assert_eq!(points, vec![HeatPoint::new(55.6, 12.0, 1.0)]);
    }

    #[test]
    fn test_intensity_is_relative_to_busiest_spot() {
        let mut reports = vec![report(55.1, 12.1, NOW - 1); 3];
        reports.push(report(55.2, 12.2, NOW - 1));
        reports.extend(vec![report(55.3, 12.3, NOW - 1); 2]);

        let points = sorted(HeatViewModel::compute_heat_points(&reports, NOW, WINDOW));
        assert_eq!(
            points,
            vec![
                HeatPoint::new(55.1, 12.1, 1.0),
                HeatPoint::new(55.2, 12.2, 0.33),
                HeatPoint::new(55.3, 12.3, 0.67),
            ]
        );
        assert!(points.iter().all(|p| (0.0..=1.0).contains(&p.intensity)));
    }
}
