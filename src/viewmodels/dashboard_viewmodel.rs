// ============================================================================
// DASHBOARD VIEWMODEL - Totales para el organizador
// ============================================================================

use crate::models::{DashboardTotals, Stall};

pub struct DashboardViewModel;

impl DashboardViewModel {
    /// None si no hay puestos (no hay media que mostrar)
    pub fn compute_totals(stalls: &[Stall], co2_goal: f64) -> Option<DashboardTotals> {
        if stalls.is_empty() {
            return None;
        }

        let count = stalls.len();
        let sum_co2: f64 = stalls.iter().map(|s| s.co2_per_meal_kg).sum();
        let sum_organic: f64 = stalls.iter().map(|s| s.organic_pct).sum();
        let under_goal = stalls.iter().filter(|s| s.meets_co2_goal(co2_goal)).count();

        Some(DashboardTotals {
            avg_co2: format!("{:.2}", sum_co2 / count as f64),
            avg_organic: (sum_organic / count as f64).round() as i64,
            goal: co2_goal,
            count,
            under_goal,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn stall(co2: f64, organic: f64) -> Stall {
        Stall {
            id: format!("s-{}", co2),
            name: "Bod".to_string(),
            coords: [55.0, 12.0],
            food_type: String::new(),
            energy: String::new(),
            co2_per_meal_kg: co2,
            organic_pct: organic,
            local_pct: 0.0,
            food_waste_pct: 0.0,
            donates_surplus: false,
            waste_fractions: vec![],
            likes: 0,
        }
    }

    #[test]
    fn test_totals_for_three_stalls() {
        let stalls = vec![stall(1.0, 50.0), stall(2.0, 60.0), stall(3.0, 75.0)];
        let totals = DashboardViewModel::compute_totals(&stalls, 2.0).unwrap();
        assert_eq!(totals.avg_co2, "2.00");
        assert_eq!(totals.under_goal, 2);
        assert_eq!(totals.count, 3);
        assert_eq!(totals.goal, 2.0);
        // 185 / 3 = 61.67
        assert_eq!(totals.avg_organic, 62);
    }

    #[test]
    fn test_avg_co2_keeps_two_decimals() {
        let stalls = vec![stall(0.5, 0.0), stall(1.25, 0.0)];
        let totals = DashboardViewModel::compute_totals(&stalls, 1.0).unwrap();
        assert_eq!(totals.avg_co2, "0.88");
        assert_eq!(totals.under_goal, 1);
    }

    #[test]
    fn test_empty_dataset_has_no_totals() {
        assert_eq!(DashboardViewModel::compute_totals(&[], 2.0), None);
    }
}
