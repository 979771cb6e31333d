use crate::models::Stall;

/// Datos ya preparados para el modal de un puesto
#[derive(Clone, Debug, PartialEq)]
pub struct StallDetail {
    pub stall: Stall,
    pub co2_goal: f64,
    pub meets_co2_goal: bool,
    pub organic_width: f64,
    pub local_width: f64,
    pub already_liked: bool,
}

pub struct StallViewModel;

impl StallViewModel {
    pub fn detail(stall: &Stall, co2_goal: f64, already_liked: bool) -> StallDetail {
        StallDetail {
            stall: stall.clone(),
            co2_goal,
            meets_co2_goal: stall.meets_co2_goal(co2_goal),
            organic_width: clamp_pct(stall.organic_pct),
            local_width: clamp_pct(stall.local_pct),
            already_liked,
        }
    }

    pub fn like_label(already_liked: bool) -> &'static str {
        if already_liked {
            "👍 Liked"
        } else {
            "👍 Like"
        }
    }
}

/// Ancho de barra de progreso en 0..=100
fn clamp_pct(value: f64) -> f64 {
    if value.is_nan() {
        return 0.0;
    }
    value.clamp(0.0, 100.0)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn stall() -> Stall {
        Stall {
            id: "s1".to_string(),
            name: "Grøn Grill".to_string(),
            coords: [55.6181, 12.079],
            food_type: "Vegetar".to_string(),
            energy: "Biogas".to_string(),
            co2_per_meal_kg: 1.5,
            organic_pct: 130.0,
            local_pct: -5.0,
            food_waste_pct: 4.0,
            donates_surplus: true,
            waste_fractions: vec!["Mad".to_string()],
            likes: 2,
        }
    }

    #[test]
    fn test_progress_widths_are_clamped() {
        let detail = StallViewModel::detail(&stall(), 1.5, false);
        assert_eq!(detail.organic_width, 100.0);
        assert_eq!(detail.local_width, 0.0);
        assert_eq!(clamp_pct(f64::NAN), 0.0);
    }

    #[test]
    fn test_goal_is_inclusive() {
        assert!(StallViewModel::detail(&stall(), 1.5, false).meets_co2_goal);
        assert!(!StallViewModel::detail(&stall(), 1.49, false).meets_co2_goal);
    }

    #[test]
    fn test_like_label() {
        assert_eq!(StallViewModel::like_label(true), "👍 Liked");
        assert_eq!(StallViewModel::like_label(false), "👍 Like");
    }
}
