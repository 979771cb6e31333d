use serde::{Deserialize, Serialize};

/// Puesto de comida del festival (datos estáticos de data.json)
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Stall {
    pub id: String,
    pub name: String,
    pub coords: [f64; 2], // [lat, lng]
    #[serde(default)]
    pub food_type: String,
    #[serde(default)]
    pub energy: String,
    pub co2_per_meal_kg: f64,
    #[serde(default)]
    pub organic_pct: f64,
    #[serde(default)]
    pub local_pct: f64,
    #[serde(default)]
    pub food_waste_pct: f64,
    #[serde(default)]
    pub donates_surplus: bool,
    #[serde(default)]
    pub waste_fractions: Vec<String>,
    // Contador de sesión: nunca se escribe de vuelta al dataset
    #[serde(default)]
    pub likes: u32,
}

impl Stall {
    pub fn meets_co2_goal(&self, goal_kg: f64) -> bool {
        self.co2_per_meal_kg <= goal_kg
    }
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DatasetMeta {
    pub co2_goal_per_meal_kg: f64,
}

/// Contenido completo de data.json
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Dataset {
    pub meta: DatasetMeta,
    #[serde(default)]
    pub stalls: Vec<Stall>,
}

impl Dataset {
    pub fn stall(&self, id: &str) -> Option<&Stall> {
        self.stalls.iter().find(|s| s.id == id)
    }

    pub fn stall_mut(&mut self, id: &str) -> Option<&mut Stall> {
        self.stalls.iter_mut().find(|s| s.id == id)
    }

    pub fn co2_goal(&self) -> f64 {
        self.meta.co2_goal_per_meal_kg
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const SAMPLE: &str = r#"{
        "meta": { "co2GoalPerMealKg": 1.5 },
        "stalls": [
            {
                "id": "s1",
                "name": "Grøn Grill",
                "coords": [55.6181, 12.0790],
                "foodType": "Vegetar",
                "energy": "Biogas",
                "co2PerMealKg": 0.9,
                "organicPct": 80,
                "localPct": 65,
                "foodWastePct": 4,
                "donatesSurplus": true,
                "wasteFractions": ["Mad", "Pap"],
                "likes": 12
            },
            {
                "id": "s2",
                "name": "Burger Bod",
                "coords": [55.6170, 12.0770],
                "co2PerMealKg": 2.4
            }
        ]
    }"#;

    #[test]
    fn test_dataset_parses_camel_case_and_defaults() {
        let dataset: Dataset = serde_json::from_str(SAMPLE).unwrap();
        assert_eq!(dataset.co2_goal(), 1.5);
        assert_eq!(dataset.stalls.len(), 2);

        let grill = dataset.stall("s1").unwrap();
        assert_eq!(grill.food_type, "Vegetar");
        assert_eq!(grill.waste_fractions, vec!["Mad", "Pap"]);
        assert_eq!(grill.likes, 12);
        assert!(grill.meets_co2_goal(dataset.co2_goal()));

        let burger = dataset.stall("s2").unwrap();
        assert!(burger.waste_fractions.is_empty());
        assert_eq!(burger.likes, 0);
        assert!(!burger.meets_co2_goal(dataset.co2_goal()));
    }

    #[test]
    fn test_unknown_stall_lookup() {
        let mut dataset: Dataset = serde_json::from_str(SAMPLE).unwrap();
        assert!(dataset.stall("nope").is_none());
        assert!(dataset.stall_mut("nope").is_none());
    }
}
