use serde::ser::{Serialize, SerializeTuple, Serializer};

/// Punto de la capa de calor; se envía al mapa como `[lat, lng, intensity]`
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct HeatPoint {
    pub lat: f64,
    pub lng: f64,
    pub intensity: f64,
}

impl HeatPoint {
    pub const fn new(lat: f64, lng: f64, intensity: f64) -> Self {
        Self { lat, lng, intensity }
    }
}

impl Serialize for HeatPoint {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let mut tuple = serializer.serialize_tuple(3)?;
        tuple.serialize_element(&self.lat)?;
        tuple.serialize_element(&self.lng)?;
        tuple.serialize_element(&self.intensity)?;
        tuple.end()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_heat_point_serializes_as_triple() {
        let json = serde_json::to_string(&HeatPoint::new(55.6184, 12.0796, 0.5)).unwrap();
        assert_eq!(json, "[55.6184,12.0796,0.5]");
    }
}
