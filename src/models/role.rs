use serde::{Deserialize, Serialize};

/// Modo de visibilidad de la UI (sin validación en servidor)
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum Role {
    #[default]
    Guest,
    Volunteer,
    Organizer,
}

/// Qué controles están visibles para un rol
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct RoleVisibility {
    pub heat_toggle: bool,
    pub report_button: bool,
    pub dashboard: bool,
    pub export: bool,
}

impl Role {
    pub const ALL: [Role; 3] = [Role::Guest, Role::Volunteer, Role::Organizer];

    pub fn as_str(&self) -> &'static str {
        match self {
            Role::Guest => "guest",
            Role::Volunteer => "volunteer",
            Role::Organizer => "organizer",
        }
    }

    /// Valor crudo del <select> o del storage; desconocido = None
    pub fn parse(raw: &str) -> Option<Role> {
        match raw.trim() {
            "guest" => Some(Role::Guest),
            "volunteer" => Some(Role::Volunteer),
            "organizer" => Some(Role::Organizer),
            _ => None,
        }
    }

    /// Etiqueta mostrada en el selector de rol
    pub fn label(&self) -> &'static str {
        match self {
            Role::Guest => "Gæst",
            Role::Volunteer => "Frivillig",
            Role::Organizer => "Arrangør",
        }
    }

    pub fn visibility(&self) -> RoleVisibility {
        let is_organizer = matches!(self, Role::Organizer);
        RoleVisibility {
            heat_toggle: !is_organizer,
            report_button: !is_organizer,
            dashboard: is_organizer,
            export: is_organizer,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_visibility_table() {
        for role in [Role::Guest, Role::Volunteer] {
            let v = role.visibility();
            assert!(v.heat_toggle && v.report_button, "{:?}", role);
            assert!(!v.dashboard && !v.export, "{:?}", role);
        }

        let v = Role::Organizer.visibility();
        assert!(!v.heat_toggle && !v.report_button);
        assert!(v.dashboard && v.export);
    }

    #[test]
    fn test_parse_matches_as_str() {
        for role in Role::ALL {
            assert_eq!(Role::parse(role.as_str()), Some(role));
        }
        assert_eq!(Role::parse("admin"), None);
    }

    #[test]
    fn test_role_serializes_lowercase() {
        assert_eq!(serde_json::to_string(&Role::Organizer).unwrap(), "\"organizer\"");
    }
}
