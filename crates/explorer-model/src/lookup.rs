//! Fixed lookup tables.
//!
//! All tables are immutable constants; nothing here is configured at runtime.

/// Label for passengers whose `Survived` flag is 1.
pub const SURVIVED_LABEL: &str = "Survived";

/// Label for passengers whose `Survived` flag is 0.
pub const DIED_LABEL: &str = "Died";

/// Marker colour for survivors (sea green).
pub const SURVIVED_COLOR: &str = "#2E8B57";

/// Marker colour for everyone else (crimson).
pub const DIED_COLOR: &str = "#DC143C";

const PORTS: [(&str, &str); 3] = [
    ("S", "Southampton"),
    ("C", "Cherbourg"),
    ("Q", "Queenstown"),
];

const AXIS_TITLES: [(&str, &str); 10] = [
    ("Fare", "Fare ($)"),
    ("Age", "Age (years)"),
    ("FareLog10", "Fare (log₁₀)"),
    ("Sex", "Gender"),
    ("Level", "Cabin Level"),
    ("AgeInDecades", "Age (decades)"),
    ("Title", "Title"),
    ("Embarked", "Port of Embarkation"),
    ("Pclass", "Passenger Class"),
    ("Survived", "Survived"),
];

/// Full port name for an embarkation code, if the code is known.
pub fn port_name(code: &str) -> Option<&'static str> {
    PORTS
        .iter()
        .find(|(known, _)| *known == code)
        .map(|(_, name)| *name)
}

/// Display title for a column, falling back to the column name itself.
///
/// ```
/// use explorer_model::lookup::axis_title;
///
/// assert_eq!(axis_title("FareLog10"), "Fare (log₁₀)");
/// assert_eq!(axis_title("TicketShareCount"), "TicketShareCount");
/// ```
pub fn axis_title(column: &str) -> &str {
    AXIS_TITLES
        .iter()
        .find(|(name, _)| *name == column)
        .map_or(column, |(_, title)| *title)
}

/// Marker colour for a survival label. Anything but [`SURVIVED_LABEL`] is drawn as died.
pub fn survival_color(label: &str) -> &'static str {
    if label == SURVIVED_LABEL {
        SURVIVED_COLOR
    } else {
        DIED_COLOR
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_port_name() {
        assert_eq!(port_name("S"), Some("Southampton"));
        assert_eq!(port_name("C"), Some("Cherbourg"));
        assert_eq!(port_name("Q"), Some("Queenstown"));
        assert_eq!(port_name("Unknown"), None);
        assert_eq!(port_name("s"), None);
    }

    #[test]
    fn test_axis_title() {
        assert_eq!(axis_title("Fare"), "Fare ($)");
        assert_eq!(axis_title("Pclass"), "Passenger Class");
        assert_eq!(axis_title("CabinOccupancy"), "CabinOccupancy");
    }

    #[test]
    fn test_survival_color() {
        assert_eq!(survival_color("Survived"), SURVIVED_COLOR);
        assert_eq!(survival_color("Died"), DIED_COLOR);
        assert_eq!(survival_color("2"), DIED_COLOR);
    }
}
