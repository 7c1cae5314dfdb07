use std::{fmt, str::FromStr};

/// Quality tier used for labels that are not a known unit type.
pub const DEFAULT_QUALITY: u8 = 1;

/// The kind of property unit. Each kind carries its quality tier.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum UnitType {
    Apartment,
    Villa,
    Townhouse,
    Penthouse,
    Studio,
}

impl UnitType {
    /// Every unit type, in the order the form offers them.
    pub const ALL: [UnitType; 5] = [
        UnitType::Apartment,
        UnitType::Villa,
        UnitType::Townhouse,
        UnitType::Penthouse,
        UnitType::Studio,
    ];

    /// Integer proxy (1-4) for how desirable the unit type is.
    pub const fn quality(self) -> u8 {
        match self {
            UnitType::Apartment => 2,
            UnitType::Villa => 4,
            UnitType::Townhouse => 3,
            UnitType::Penthouse => 4,
            UnitType::Studio => 1,
        }
    }

    pub const fn label(self) -> &'static str {
        match self {
            UnitType::Apartment => "Apartment",
            UnitType::Villa => "Villa",
            UnitType::Townhouse => "Townhouse",
            UnitType::Penthouse => "Penthouse",
            UnitType::Studio => "Studio",
        }
    }
}

impl fmt::Display for UnitType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

impl FromStr for UnitType {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        UnitType::ALL
            .into_iter()
            .find(|u| u.label() == s)
            .ok_or_else(|| format!("unknown unit type: {s}"))
    }
}

/// Quality tier for a free-form unit type label.
///
/// Falls back to [`DEFAULT_QUALITY`] for anything that is not a known label.
pub fn quality_for_label(label: &str) -> u8 {
    label
        .parse::<UnitType>()
        .map(UnitType::quality)
        .unwrap_or(DEFAULT_QUALITY)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn documented_tiers() {
        let tiers: Vec<(&str, u8)> = UnitType::ALL
            .iter()
            .map(|u| (u.label(), u.quality()))
            .collect();

        assert_eq!(
            tiers,
            vec![
                ("Apartment", 2),
                ("Villa", 4),
                ("Townhouse", 3),
                ("Penthouse", 4),
                ("Studio", 1),
            ]
        );
    }

    #[test]
    fn labels_round_through_quality_lookup() {
        for unit in UnitType::ALL {
            assert_eq!(quality_for_label(unit.label()), unit.quality());
        }
    }

    #[test]
    fn unknown_labels_default_to_one() {
        for label in ["Castle", "", "apartment", " Villa"] {
            assert_eq!(quality_for_label(label), DEFAULT_QUALITY);
        }
    }
}
