use serde::{Deserialize, Serialize};

/// A pet profile as supplied by the host app.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Pet {
    pub id: String,
    pub name: String,
    /// Kept current by the host app; age-gated badges read it at evaluation time
    pub age_in_months: u32,
}

impl Pet {
    /// Life stage derived from the pet's current age
    pub fn age_group(&self) -> AgeGroup {
        AgeGroup::from_age_in_months(self.age_in_months)
    }
}

/// Life stage of a pet
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum AgeGroup {
    Chiot,
    Adulte,
    Senior,
}

impl AgeGroup {
    /// Breakpoints: up to 12 months chiot, up to 84 months adulte, senior after
    pub fn from_age_in_months(months: u32) -> Self {
        if months <= 12 {
            Self::Chiot
        } else if months <= 84 {
            Self::Adulte
        } else {
            Self::Senior
        }
    }

    /// Get the string ID for storage and payloads
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Chiot => "chiot",
            Self::Adulte => "adulte",
            Self::Senior => "senior",
        }
    }

    /// Parse from a stored string
    pub fn from_str(s: &str) -> Option<Self> {
        match s {
            "chiot" => Some(Self::Chiot),
            "adulte" => Some(Self::Adulte),
            "senior" => Some(Self::Senior),
            _ => None,
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            Self::Chiot => "Puppy",
            Self::Adulte => "Adult",
            Self::Senior => "Senior",
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_age_group_breakpoints() {
        assert_eq!(AgeGroup::from_age_in_months(0), AgeGroup::Chiot);
        assert_eq!(AgeGroup::from_age_in_months(12), AgeGroup::Chiot);
        assert_eq!(AgeGroup::from_age_in_months(13), AgeGroup::Adulte);
        assert_eq!(AgeGroup::from_age_in_months(84), AgeGroup::Adulte);
        assert_eq!(AgeGroup::from_age_in_months(85), AgeGroup::Senior);
    }

    #[test]
    fn test_age_group_string_roundtrip() {
        for group in [AgeGroup::Chiot, AgeGroup::Adulte, AgeGroup::Senior] {
            assert_eq!(AgeGroup::from_str(group.as_str()), Some(group));
        }
        assert_eq!(AgeGroup::from_str("kitten"), None);
    }
}
