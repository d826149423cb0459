use std::fmt;

pub const BODY_MAP: &str = "    ┌─────┐   1. Head
    │  O  │   2. Neck
    └──┬──┘   3. Chest
     ┌─┴─┐    4. Stomach
     │   │    5. Arms
    ┌┴─┐ │    6. Legs
    │ │ │ │
    └─┘ └─┘";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BodyRegion {
    Head,
    Neck,
    Chest,
    Stomach,
    Arms,
    Legs,
}

impl BodyRegion {
    pub const CHOICES: [&'static str; 6] = ["1", "2", "3", "4", "5", "6"];

    /// Region for a menu choice "1".."6"
    pub fn from_choice(choice: &str) -> Option<Self> {
        match choice.trim() {
            "1" => Some(BodyRegion::Head),
            "2" => Some(BodyRegion::Neck),
            "3" => Some(BodyRegion::Chest),
            "4" => Some(BodyRegion::Stomach),
            "5" => Some(BodyRegion::Arms),
            "6" => Some(BodyRegion::Legs),
            _ => None,
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            BodyRegion::Head => "Head",
            BodyRegion::Neck => "Neck",
            BodyRegion::Chest => "Chest",
            BodyRegion::Stomach => "Stomach",
            BodyRegion::Arms => "Arms",
            BodyRegion::Legs => "Legs",
        }
    }
}

impl fmt::Display for BodyRegion {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_choices_map_to_regions() {
        assert_eq!(BodyRegion::from_choice("1"), Some(BodyRegion::Head));
        assert_eq!(BodyRegion::from_choice(" 6 "), Some(BodyRegion::Legs));
        assert_eq!(BodyRegion::from_choice("7"), None);
        assert_eq!(BodyRegion::from_choice("head"), None);
    }

    #[test]
    fn test_every_choice_is_listed_on_the_map() {
        for choice in BodyRegion::CHOICES {
            let region = BodyRegion::from_choice(choice).unwrap();
            assert!(BODY_MAP.contains(&format!("{}. {}", choice, region)));
        }
    }
}
