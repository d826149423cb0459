//! Menu choices for the interactive session
//!
//! Each menu is a numbered list; `parse` maps the typed number to a choice.

/// Account menu shown until a user is established
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AccountChoice {
    Login,
    CreateProfile,
}

impl AccountChoice {
    pub const ITEMS: [&'static str; 2] = ["[1] 🔐 Login", "[2] ✨ Create New Profile"];
    pub const CHOICES: [&'static str; 2] = ["1", "2"];

    pub fn parse(input: &str) -> Option<Self> {
        match input.trim() {
            "1" => Some(AccountChoice::Login),
            "2" => Some(AccountChoice::CreateProfile),
            _ => None,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MainChoice {
    ReportSymptoms,
    ViewHistory,
    DeleteLastEntry,
    ExportHistory,
    UserProfile,
    Premium,
    Exit,
}

impl MainChoice {
    pub const ITEMS: [&'static str; 7] = [
        "[1] 🤒 Report Symptoms",
        "[2] 📋 View History",
        "[3] 🗑️ Delete Last Entry",
        "[4] 📤 Export History",
        "[5] 👤 User Profile",
        "[6] ✨ Premium Features",
        "[7] 🚪 Exit",
    ];
    pub const CHOICES: [&'static str; 7] = ["1", "2", "3", "4", "5", "6", "7"];

    pub fn parse(input: &str) -> Option<Self> {
        match input.trim() {
            "1" => Some(MainChoice::ReportSymptoms),
            "2" => Some(MainChoice::ViewHistory),
            "3" => Some(MainChoice::DeleteLastEntry),
            "4" => Some(MainChoice::ExportHistory),
            "5" => Some(MainChoice::UserProfile),
            "6" => Some(MainChoice::Premium),
            "7" => Some(MainChoice::Exit),
            _ => None,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ProfileChoice {
    MedicalHistory,
    Allergies,
    EmergencyContacts,
    Back,
}

impl ProfileChoice {
    pub const ITEMS: [&'static str; 4] = [
        "[1] 🩺 Medical History",
        "[2] ⚠️ Allergies & Conditions",
        "[3] 📞 Emergency Contacts",
        "[4] ↩️ Back to Main Menu",
    ];
    pub const CHOICES: [&'static str; 4] = ["1", "2", "3", "4"];

    pub fn parse(input: &str) -> Option<Self> {
        match input.trim() {
            "1" => Some(ProfileChoice::MedicalHistory),
            "2" => Some(ProfileChoice::Allergies),
            "3" => Some(ProfileChoice::EmergencyContacts),
            "4" => Some(ProfileChoice::Back),
            _ => None,
        }
    }
}

/// Add / view / back, shared by the three profile screens
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RecordChoice {
    Add,
    View,
    Back,
}

impl RecordChoice {
    pub const CHOICES: [&'static str; 3] = ["1", "2", "3"];

    pub fn items(noun: &str) -> [String; 3] {
        [
            format!("1. ➕ Add new {}", noun),
            format!("2. 📋 View {}", noun),
            "3. ↩️ Back to main menu".to_string(),
        ]
    }

    pub fn parse(input: &str) -> Option<Self> {
        match input.trim() {
            "1" => Some(RecordChoice::Add),
            "2" => Some(RecordChoice::View),
            "3" => Some(RecordChoice::Back),
            _ => None,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PremiumChoice {
    Timeline,
    BodyMap,
    Trends,
    PersonalizedAdvice,
    Research,
    Back,
}

impl PremiumChoice {
    pub const ITEMS: [&'static str; 6] = [
        "[1] 📊 Health Timeline",
        "[2] 🗺️ Body Map",
        "[3] 📈 Trend Analysis",
        "[4] 💡 Personalized Advice",
        "[5] 📚 Health Research",
        "[6] ↩️ Back to Main Menu",
    ];
    pub const CHOICES: [&'static str; 6] = ["1", "2", "3", "4", "5", "6"];

    pub fn parse(input: &str) -> Option<Self> {
        match input.trim() {
            "1" => Some(PremiumChoice::Timeline),
            "2" => Some(PremiumChoice::BodyMap),
            "3" => Some(PremiumChoice::Trends),
            "4" => Some(PremiumChoice::PersonalizedAdvice),
            "5" => Some(PremiumChoice::Research),
            "6" => Some(PremiumChoice::Back),
            _ => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_every_choice_parses() {
        for c in AccountChoice::CHOICES {
            assert!(AccountChoice::parse(c).is_some());
        }
        for c in MainChoice::CHOICES {
            assert!(MainChoice::parse(c).is_some());
        }
        for c in ProfileChoice::CHOICES {
            assert!(ProfileChoice::parse(c).is_some());
        }
        for c in RecordChoice::CHOICES {
            assert!(RecordChoice::parse(c).is_some());
        }
        for c in PremiumChoice::CHOICES {
            assert!(PremiumChoice::parse(c).is_some());
        }
    }

    #[test]
    fn test_out_of_range_rejected() {
        assert_eq!(MainChoice::parse("8"), None);
        assert_eq!(MainChoice::parse("exit"), None);
        assert_eq!(PremiumChoice::parse("0"), None);
    }

    #[test]
    fn test_whitespace_tolerated() {
        assert_eq!(MainChoice::parse(" 7 "), Some(MainChoice::Exit));
    }

    #[test]
    fn test_record_items_use_noun() {
        let items = RecordChoice::items("contact");
        assert_eq!(items[0], "1. ➕ Add new contact");
    }
}
