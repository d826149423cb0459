//! Canned health reference content
//!
//! Built once at startup and looked up by exact topic name.

/// Prevention and first-aid guidance for one topic
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ResearchTopic {
    pub name: &'static str,
    pub prevention: [&'static str; 5],
    pub first_aid: [&'static str; 5],
}

impl ResearchTopic {
    /// Topic name in title case, e.g. "Common Cold"
    pub fn title(&self) -> String {
        self.name
            .split(' ')
            .map(|word| {
                let mut chars = word.chars();
                match chars.next() {
                    Some(first) => first.to_uppercase().chain(chars).collect(),
                    None => String::new(),
                }
            })
            .collect::<Vec<String>>()
            .join(" ")
    }
}

/// The reference topics, in display order
#[derive(Debug, Clone)]
pub struct ReferenceLibrary {
    topics: Vec<ResearchTopic>,
}

impl ReferenceLibrary {
    pub fn builtin() -> Self {
        Self {
            topics: vec![
                ResearchTopic {
                    name: "dengue",
                    prevention: [
                        "Use mosquito nets and repellents",
                        "Eliminate stagnant water sources",
                        "Wear full-sleeve clothing",
                        "Keep surroundings clean",
                        "Use window screens",
                    ],
                    first_aid: [
                        "Rest and stay hydrated",
                        "Take paracetamol for fever",
                        "Avoid aspirin",
                        "Monitor for warning signs",
                        "Seek medical help if symptoms worsen",
                    ],
                },
                ResearchTopic {
                    name: "fever",
                    prevention: [
                        "Maintain good hygiene",
                        "Get adequate rest",
                        "Stay hydrated",
                        "Eat nutritious food",
                        "Avoid close contact with sick people",
                    ],
                    first_aid: [
                        "Take temperature regularly",
                        "Use fever reducer if >101°F",
                        "Apply cool compress",
                        "Rest and hydrate",
                        "Monitor symptoms",
                    ],
                },
                ResearchTopic {
                    name: "common cold",
                    prevention: [
                        "Wash hands frequently",
                        "Avoid touching face",
                        "Stay away from sick people",
                        "Get adequate sleep",
                        "Maintain good ventilation",
                    ],
                    first_aid: [
                        "Drink warm fluids",
                        "Use saline nasal drops",
                        "Gargle with warm salt water",
                        "Take vitamin C supplements",
                        "Rest and stay warm",
                    ],
                },
                ResearchTopic {
                    name: "heat stroke",
                    prevention: [
                        "Stay hydrated",
                        "Wear light, loose clothing",
                        "Avoid peak sun hours",
                        "Use sunscreen",
                        "Take frequent breaks in shade",
                    ],
                    first_aid: [
                        "Move to cool place",
                        "Remove excess clothing",
                        "Apply cool compresses",
                        "Drink cool water",
                        "Seek medical help if severe",
                    ],
                },
                ResearchTopic {
                    name: "seasonal allergies",
                    prevention: [
                        "Keep windows closed",
                        "Use air purifiers",
                        "Wash clothes after outdoor activities",
                        "Take allergy medication",
                        "Monitor pollen count",
                    ],
                    first_aid: [
                        "Use antihistamines",
                        "Apply cold compress for eye irritation",
                        "Use saline nasal spray",
                        "Take warm showers",
                        "Keep emergency medication handy",
                    ],
                },
            ],
        }
    }

    /// Exact-name lookup
    pub fn lookup(&self, name: &str) -> Option<&ResearchTopic> {
        self.topics.iter().find(|topic| topic.name == name)
    }

    pub fn topic_names(&self) -> Vec<&'static str> {
        self.topics.iter().map(|topic| topic.name).collect()
    }

    pub fn topics(&self) -> &[ResearchTopic] {
        &self.topics
    }
}

impl Default for ReferenceLibrary {
    fn default() -> Self {
        Self::builtin()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_builtin_topics_in_order() {
        let library = ReferenceLibrary::builtin();
        assert_eq!(
            library.topic_names(),
            vec!["dengue", "fever", "common cold", "heat stroke", "seasonal allergies"]
        );
    }

    #[test]
    fn test_lookup_is_exact() {
        let library = ReferenceLibrary::builtin();
        assert!(library.lookup("dengue").is_some());
        assert!(library.lookup("Dengue").is_none());
        assert!(library.lookup("cold").is_none());
        assert!(library.lookup("malaria").is_none());
    }

    #[test]
    fn test_title_case() {
        let library = ReferenceLibrary::builtin();
        assert_eq!(library.lookup("common cold").unwrap().title(), "Common Cold");
        assert_eq!(library.lookup("fever").unwrap().title(), "Fever");
    }

    #[test]
    fn test_dengue_first_aid_avoids_aspirin() {
        let library = ReferenceLibrary::builtin();
        let dengue = library.lookup("dengue").unwrap();
        assert_eq!(dengue.first_aid[2], "Avoid aspirin");
    }
}
