use std::fmt;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Season {
    Summer,
    Monsoon,
    Winter,
}

impl Season {
    /// Season for a calendar month (1-12)
    pub fn from_month(month: u32) -> Self {
        match month {
            3..=6 => Season::Summer,
            7..=10 => Season::Monsoon,
            _ => Season::Winter,
        }
    }

    pub fn alerts(&self) -> [&'static str; 2] {
        match self {
            Season::Summer => [
                "🌞 Stay hydrated! Aim for 8-10 glasses of water daily",
                "🌡️ Heat exhaustion risk - limit outdoor activity between 11AM-3PM",
            ],
            Season::Monsoon => [
                "🦟 Dengue risk increased - use mosquito nets and repellents",
                "💧 Avoid walking through stagnant water",
            ],
            Season::Winter => [
                "🧣 Keep warm! Cold temperatures can lower immunity",
                "🫁 Indoor air quality matters - ventilate your room daily",
            ],
        }
    }
}

impl fmt::Display for Season {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Season::Summer => "summer",
            Season::Monsoon => "monsoon",
            Season::Winter => "winter",
        };
        f.write_str(name)
    }
}
