//! History-derived insights: timeline, trends, tips, seasonal alerts

pub mod body_map;
pub mod seasonal;
pub mod timeline;
pub mod trends;

use std::time::Duration;

pub use body_map::{BodyRegion, BODY_MAP};
pub use seasonal::Season;
pub use timeline::{build_timeline, symptom_timeline, TimelineDay};
pub use trends::{analyze_trends, personalized_tips, tips_for, TimeOfDay, Trend};

/// "You've used HealthBot for Xm Ys today"
pub fn usage_summary(elapsed: Duration) -> String {
    let secs = elapsed.as_secs();
    format!("You've used HealthBot for {}m {}s today", secs / 60, secs % 60)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_usage_summary() {
        assert_eq!(
            usage_summary(Duration::from_secs(125)),
            "You've used HealthBot for 2m 5s today"
        );
        assert_eq!(
            usage_summary(Duration::from_millis(999)),
            "You've used HealthBot for 0m 0s today"
        );
    }
}
