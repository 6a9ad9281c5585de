//! Temperature classification and activity suggestions.
//!
//! Both [`classify`] and [`suggest_activities`] consult the same ordered
//! breakpoint table, so a temperature can never land in one category while
//! receiving the activities of another.

use serde::{Deserialize, Serialize};
use std::fmt;

/// Number of activities suggested for every category.
pub const ACTIVITY_COUNT: usize = 5;

/// One of the seven temperature bands.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum Category {
    VeryCold,
    Cold,
    Cool,
    Mild,
    Warm,
    Hot,
    VeryHot,
}

/// Upper bounds (exclusive, °C) in ascending order. Anything at or above the
/// last bound is [`Category::VeryHot`].
const BREAKPOINTS: [(i32, Category); 6] = [
    (0, Category::VeryCold),
    (10, Category::Cold),
    (15, Category::Cool),
    (20, Category::Mild),
    (25, Category::Warm),
    (30, Category::Hot),
];

/// Map a rounded Celsius temperature to its category. Total over `i32`.
pub fn classify(temp_c: i32) -> Category {
    BREAKPOINTS
        .iter()
        .find(|(upper, _)| temp_c < *upper)
        .map(|(_, category)| *category)
        .unwrap_or(Category::VeryHot)
}

/// Activities suggested for `temp_c`, in display order.
pub fn suggest_activities(temp_c: i32) -> &'static [&'static str; ACTIVITY_COUNT] {
    classify(temp_c).activities()
}

/// Thermometer glyph shown next to the temperature.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum TemperatureBand {
    /// Below 10 °C.
    Freezing,
    /// 10 °C up to 25 °C.
    Moderate,
    /// 25 °C and above.
    Warm,
}

impl TemperatureBand {
    pub fn symbol(&self) -> &'static str {
        match self {
            TemperatureBand::Freezing => "❄",
            TemperatureBand::Moderate => "🌡",
            TemperatureBand::Warm => "☀",
        }
    }
}

/// Thermometer glyph for `temp_c`.
pub fn temperature_band(temp_c: i32) -> TemperatureBand {
    classify(temp_c).band()
}

impl Category {
    pub const fn all() -> &'static [Category] {
        &[
            Category::VeryCold,
            Category::Cold,
            Category::Cool,
            Category::Mild,
            Category::Warm,
            Category::Hot,
            Category::VeryHot,
        ]
    }

    /// Human-readable label, e.g. "Very Cold".
    pub fn label(&self) -> &'static str {
        match self {
            Category::VeryCold => "Very Cold",
            Category::Cold => "Cold",
            Category::Cool => "Cool",
            Category::Mild => "Mild",
            Category::Warm => "Warm",
            Category::Hot => "Hot",
            Category::VeryHot => "Very Hot",
        }
    }

    pub fn band(&self) -> TemperatureBand {
        match self {
            Category::VeryCold | Category::Cold => TemperatureBand::Freezing,
            Category::Cool | Category::Mild | Category::Warm => TemperatureBand::Moderate,
            Category::Hot | Category::VeryHot => TemperatureBand::Warm,
        }
    }

    pub fn activities(&self) -> &'static [&'static str; ACTIVITY_COUNT] {
        match self {
            Category::VeryCold => &[
                "Visit an indoor ice skating rink",
                "Enjoy hot chocolate or mulled wine by the fireplace",
                "Visit a museum or art gallery to stay warm",
                "Try a hot yoga class for warming exercise",
                "Cook a hearty stew or soup at home",
            ],
            Category::Cold => &[
                "Go for a brisk walk in warm clothing",
                "Visit a cozy café for hot drinks",
                "Explore indoor attractions like museums or aquariums",
                "Try indoor rock climbing or bowling",
                "Visit a local bookstore and find a good read",
            ],
            Category::Cool => &[
                "Go hiking in light layers",
                "Visit an outdoor market or fair",
                "Explore a botanical garden",
                "Go for a scenic drive with stops at viewpoints",
                "Try outdoor photography in the pleasant weather",
            ],
            Category::Mild => &[
                "Have a picnic in the park",
                "Go cycling on local trails",
                "Visit an outdoor café or restaurant",
                "Go sightseeing around the city",
                "Try outdoor yoga or tai chi",
            ],
            Category::Warm => &[
                "Go for a hike in nature",
                "Visit a local farmers' market",
                "Have a barbecue in the park or garden",
                "Go kayaking or paddleboarding if near water",
                "Play outdoor sports like tennis or volleyball",
            ],
            Category::Hot => &[
                "Go swimming at a local pool or beach",
                "Visit a water park",
                "Have a picnic in a shaded area",
                "Go for an early morning or evening walk",
                "Enjoy ice cream at a local parlor",
            ],
            Category::VeryHot => &[
                "Visit an air-conditioned museum or mall",
                "Go swimming or visit a water park",
                "Enjoy frozen treats like ice cream or smoothies",
                "Watch a movie at an indoor theater",
                "Plan indoor activities during the hottest part of the day",
            ],
        }
    }
}

impl fmt::Display for Category {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn classify_boundaries() {
        let cases = [
            (-1, Category::VeryCold),
            (0, Category::Cold),
            (9, Category::Cold),
            (10, Category::Cool),
            (14, Category::Cool),
            (15, Category::Mild),
            (19, Category::Mild),
            (20, Category::Warm),
            (24, Category::Warm),
            (25, Category::Hot),
            (29, Category::Hot),
            (30, Category::VeryHot),
            (31, Category::VeryHot),
        ];

        for (temp, expected) in cases {
            assert_eq!(classify(temp), expected, "temperature {temp}");
        }
    }

    #[test]
    fn classify_is_total_at_extremes() {
        assert_eq!(classify(i32::MIN), Category::VeryCold);
        assert_eq!(classify(-273), Category::VeryCold);
        assert_eq!(classify(i32::MAX), Category::VeryHot);
    }

    #[test]
    fn every_temperature_gets_five_non_empty_activities() {
        for temp in -60..=60 {
            let activities = suggest_activities(temp);
            assert_eq!(activities.len(), ACTIVITY_COUNT);
            assert!(activities.iter().all(|a| !a.trim().is_empty()));
        }
    }

    #[test]
    fn activities_follow_category() {
        for temp in -60..=60 {
            assert_eq!(suggest_activities(temp), classify(temp).activities());
        }
    }

    #[test]
    fn categories_have_distinct_activity_lists() {
        let all = Category::all();
        for (i, a) in all.iter().enumerate() {
            for b in &all[i + 1..] {
                assert_ne!(a.activities(), b.activities(), "{a} vs {b}");
            }
        }
    }

    #[test]
    fn classification_is_deterministic() {
        for temp in [-5, 0, 12, 18, 22, 27, 35] {
            assert_eq!(classify(temp), classify(temp));
            assert_eq!(suggest_activities(temp), suggest_activities(temp));
        }
    }

    #[test]
    fn temperature_band_edges() {
        assert_eq!(temperature_band(9), TemperatureBand::Freezing);
        assert_eq!(temperature_band(10), TemperatureBand::Moderate);
        assert_eq!(temperature_band(24), TemperatureBand::Moderate);
        assert_eq!(temperature_band(25), TemperatureBand::Warm);
    }

    #[test]
    fn label_and_serde_name() {
        assert_eq!(Category::VeryCold.to_string(), "Very Cold");
        assert_eq!(serde_json::to_string(&Category::VeryHot).unwrap(), "\"very-hot\"");
    }
}
