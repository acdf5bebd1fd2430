use serde::{Deserialize, Serialize};

/// How averages are rounded to one decimal place.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum RoundingMode {
    /// 81.25 -> 81.3
    #[default]
    HalfAwayFromZero,
    /// 81.25 -> 81.2, 81.35 -> 81.4
    HalfEven,
}

impl RoundingMode {
    pub const ALL: [RoundingMode; 2] = [RoundingMode::HalfAwayFromZero, RoundingMode::HalfEven];

    pub fn as_str(self) -> &'static str {
        match self {
            RoundingMode::HalfAwayFromZero => "half_away_from_zero",
            RoundingMode::HalfEven => "half_even",
        }
    }

    pub fn from_setting(value: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|mode| mode.as_str() == value)
    }
}

/// Rounds `numerator / denominator` to tenths using exact integer arithmetic,
/// so 275/3 is 91.7 and 1625/20 is 81.3 regardless of binary float error.
/// Returns `None` for a zero denominator.
pub fn ratio_to_tenths(numerator: u64, denominator: u64, mode: RoundingMode) -> Option<f64> {
    if denominator == 0 {
        return None;
    }

    let scaled = numerator * 10;
    let quotient = scaled / denominator;
    let twice_remainder = (scaled % denominator) * 2;

    let round_up = match mode {
        RoundingMode::HalfAwayFromZero => twice_remainder >= denominator,
        RoundingMode::HalfEven => {
            twice_remainder > denominator || (twice_remainder == denominator && quotient % 2 == 1)
        }
    };

    let tenths = if round_up { quotient + 1 } else { quotient };
    Some(tenths as f64 / 10.0)
}
