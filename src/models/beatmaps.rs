use crate::common::error::AppError;
use std::fmt;
use std::str::FromStr;

/// Approval stage of a beatmap. Stored locally as 0/2/3/4/5, served by the
/// osu! api as "0".."4"; anything outside either code space is invalid.
#[repr(i8)]
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RankedStatus {
    Pending = 0,
    Ranked = 2,
    Approved = 3,
    Qualified = 4,
    Loved = 5,
}

impl RankedStatus {
    pub const fn from_local_code(code: i8) -> Option<Self> {
        match code {
            0 => Some(Self::Pending),
            2 => Some(Self::Ranked),
            3 => Some(Self::Approved),
            4 => Some(Self::Qualified),
            5 => Some(Self::Loved),
            _ => None,
        }
    }

    /// Translate the `approved` code served by the osu! api.
    pub fn from_api_code(code: &str) -> Option<Self> {
        match code {
            "0" => Some(Self::Pending),
            "1" => Some(Self::Ranked),
            "2" => Some(Self::Approved),
            "3" => Some(Self::Qualified),
            "4" => Some(Self::Loved),
            _ => None,
        }
    }

    pub const fn local_code(self) -> i8 {
        self as i8
    }

    pub const fn label(self) -> &'static str {
        match self {
            Self::Pending => "pending",
            Self::Ranked => "ranked",
            Self::Approved => "approved",
            Self::Qualified => "qualified",
            Self::Loved => "loved",
        }
    }
}

impl fmt::Display for RankedStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

impl FromStr for RankedStatus {
    type Err = AppError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "pending" => Ok(Self::Pending),
            "ranked" => Ok(Self::Ranked),
            "approved" => Ok(Self::Approved),
            "qualified" => Ok(Self::Qualified),
            "loved" => Ok(Self::Loved),
            _ => Err(AppError::BeatmapsInvalidStatus),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn local_codes_round_trip() {
        for status in [
            RankedStatus::Pending,
            RankedStatus::Ranked,
            RankedStatus::Approved,
            RankedStatus::Qualified,
            RankedStatus::Loved,
        ] {
            assert_eq!(RankedStatus::from_local_code(status.local_code()), Some(status));
        }
    }

    #[test]
    fn unknown_local_codes_are_rejected() {
        for code in [-2, -1, 1, 6, 9, i8::MAX] {
            assert_eq!(RankedStatus::from_local_code(code), None);
        }
    }

    #[test]
    fn api_codes_translate_into_local_space() {
        assert_eq!(RankedStatus::from_api_code("0"), Some(RankedStatus::Pending));
        assert_eq!(RankedStatus::from_api_code("1"), Some(RankedStatus::Ranked));
        assert_eq!(RankedStatus::from_api_code("2"), Some(RankedStatus::Approved));
        assert_eq!(RankedStatus::from_api_code("3"), Some(RankedStatus::Qualified));
        assert_eq!(RankedStatus::from_api_code("4"), Some(RankedStatus::Loved));
    }

    #[test]
    fn unknown_api_codes_are_rejected() {
        for code in ["-2", "-1", "5", "", "ranked"] {
            assert_eq!(RankedStatus::from_api_code(code), None);
        }
    }

    #[test]
    fn labels_parse_back() {
        for label in ["pending", "ranked", "approved", "qualified", "loved"] {
            let status: RankedStatus = label.parse().unwrap();
            assert_eq!(status.label(), label);
        }
        assert!("graveyard".parse::<RankedStatus>().is_err());
    }
}
