use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(try_from = "i32", into = "i32")]
pub struct MatchScore(i32);

impl MatchScore {
    pub const MIN: i32 = 0;
    pub const MAX: i32 = 100;

    pub fn new(score: i32) -> Result<Self, String> {
        if !(Self::MIN..=Self::MAX).contains(&score) {
            return Err(format!(
                "Match score must be between {} and {}, got {}",
                Self::MIN,
                Self::MAX,
                score
            ));
        }

        Ok(Self(score))
    }

    pub fn value(&self) -> i32 {
        self.0
    }
}

impl TryFrom<i32> for MatchScore {
    type Error = String;

    fn try_from(value: i32) -> Result<Self, Self::Error> {
        MatchScore::new(value)
    }
}

impl From<MatchScore> for i32 {
    fn from(score: MatchScore) -> Self {
        score.0
    }
}

impl std::fmt::Display for MatchScore {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_bounds_are_inclusive() {
        assert_eq!(MatchScore::new(0).unwrap().value(), 0);
        assert_eq!(MatchScore::new(100).unwrap().value(), 100);
    }

    #[test]
    fn test_out_of_range_rejected() {
        assert!(MatchScore::new(-1).is_err());
        assert!(MatchScore::new(101).is_err());
    }

    #[test]
    fn test_deserialize_validates() {
        let ok: MatchScore = serde_json::from_str("87").unwrap();
        assert_eq!(ok.value(), 87);
        assert!(serde_json::from_str::<MatchScore>("150").is_err());
    }
}
