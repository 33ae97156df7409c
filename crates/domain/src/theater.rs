use crate::shared::entity::{Entity, ID};
use chrono_tz::Tz;

/// A movie theater. The timezone is a parsed IANA zone, so an
/// unrecognized zone name is unrepresentable.
#[derive(Debug, Clone)]
pub struct Theater {
    pub id: ID,
    pub name: String,
    pub timezone: Tz,
}

impl Theater {
    pub fn new(name: &str, timezone: Tz) -> Self {
        Self {
            id: Default::default(),
            name: name.to_string(),
            timezone,
        }
    }

    pub fn set_timezone(&mut self, timezone: &str) -> bool {
        match timezone.parse::<Tz>() {
            Ok(tzid) => {
                self.timezone = tzid;
                true
            }
            Err(_) => false,
        }
    }
}

impl Entity for Theater {
    fn id(&self) -> &ID {
        &self.id
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono_tz::UTC;

    #[test]
    fn accepts_valid_timezone() {
        let mut theater = Theater::new("Empire 25", UTC);
        assert!(theater.set_timezone("America/New_York"));
        assert_eq!(theater.timezone, chrono_tz::America::New_York);
    }

    #[test]
    fn rejects_invalid_timezone() {
        let mut theater = Theater::new("Empire 25", UTC);
        assert!(!theater.set_timezone("America/Gotham"));
        assert_eq!(theater.timezone, UTC);
    }
}
