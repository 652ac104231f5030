//! Point tables for race and qualifying sessions
//!
//! Race points run the full grid linearly (1st = 26 down to 26th = 1) so
//! back-marker finishes still matter. Qualifying awards only the top six,
//! keeping it a secondary signal.

use serde::{Deserialize, Serialize};
use std::fmt;

/// Tag for the point rule-set recorded on engine output.
pub const RULE_SET: &str = "full-grid-linear-1";

/// One scoring session within an event weekend.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Session {
    Qualifying,
    Race1,
    Race2,
    Race3,
}

impl Session {
    /// All sessions in scoring order.
    pub const ALL: [Session; 4] = [
        Session::Qualifying,
        Session::Race1,
        Session::Race2,
        Session::Race3,
    ];

    /// The session name as stored in result documents.
    pub fn as_str(&self) -> &'static str {
        match self {
            Session::Qualifying => "qualifying",
            Session::Race1 => "race1",
            Session::Race2 => "race2",
            Session::Race3 => "race3",
        }
    }

    /// Whether this session uses the qualifying point table.
    pub fn is_qualifying(&self) -> bool {
        matches!(self, Session::Qualifying)
    }
}

impl fmt::Display for Session {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// Points for a 1-based race finishing position.
///
/// `27 − position` inside 1..=26, zero outside. A driver absent from the
/// finishing order never reaches this function (absence scores zero at the
/// scorer level).
pub fn race_points(position: u32) -> u32 {
    match position {
        1..=26 => 27 - position,
        _ => 0,
    }
}

/// Points for a 1-based qualifying position. Top six only.
pub fn qualifying_points(position: u32) -> u32 {
    match position {
        1..=6 => 7 - position,
        _ => 0,
    }
}

/// Points for a position in the given session.
pub fn points_for(session: Session, position: u32) -> u32 {
    if session.is_qualifying() {
        qualifying_points(position)
    } else {
        race_points(position)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_race_points_linear_over_full_grid() {
        for p in 1..=26 {
            assert_eq!(race_points(p) + p, 27, "position {}", p);
        }
    }

    #[test]
    fn test_race_points_zero_outside_grid() {
        assert_eq!(race_points(0), 0);
        assert_eq!(race_points(27), 0);
        assert_eq!(race_points(100), 0);
    }

    #[test]
    fn test_qualifying_points_top_six() {
        for p in 1..=6 {
            assert_eq!(qualifying_points(p) + p, 7, "position {}", p);
        }
    }

    #[test]
    fn test_qualifying_points_zero_outside_top_six() {
        assert_eq!(qualifying_points(0), 0);
        assert_eq!(qualifying_points(7), 0);
        assert_eq!(qualifying_points(26), 0);
    }

    #[test]
    fn test_points_for_dispatch() {
        assert_eq!(points_for(Session::Qualifying, 1), 6);
        assert_eq!(points_for(Session::Race1, 1), 26);
        assert_eq!(points_for(Session::Race2, 26), 1);
        assert_eq!(points_for(Session::Race3, 7), 20);
        // Qualifying cuts off where the race table keeps paying
        assert_eq!(points_for(Session::Qualifying, 7), 0);
    }

    #[test]
    fn test_session_round_trips_through_ron() {
        for session in Session::ALL {
            let encoded = ron::to_string(&session).expect("serialize");
            let decoded: Session = ron::from_str(&encoded).expect("deserialize");
            assert_eq!(decoded, session);
        }
    }
}
