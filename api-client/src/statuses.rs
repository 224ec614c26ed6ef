use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Deserializer, Serialize, Serializer};

/// Lifecycle of a scheduled battle (match) within a round.
///
/// Unknown wire values fall back to [`MatchStatus::Scheduled`] instead of
/// failing deserialization.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum MatchStatus {
    #[default]
    Scheduled,
    Submission,
    Judging,
    Finished,
    Tie,
    Cancelled,
}

/// Lifecycle of a tournament round; unknown values fall back to `Draft`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum RoundStatus {
    #[default]
    Draft,
    Submission,
    Judging,
    Finished,
}

/// Tournament lifecycle; unknown values fall back to `Draft`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum TournamentStatus {
    #[default]
    Draft,
    Registration,
    Ongoing,
    Completed,
    Archived,
}

/// Judge assignment state; unknown values fall back to `Assigned`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum AssignmentStatus {
    #[default]
    Assigned,
    Completed,
    Skipped,
}

/// Participation application state; unknown values fall back to `Submitted`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ApplicationStatus {
    #[default]
    Submitted,
    Approved,
    Rejected,
}

macro_rules! wire_status {
    ($name:ident { $($variant:ident => $text:literal),+ $(,)? }) => {
        impl $name {
            pub fn as_str(&self) -> &'static str {
                match self {
                    $($name::$variant => $text,)+
                }
            }

            /// Parse a wire value, falling back to the documented default
            /// for anything unrecognized.
            pub fn parse_or_default(value: &str) -> Self {
                value.parse().unwrap_or_default()
            }
        }

        impl FromStr for $name {
            type Err = ();

            fn from_str(value: &str) -> Result<Self, Self::Err> {
                match value {
                    $($text => Ok($name::$variant),)+
                    _ => Err(()),
                }
            }
        }

        impl fmt::Display for $name {
            fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                f.write_str(self.as_str())
            }
        }

        impl Serialize for $name {
            fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
                serializer.serialize_str(self.as_str())
            }
        }

        impl<'de> Deserialize<'de> for $name {
            fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
                let raw = String::deserialize(deserializer)?;
                Ok(Self::parse_or_default(&raw))
            }
        }
    };
}

wire_status!(MatchStatus {
    Scheduled => "scheduled",
    Submission => "submission",
    Judging => "judging",
    Finished => "finished",
    Tie => "tie",
    Cancelled => "cancelled",
});

wire_status!(RoundStatus {
    Draft => "draft",
    Submission => "submission",
    Judging => "judging",
    Finished => "finished",
});

wire_status!(TournamentStatus {
    Draft => "draft",
    Registration => "registration",
    Ongoing => "ongoing",
    Completed => "completed",
    Archived => "archived",
});

wire_status!(AssignmentStatus {
    Assigned => "assigned",
    Completed => "completed",
    Skipped => "skipped",
});

wire_status!(ApplicationStatus {
    Submitted => "submitted",
    Approved => "approved",
    Rejected => "rejected",
});
