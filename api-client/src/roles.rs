use serde::{Deserialize, Serialize};

/// Roles recognized by the platform, ordered by display priority.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum UserRole {
    Admin,
    Moderator,
    Judge,
    Artist,
    Listener,
    User,
}

impl UserRole {
    pub const ORDER: [UserRole; 6] = [
        UserRole::Admin,
        UserRole::Moderator,
        UserRole::Judge,
        UserRole::Artist,
        UserRole::Listener,
        UserRole::User,
    ];

    pub fn parse(value: &str) -> Option<Self> {
        match value {
            "admin" => Some(UserRole::Admin),
            "moderator" => Some(UserRole::Moderator),
            "judge" => Some(UserRole::Judge),
            "artist" => Some(UserRole::Artist),
            "listener" => Some(UserRole::Listener),
            "user" => Some(UserRole::User),
            _ => None,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            UserRole::Admin => "admin",
            UserRole::Moderator => "moderator",
            UserRole::Judge => "judge",
            UserRole::Artist => "artist",
            UserRole::Listener => "listener",
            UserRole::User => "user",
        }
    }
}

/// Normalize an arbitrary multiset of role strings: unknown values are
/// dropped, duplicates removed, and the result sorted by fixed priority
/// (admin first). Idempotent.
pub fn normalize_roles<I, S>(roles: I) -> Vec<UserRole>
where
    I: IntoIterator<Item = S>,
    S: AsRef<str>,
{
    let mut unique: Vec<UserRole> = Vec::new();
    for role in roles {
        if let Some(parsed) = UserRole::parse(role.as_ref()) {
            if !unique.contains(&parsed) {
                unique.push(parsed);
            }
        }
    }
    unique.sort();
    unique
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn drops_unknown_roles() {
        let roles = normalize_roles(["artist", "superuser", "judge"]);
        assert_eq!(roles, vec![UserRole::Judge, UserRole::Artist]);
    }

    #[test]
    fn dedupes_and_sorts_by_priority() {
        let roles = normalize_roles(["user", "admin", "user", "judge", "admin"]);
        assert_eq!(roles, vec![UserRole::Admin, UserRole::Judge, UserRole::User]);
    }

    #[test]
    fn is_idempotent() {
        let first = normalize_roles(["listener", "moderator", "artist", "listener"]);
        let second = normalize_roles(first.iter().map(UserRole::as_str));
        assert_eq!(first, second);
    }

    #[test]
    fn empty_input_yields_empty_set() {
        assert!(normalize_roles(Vec::<String>::new()).is_empty());
    }

    #[test]
    fn serde_round_trips_lowercase() {
        let json = serde_json::to_string(&UserRole::Moderator).unwrap();
        assert_eq!(json, "\"moderator\"");
        let parsed: UserRole = serde_json::from_str(&json).unwrap();
        assert_eq!(parsed, UserRole::Moderator);
    }
}
