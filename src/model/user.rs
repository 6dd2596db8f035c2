use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Shortest accepted user name, in characters.
pub const NAME_MIN_CHARS: usize = 2;
/// Longest accepted user name, in characters.
pub const NAME_MAX_CHARS: usize = 100;
/// Youngest accepted age.
pub const AGE_MIN: i32 = 18;
/// Oldest accepted age.
pub const AGE_MAX: i32 = 100;

/// Represents a registered user in the system.
///
/// # Actor Framework
/// This struct implements the [`ActorEntity`](crate::framework::ActorEntity) trait,
/// allowing it to be managed by a [`ResourceActor`](crate::framework::ResourceActor).
///
/// See [`impl ActorEntity for User`](#impl-ActorEntity-for-User) for details on:
/// - Creation parameters ([`UserCreate`])
/// - Update parameters ([`UserUpdate`])
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct User {
    pub id: u64,
    pub name: String,
    pub email: String,
    pub age: i32,
    pub created_at: DateTime<Utc>,
    pub is_active: bool,
}

impl User {
    /// Creates a new, active User stamped with the current time.
    ///
    /// # Notes
    /// The `id` field is initialized as `0` and will be set by the actor system.
    pub fn new(name: impl Into<String>, email: impl Into<String>, age: i32) -> Self {
        Self {
            id: 0,
            name: name.into(),
            email: email.into(),
            age,
            created_at: Utc::now(),
            is_active: true,
        }
    }

    /// Case-insensitive email comparison.
    pub fn has_email(&self, email: &str) -> bool {
        self.email.to_lowercase() == email.to_lowercase()
    }

    /// Case-insensitive substring match against the name or the email.
    pub fn matches(&self, term: &str) -> bool {
        let term = term.to_lowercase();
        self.name.to_lowercase().contains(&term) || self.email.to_lowercase().contains(&term)
    }
}

/// Payload for creating a new user.
///
/// Missing JSON fields deserialize to empty values so that they are reported by
/// [`UserCreate::validate`] instead of failing at the parsing stage.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct UserCreate {
    pub name: String,
    pub email: String,
    pub age: i32,
}

impl UserCreate {
    pub fn new(name: impl Into<String>, email: impl Into<String>, age: i32) -> Self {
        Self {
            name: name.into(),
            email: email.into(),
            age,
        }
    }

    /// Checks every field and reports all violations together. A blank name counts as
    /// missing.
    pub fn validate(&self) -> Result<(), Vec<FieldViolation>> {
        let violations: Vec<FieldViolation> = [
            validate_required_name(&self.name),
            validate_email(&self.email),
            validate_age(self.age),
        ]
        .into_iter()
        .flatten()
        .collect();

        if violations.is_empty() {
            Ok(())
        } else {
            Err(violations)
        }
    }
}

/// Partial update for a user. Absent fields are left untouched.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UserUpdate {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub email: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub age: Option<i32>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub is_active: Option<bool>,
}

impl UserUpdate {
    /// Checks the fields that are present. A present but empty name or email is a violation.
    pub fn validate(&self) -> Result<(), Vec<FieldViolation>> {
        let violations: Vec<FieldViolation> = [
            self.name.as_deref().and_then(validate_name),
            self.email.as_deref().and_then(validate_email),
            self.age.and_then(validate_age),
        ]
        .into_iter()
        .flatten()
        .collect();

        if violations.is_empty() {
            Ok(())
        } else {
            Err(violations)
        }
    }
}

/// One rejected input field.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FieldViolation {
    pub field: String,
    pub message: String,
}

impl FieldViolation {
    pub fn new(field: impl Into<String>, message: impl Into<String>) -> Self {
        Self {
            field: field.into(),
            message: message.into(),
        }
    }
}

impl std::fmt::Display for FieldViolation {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}: {}", self.field, self.message)
    }
}

fn validate_name(name: &str) -> Option<FieldViolation> {
    let chars = name.chars().count();
    if chars == 0 {
        return Some(FieldViolation::new("name", "name is required"));
    }
    if !(NAME_MIN_CHARS..=NAME_MAX_CHARS).contains(&chars) {
        return Some(FieldViolation::new(
            "name",
            format!(
                "name must be between {} and {} characters",
                NAME_MIN_CHARS, NAME_MAX_CHARS
            ),
        ));
    }
    None
}

fn validate_required_name(name: &str) -> Option<FieldViolation> {
    if name.trim().is_empty() {
        return Some(FieldViolation::new("name", "name is required"));
    }
    validate_name(name)
}

fn validate_email(email: &str) -> Option<FieldViolation> {
    if email.is_empty() {
        return Some(FieldViolation::new("email", "email is required"));
    }
    if !is_valid_email(email) {
        return Some(FieldViolation::new("email", "email is not a valid email address"));
    }
    None
}

fn validate_age(age: i32) -> Option<FieldViolation> {
    if !(AGE_MIN..=AGE_MAX).contains(&age) {
        return Some(FieldViolation::new(
            "age",
            format!("age must be between {} and {}", AGE_MIN, AGE_MAX),
        ));
    }
    None
}

/// Email shape check: no line breaks, exactly one `@`, with text on both sides of it.
pub fn is_valid_email(email: &str) -> bool {
    if email.contains(['\r', '\n']) {
        return false;
    }
    let mut parts = email.split('@');
    matches!(
        (parts.next(), parts.next(), parts.next()),
        (Some(local), Some(domain), None) if !local.is_empty() && !domain.is_empty()
    )
}

/// Aggregate figures over the whole registry.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UserStats {
    pub total_users: usize,
    pub active_users: usize,
    pub inactive_users: usize,
    /// Mean age of active users, rounded to two decimals. `None` when nobody is active.
    pub average_age: Option<f64>,
    /// Name of the most recently created active user.
    pub newest_user: Option<String>,
    /// Name of the earliest created active user.
    pub oldest_user: Option<String>,
}

impl UserStats {
    pub fn from_users(users: &[User]) -> Self {
        let active: Vec<&User> = users.iter().filter(|u| u.is_active).collect();

        let average_age = if active.is_empty() {
            None
        } else {
            let sum: f64 = active.iter().map(|u| f64::from(u.age)).sum();
            let mean = sum / active.len() as f64;
            Some((mean * 100.0).round() / 100.0)
        };

        // Ties on created_at fall back to id order.
        let newest_user = active
            .iter()
            .max_by_key(|u| (u.created_at, u.id))
            .map(|u| u.name.clone());
        let oldest_user = active
            .iter()
            .min_by_key(|u| (u.created_at, u.id))
            .map(|u| u.name.clone());

        Self {
            total_users: users.len(),
            active_users: active.len(),
            inactive_users: users.len() - active.len(),
            average_age,
            newest_user,
            oldest_user,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;

    fn user(id: u64, name: &str, age: i32, offset_secs: i64, active: bool) -> User {
        User {
            id,
            name: name.to_string(),
            email: format!("{}@example.com", name.to_lowercase()),
            age,
            created_at: Utc.timestamp_opt(offset_secs, 0).unwrap(),
            is_active: active,
        }
    }

    #[test]
    fn test_email_shape() {
        assert!(is_valid_email("ana@x.com"));
        assert!(is_valid_email("a@b"));
        assert!(!is_valid_email("ana.x.com"));
        assert!(!is_valid_email("@x.com"));
        assert!(!is_valid_email("ana@"));
        assert!(!is_valid_email("a@b@c"));
        assert!(!is_valid_email("ana@x.com\n"));
    }

    #[test]
    fn test_create_validation_collects_all_violations() {
        let draft = UserCreate::new("A", "nope", 17);
        let violations = draft.validate().unwrap_err();
        let fields: Vec<&str> = violations.iter().map(|v| v.field.as_str()).collect();
        assert_eq!(fields, vec!["name", "email", "age"]);

        assert!(UserCreate::new("Ana Ruiz", "ana@x.com", 29).validate().is_ok());
    }

    #[test]
    fn test_create_validation_bounds() {
        assert!(UserCreate::new("Al", "al@x.com", 18).validate().is_ok());
        assert!(UserCreate::new("x".repeat(100), "al@x.com", 100).validate().is_ok());
        assert!(UserCreate::new("x".repeat(101), "al@x.com", 30).validate().is_err());
        assert!(UserCreate::new("Al", "al@x.com", 101).validate().is_err());
        // Length counts characters, not bytes.
        assert!(UserCreate::new("Ñú", "n@x.com", 30).validate().is_ok());
    }

    #[test]
    fn test_missing_create_fields_fail_validation() {
        let draft: UserCreate = serde_json::from_str("{}").unwrap();
        let violations = draft.validate().unwrap_err();
        assert_eq!(violations.len(), 3);
        assert_eq!(violations[0].message, "name is required");
    }

    #[test]
    fn test_blank_name_is_missing_on_create_only() {
        let violations = UserCreate::new("   ", "ws@x.com", 30).validate().unwrap_err();
        assert_eq!(violations, vec![FieldViolation::new("name", "name is required")]);

        // Updates only check the length of a present name.
        let update = UserUpdate {
            name: Some("   ".to_string()),
            ..Default::default()
        };
        assert!(update.validate().is_ok());
    }

    #[test]
    fn test_update_validates_only_present_fields() {
        assert!(UserUpdate::default().validate().is_ok());

        let update = UserUpdate {
            age: Some(40),
            ..Default::default()
        };
        assert!(update.validate().is_ok());

        let update = UserUpdate {
            name: Some(String::new()),
            age: Some(12),
            ..Default::default()
        };
        let violations = update.validate().unwrap_err();
        assert_eq!(violations.len(), 2);
    }

    #[test]
    fn test_user_json_uses_camel_case() {
        let json = serde_json::to_value(user(4, "Ana", 29, 0, true)).unwrap();
        assert_eq!(json["id"], 4);
        assert_eq!(json["isActive"], true);
        assert!(json.get("createdAt").is_some());
    }

    #[test]
    fn test_matches_and_has_email() {
        let u = User::new("María García", "Maria@Email.com", 30);
        assert!(u.matches("garcía"));
        assert!(u.matches("EMAIL"));
        assert!(!u.matches("juan"));
        assert!(u.has_email("maria@email.COM"));
    }

    #[test]
    fn test_stats_on_seed_like_data() {
        let users = vec![
            user(1, "Juan", 25, 0, true),
            user(2, "Maria", 30, 1, true),
            user(3, "Carlos", 28, 2, true),
        ];
        let stats = UserStats::from_users(&users);
        assert_eq!(stats.total_users, 3);
        assert_eq!(stats.active_users, 3);
        assert_eq!(stats.inactive_users, 0);
        assert_eq!(stats.average_age, Some(27.67));
        assert_eq!(stats.newest_user.as_deref(), Some("Carlos"));
        assert_eq!(stats.oldest_user.as_deref(), Some("Juan"));
    }

    #[test]
    fn test_stats_ignore_inactive_users_and_break_ties_by_id() {
        let users = vec![
            user(1, "Juan", 25, 5, false),
            user(2, "Maria", 30, 5, true),
            user(3, "Carlos", 40, 5, true),
        ];
        let stats = UserStats::from_users(&users);
        assert_eq!(stats.inactive_users, 1);
        assert_eq!(stats.average_age, Some(35.0));
        assert_eq!(stats.newest_user.as_deref(), Some("Carlos"));
        assert_eq!(stats.oldest_user.as_deref(), Some("Maria"));
    }

    #[test]
    fn test_stats_without_active_users() {
        let stats = UserStats::from_users(&[user(1, "Juan", 25, 0, false)]);
        assert_eq!(stats.active_users, 0);
        assert_eq!(stats.average_age, None);
        assert_eq!(stats.newest_user, None);
        assert_eq!(stats.oldest_user, None);

        let json = serde_json::to_value(&stats).unwrap();
        assert!(json["averageAge"].is_null());
    }
}
