//! User data model.
//!
//! A [`User`] is only ever built from validated parts: inbound adapters check
//! raw payloads into a [`UserDraft`] and the draft is then stamped with either
//! a fresh or an existing [`UserId`].

use std::fmt;

use serde::{Deserialize, Serialize};
use serde_json::Number;
use uuid::{Uuid, Variant};

/// Length of the canonical hyphenated UUID text form.
const HYPHENATED_UUID_LEN: usize = 36;
/// Only randomly generated identifiers are issued or accepted.
const RANDOM_UUID_VERSION: usize = 4;

/// Validation errors raised by the user value constructors.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum UserValidationError {
    /// The identifier text was empty.
    EmptyId,
    /// The identifier is not a hyphenated version 4 UUID.
    InvalidId,
    /// The username was empty or whitespace only.
    EmptyUsername,
}

impl fmt::Display for UserValidationError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::EmptyId => write!(f, "user id must not be empty"),
            Self::InvalidId => write!(f, "user id must be a hyphenated version 4 UUID"),
            Self::EmptyUsername => write!(f, "username must not be empty"),
        }
    }
}

impl std::error::Error for UserValidationError {}

/// Stable user identifier: a version 4, RFC 4122 variant UUID in canonical
/// hyphenated form.
///
/// The raw text is kept as supplied so that lookups use exactly the key a
/// client was given.
///
/// # Examples
/// ```
/// use user_service::domain::UserId;
///
/// assert!(UserId::new("3fa85f64-5717-4562-b3fc-2c963f66afa6").is_ok());
/// assert!(UserId::new("3fa85f6457174562b3fc2c963f66afa6").is_err());
/// assert!(UserId::new("3fa85f64-5717-1562-b3fc-2c963f66afa6").is_err());
/// assert!(UserId::new("not-a-uuid").is_err());
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct UserId(Uuid, String);

impl UserId {
    /// Validate and construct a [`UserId`] from borrowed input.
    pub fn new(id: impl AsRef<str>) -> Result<Self, UserValidationError> {
        Self::from_owned(id.as_ref().to_owned())
    }

    /// Generate a fresh random (version 4) identifier.
    pub fn random() -> Self {
        let uuid = Uuid::new_v4();
        Self(uuid, uuid.to_string())
    }

    fn from_owned(id: String) -> Result<Self, UserValidationError> {
        if id.is_empty() {
            return Err(UserValidationError::EmptyId);
        }
        // `Uuid::try_parse` also accepts simple, braced and URN forms.
        if id.len() != HYPHENATED_UUID_LEN {
            return Err(UserValidationError::InvalidId);
        }
        let parsed = Uuid::try_parse(&id).map_err(|_| UserValidationError::InvalidId)?;
        if parsed.get_version_num() != RANDOM_UUID_VERSION
            || parsed.get_variant() != Variant::RFC4122
        {
            return Err(UserValidationError::InvalidId);
        }
        Ok(Self(parsed, id))
    }

    /// Access the parsed UUID.
    pub fn as_uuid(&self) -> &Uuid {
        &self.0
    }
}

impl AsRef<str> for UserId {
    fn as_ref(&self) -> &str {
        self.1.as_str()
    }
}

impl fmt::Display for UserId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_ref())
    }
}

impl From<UserId> for String {
    fn from(value: UserId) -> Self {
        let UserId(_, raw) = value;
        raw
    }
}

impl TryFrom<String> for UserId {
    type Error = UserValidationError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        Self::from_owned(value)
    }
}

/// Username; must contain something other than whitespace.
///
/// The value is stored exactly as submitted.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct Username(String);

impl Username {
    /// Validate and construct a [`Username`].
    pub fn new(username: impl Into<String>) -> Result<Self, UserValidationError> {
        let username = username.into();
        if username.trim().is_empty() {
            return Err(UserValidationError::EmptyUsername);
        }
        Ok(Self(username))
    }
}

impl AsRef<str> for Username {
    fn as_ref(&self) -> &str {
        self.0.as_str()
    }
}

impl From<Username> for String {
    fn from(value: Username) -> Self {
        value.0
    }
}

impl TryFrom<String> for Username {
    type Error = UserValidationError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        Self::new(value)
    }
}

/// Age as submitted by the client.
///
/// Held as a JSON number so integers round-trip as integers and fractional
/// values keep their representation.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Age(Number);

impl Age {
    /// Numeric value as a float.
    pub fn as_f64(&self) -> Option<f64> {
        self.0.as_f64()
    }
}

impl From<Number> for Age {
    fn from(value: Number) -> Self {
        Self(value)
    }
}

impl From<u32> for Age {
    fn from(value: u32) -> Self {
        Self(Number::from(value))
    }
}

/// Validated creation/update payload, not yet bound to an identifier.
#[derive(Debug, Clone, PartialEq)]
pub struct UserDraft {
    username: Username,
    age: Age,
    hobbies: Vec<String>,
}

impl UserDraft {
    /// Assemble a draft from validated parts.
    pub fn new(username: Username, age: Age, hobbies: Vec<String>) -> Self {
        Self {
            username,
            age,
            hobbies,
        }
    }

    /// Turn the draft into a brand new user with a freshly generated id.
    pub fn into_new_user(self) -> User {
        self.into_user(UserId::random())
    }

    /// Turn the draft into a user stamped with an existing id.
    pub fn into_user(self, id: UserId) -> User {
        let Self {
            username,
            age,
            hobbies,
        } = self;
        User {
            id,
            username,
            age,
            hobbies,
        }
    }
}

/// Application user.
///
/// ## Invariants
/// - `id` is a hyphenated UUID string.
/// - `username` is non-empty once trimmed of whitespace.
///
/// Serialises as `{"id", "username", "age", "hobbies"}`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(try_from = "UserDto", into = "UserDto")]
pub struct User {
    id: UserId,
    username: Username,
    age: Age,
    hobbies: Vec<String>,
}

impl User {
    /// Build a user from validated components.
    pub fn new(id: UserId, username: Username, age: Age, hobbies: Vec<String>) -> Self {
        Self {
            id,
            username,
            age,
            hobbies,
        }
    }

    /// Stable user identifier.
    pub fn id(&self) -> &UserId {
        &self.id
    }

    /// Username.
    pub fn username(&self) -> &Username {
        &self.username
    }

    /// Age.
    pub fn age(&self) -> &Age {
        &self.age
    }

    /// Hobbies in submission order.
    pub fn hobbies(&self) -> &[String] {
        &self.hobbies
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
struct UserDto {
    id: String,
    username: String,
    age: Number,
    hobbies: Vec<String>,
}

impl From<User> for UserDto {
    fn from(value: User) -> Self {
        let User {
            id,
            username,
            age,
            hobbies,
        } = value;
        Self {
            id: id.into(),
            username: username.into(),
            age: age.0,
            hobbies,
        }
    }
}

impl TryFrom<UserDto> for User {
    type Error = UserValidationError;

    fn try_from(value: UserDto) -> Result<Self, Self::Error> {
        let UserDto {
            id,
            username,
            age,
            hobbies,
        } = value;
        Ok(Self::new(
            UserId::try_from(id)?,
            Username::new(username)?,
            Age::from(age),
            hobbies,
        ))
    }
}
