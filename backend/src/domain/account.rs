//! Account aggregate: credentials plus the want-to-go list.
//!
//! Usernames and passwords are kept exactly as submitted. Validation only
//! rejects values that are empty once trimmed; comparisons elsewhere are
//! exact and case-sensitive.

use std::fmt;

use zeroize::Zeroizing;

/// Validation errors raised when building account values.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum AccountValidationError {
    /// Username was missing or blank once trimmed.
    EmptyUsername,
    /// Password was missing or blank once trimmed.
    EmptyPassword,
}

impl fmt::Display for AccountValidationError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::EmptyUsername => write!(f, "username must not be empty"),
            Self::EmptyPassword => write!(f, "password must not be empty"),
        }
    }
}

impl std::error::Error for AccountValidationError {}

/// Unique account key.
///
/// # Examples
/// ```
/// use wanderlist::domain::Username;
///
/// let name = Username::new("Ada").unwrap();
/// assert_eq!(name.as_ref(), "Ada");
/// assert!(Username::new("   ").is_err());
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct Username(String);

impl Username {
    /// Validate and construct a username. The raw value is preserved.
    pub fn new(raw: impl Into<String>) -> Result<Self, AccountValidationError> {
        let raw = raw.into();
        if raw.trim().is_empty() {
            return Err(AccountValidationError::EmptyUsername);
        }
        Ok(Self(raw))
    }
}

impl AsRef<str> for Username {
    fn as_ref(&self) -> &str {
        self.0.as_str()
    }
}

impl fmt::Display for Username {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl From<Username> for String {
    fn from(value: Username) -> Self {
        value.0
    }
}

/// Plaintext account password, zeroed on drop.
#[derive(Clone, PartialEq, Eq)]
pub struct Password(Zeroizing<String>);

impl Password {
    /// Validate and construct a password. The raw value is preserved.
    pub fn new(raw: impl Into<String>) -> Result<Self, AccountValidationError> {
        let raw = Zeroizing::new(raw.into());
        if raw.trim().is_empty() {
            return Err(AccountValidationError::EmptyPassword);
        }
        Ok(Self(raw))
    }

    /// Password text for exact comparison or storage.
    pub fn expose(&self) -> &str {
        self.0.as_str()
    }
}

impl fmt::Debug for Password {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("Password(<redacted>)")
    }
}

/// Ordered, duplicate-free list of destination names.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct WantToGoList(Vec<String>);

impl WantToGoList {
    /// Build a list from stored entries, keeping the first occurrence of any
    /// repeated name.
    pub fn from_entries(entries: impl IntoIterator<Item = String>) -> Self {
        let mut list = Self::default();
        for entry in entries {
            list.push(entry);
        }
        list
    }

    /// Whether `name` is already on the list.
    pub fn contains(&self, name: &str) -> bool {
        self.0.iter().any(|entry| entry == name)
    }

    /// Append `name` unless present. Returns `true` when the list changed.
    pub fn push(&mut self, name: impl Into<String>) -> bool {
        let name = name.into();
        if self.contains(&name) {
            return false;
        }
        self.0.push(name);
        true
    }

    /// Entries in insertion order.
    pub fn as_slice(&self) -> &[String] {
        &self.0
    }

    /// Number of entries.
    pub fn len(&self) -> usize {
        self.0.len()
    }

    /// Whether the list has no entries.
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// Consume the list, returning its entries in insertion order.
    pub fn into_vec(self) -> Vec<String> {
        self.0
    }
}

/// A persisted user record.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Account {
    username: Username,
    password: Password,
    want_to_go: WantToGoList,
}

impl Account {
    /// Create a freshly registered account with an empty list.
    pub fn register(username: Username, password: Password) -> Self {
        Self {
            username,
            password,
            want_to_go: WantToGoList::default(),
        }
    }

    /// Rehydrate an account from stored parts.
    pub fn from_parts(username: Username, password: Password, want_to_go: WantToGoList) -> Self {
        Self {
            username,
            password,
            want_to_go,
        }
    }

    /// Account key.
    pub fn username(&self) -> &Username {
        &self.username
    }

    /// Stored password.
    pub fn password(&self) -> &Password {
        &self.password
    }

    /// Exact, case-sensitive password comparison.
    pub fn password_matches(&self, candidate: &str) -> bool {
        self.password.expose() == candidate
    }

    /// The want-to-go list.
    pub fn want_to_go(&self) -> &WantToGoList {
        &self.want_to_go
    }

    /// Mutable access for adapters that apply appends in memory.
    pub fn want_to_go_mut(&mut self) -> &mut WantToGoList {
        &mut self.want_to_go
    }
}
