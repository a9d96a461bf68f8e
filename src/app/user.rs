use dashmap::DashMap;
use dashmap::mapref::entry::Entry;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct User {
    pub account: String,
    password: String,
    pub email: String,
}

impl User {
    pub fn new(
        account: impl Into<String>,
        password: impl Into<String>,
        email: impl Into<String>,
    ) -> Self {
        Self {
            account: account.into(),
            password: password.into(),
            email: email.into(),
        }
    }

    pub fn check_password(&self, password: &str) -> bool {
        self.password == password
    }
}

/// In-memory account store shared by the login and register handlers.
#[derive(Debug, Default)]
pub struct UserRepository {
    users: DashMap<String, User>,
}

impl UserRepository {
    pub fn new() -> Self {
        Self {
            users: DashMap::new(),
        }
    }

    /// Repository holding the built-in `gugu` account.
    pub fn with_defaults() -> Self {
        let repository = Self::new();
        repository.save(User::new("gugu", "password", "hkkang@woowahan.com"));
        repository
    }

    /// Stores `user` unless the account is taken. Returns whether it was stored.
    pub fn save(&self, user: User) -> bool {
        match self.users.entry(user.account.clone()) {
            Entry::Occupied(_) => false,
            Entry::Vacant(entry) => {
                entry.insert(user);
                true
            }
        }
    }

    pub fn find_by_account(&self, account: &str) -> Option<User> {
        self.users.get(account).map(|u| u.value().clone())
    }
}
