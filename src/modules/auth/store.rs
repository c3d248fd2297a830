use log::debug;
use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

use crate::modules::storage::{KeyValueStorage, StorageError};
use crate::USERS_KEY;

/// One registered account, stored exactly as entered.
///
/// The password is kept in plain text. There is no identifier field and
/// nothing prevents two records from sharing an email. Missing fields read as
/// empty strings and unknown keys are carried through rewrites untouched.
#[derive(Serialize, Deserialize, Debug, Clone, Default, PartialEq, Eq)]
#[serde(rename_all = "camelCase", default)]
pub struct AccountRecord {
    pub first_name: String,
    pub last_name: String,
    pub mobile_no: String,
    pub email: String,
    pub password: String,
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

impl AccountRecord {
    fn matches_credentials(&self, email: &str, password: &str) -> bool {
        self.email == email && self.password == password
    }
}

/// Ordered list of every account, persisted as one JSON array under [`USERS_KEY`]
pub struct AccountStore<S> {
    storage: S,
}

impl<S: KeyValueStorage> AccountStore<S> {
    pub fn new(storage: S) -> Self {
        Self { storage }
    }

    pub fn storage(&self) -> &S {
        &self.storage
    }

    /// Read and decode the whole collection. Nothing stored yet means no accounts.
    pub fn load(&self) -> Result<Vec<AccountRecord>, StorageError> {
        let data = match self.storage.get_item(USERS_KEY)? {
            Some(data) if !data.is_empty() => data,
            _ => return Ok(Vec::new()),
        };

        serde_json::from_str(&data).map_err(|e| StorageError::Deserialize {
            key: USERS_KEY.to_string(),
            source: e,
        })
    }

    /// Return the first account whose email and password both match
    pub fn find_match(
        &self,
        email: &str,
        password: &str,
    ) -> Result<Option<AccountRecord>, StorageError> {
        let accounts = self.load()?;
        debug!("Scanning {} stored accounts for a credential match", accounts.len());

        Ok(accounts
            .into_iter()
            .find(|account| account.matches_credentials(email, password)))
    }

    /// Add an account at the end of the collection and rewrite the whole collection
    pub fn append(&self, record: AccountRecord) -> Result<(), StorageError> {
        let mut accounts = self.load()?;
        accounts.push(record);

        let data = serde_json::to_string(&accounts).map_err(|e| StorageError::Serialize {
            key: USERS_KEY.to_string(),
            source: e,
        })?;
        self.storage.set_item(USERS_KEY, &data)?;

        debug!("Account collection rewritten with {} records", accounts.len());
        Ok(())
    }
}
