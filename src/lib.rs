// First, declare the modules folder itself
mod modules;

// Re-export everything from modules for easier access
pub use modules::{auth, catalog, forms, storage, utils};

// Re-export commonly used types
pub use modules::auth::store::{AccountRecord, AccountStore};
pub use modules::catalog::{BookCatalog, ClickCounter, Work};
pub use modules::forms::{FieldRule, FormState, RuleSet};
pub use modules::storage::{FileStorage, KeyValueStorage, MemoryStorage, StorageError};
pub use modules::utils::config::AppConfig;

// Constants
pub const USERS_KEY: &str = "users";
pub const BOOKS_BASE_URL: &str = "https://openlibrary.org/subjects";
pub const COVERS_BASE_URL: &str = "https://covers.openlibrary.org/b/id";
pub const DEFAULT_SUBJECT: &str = "computers";
pub const DEFAULT_BOOK_LIMIT: u32 = 10;
pub const DEFAULT_DATA_DIR: &str = "data";
pub const LOG_FILE_NAME: &str = "application.log";
