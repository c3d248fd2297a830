pub mod books;
pub mod counter;
pub mod user_interface;

pub use books::{parse_works, Author, BookCatalog, NetworkError, Work};
pub use counter::ClickCounter;
