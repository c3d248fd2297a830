use log::error;
use std::io::{self, BufRead, Write};

use super::books::{BookCatalog, Work};
use super::counter::ClickCounter;
use crate::modules::utils::config::AppConfig;
use crate::modules::utils::io::{is_end_of_input, read_line_from};

/// Fetch the configured subject, degrading to an empty list on any failure
pub fn load_books(config: &AppConfig) -> Vec<Work> {
    match BookCatalog::new() {
        Ok(catalog) => catalog.fetch_or_empty(&config.books_subject, config.books_limit),
        Err(e) => {
            error!("Error creating book client: {}", e);
            Vec::new()
        }
    }
}

/// Render one book card as plain text
pub fn format_work(index: usize, work: &Work) -> String {
    let mut card = format!(
        "{}. {}\n   Author: {}\n   Status: Available",
        index + 1,
        work.title,
        work.primary_author()
    );
    if let Some(cover) = work.cover_url() {
        card.push_str(&format!("\n   Cover: {}", cover));
    }
    card
}

/// Interpret a selection typed on the book screen
fn parse_selection(input: &str, available: usize) -> Option<usize> {
    match input.parse::<usize>() {
        Ok(n) if n >= 1 && n <= available => Some(n - 1),
        _ => None,
    }
}

/// Book list screen. The click counter starts from zero each time the screen is shown.
pub fn books_screen(config: &AppConfig, counter: &mut ClickCounter) -> io::Result<()> {
    counter.reset();
    let books = load_books(config);

    println!("\n=== IT & AI Books ===");
    if books.is_empty() {
        println!("No books available right now.");
        return Ok(());
    }

    for (index, work) in books.iter().enumerate() {
        println!("{}\n", format_work(index, work));
    }

    select_books(&mut io::stdin().lock(), &books, counter)
}

/// Selection loop for the book list. Leaves on 'back', 'exit' or closed input.
pub fn select_books<R: BufRead>(
    reader: &mut R,
    books: &[Work],
    counter: &mut ClickCounter,
) -> io::Result<()> {
    loop {
        println!("Item Click Count: {}", counter.count());
        print!("Select a book number (or 'back'): ");
        io::stdout().flush()?;

        let input = match read_line_from(reader) {
            Ok(input) => input,
            Err(e) if is_end_of_input(&e) => return Ok(()),
            Err(e) => return Err(e),
        };
        if input.eq_ignore_ascii_case("back") || input.eq_ignore_ascii_case("exit") {
            return Ok(());
        }

        match parse_selection(&input, books.len()) {
            Some(index) => {
                counter.increment();
                println!("Selected: {}", books[index].title);
            }
            None => println!("Please enter a number between 1 and {}.", books.len()),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::modules::catalog::books::Author;

    #[test]
    fn test_format_work() {
        let work = Work {
            key: "/works/OL1W".to_string(),
            title: "Deep Learning".to_string(),
            cover_id: Some(42),
            authors: vec![Author {
                name: Some("Ian Goodfellow".to_string()),
            }],
        };

        let card = format_work(0, &work);
        assert!(card.starts_with("1. Deep Learning"));
        assert!(card.contains("Author: Ian Goodfellow"));
        assert!(card.contains("https://covers.openlibrary.org/b/id/42-M.jpg"));

        let bare = Work {
            cover_id: None,
            authors: Vec::new(),
            ..work
        };
        let card = format_work(2, &bare);
        assert!(card.starts_with("3. "));
        assert!(card.contains("Author: Unknown"));
        assert!(!card.contains("Cover:"));
    }

    fn sample_books() -> Vec<Work> {
        vec![
            Work {
                key: "/works/OL1W".to_string(),
                title: "Deep Learning".to_string(),
                cover_id: None,
                authors: Vec::new(),
            },
            Work {
                key: "/works/OL2W".to_string(),
                title: "Compilers".to_string(),
                cover_id: None,
                authors: Vec::new(),
            },
        ]
    }

    #[test]
    fn test_selection_stops_at_closed_input() {
        let books = sample_books();
        let mut counter = ClickCounter::new();
        let mut input = io::Cursor::new("1\n\nnine\n2\n");

        select_books(&mut input, &books, &mut counter).unwrap();
        assert_eq!(counter.count(), 2);
    }

    #[test]
    fn test_selection_back() {
        let books = sample_books();
        let mut counter = ClickCounter::new();
        let mut input = io::Cursor::new("2\nback\n1\n");

        select_books(&mut input, &books, &mut counter).unwrap();
        assert_eq!(counter.count(), 1);
    }

    #[test]
    fn test_parse_selection() {
        assert_eq!(parse_selection("1", 3), Some(0));
        assert_eq!(parse_selection("3", 3), Some(2));
        assert_eq!(parse_selection("0", 3), None);
        assert_eq!(parse_selection("4", 3), None);
        assert_eq!(parse_selection("two", 3), None);
    }
}
