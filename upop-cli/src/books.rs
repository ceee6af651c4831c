//! The demo item list.

use serde::Serialize;
use upop_core::filter::filter_items;

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Book {
    pub id: &'static str,
    pub author: &'static str,
    pub title: &'static str,
}

impl Book {
    const fn new(id: &'static str, author: &'static str, title: &'static str) -> Self {
        Self { id, author, title }
    }
}

const BOOKS: [Book; 10] = [
    Book::new("book-1", "Harper Lee", "To Kill a Mockingbird"),
    Book::new("book-2", "Lev Tolstoy", "War and Peace"),
    Book::new("book-3", "Fyodor Dostoyevsy", "The Idiot"),
    Book::new("book-4", "Oscar Wilde", "A Picture of Dorian Gray"),
    Book::new("book-5", "George Orwell", "1984"),
    Book::new("book-6", "Jane Austen", "Pride and Prejudice"),
    Book::new("book-7", "Marcus Aurelius", "Meditations"),
    Book::new("book-8", "Fyodor Dostoevsky", "The Brothers Karamazov"),
    Book::new("book-9", "Lev Tolstoy", "Anna Karenina"),
    Book::new("book-10", "Fyodor Dostoevsky", "Crime and Punishment"),
];

pub fn books() -> Vec<Book> {
    BOOKS.to_vec()
}

/// Text shown in the combobox input for a book.
pub fn book_to_string(book: Option<&Book>) -> String {
    book.map(|book| book.title.to_string()).unwrap_or_default()
}

/// Books whose title or author fuzzy-matches `query`, best match first.
pub fn filter_books(query: &str, books: &[Book]) -> Vec<Book> {
    let title_and_author = |book: Option<&Book>| {
        book.map(|book| format!("{} {}", book.title, book.author))
            .unwrap_or_default()
    };

    filter_items(query, books, &title_and_author)
}
