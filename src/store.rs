use std::sync::{RwLock, RwLockReadGuard, RwLockWriteGuard};

use schemars::JsonSchema;
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

/// A book record held in the in-memory collection.
#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema, ToSchema)]
pub struct Book {
    pub id: u64,
    pub title: String,
    pub author: String,
    pub description: String,
    pub rating: u8,
    pub published_date: u16,
}

impl Book {
    fn new(
        id: u64,
        title: &str,
        author: &str,
        description: &str,
        rating: u8,
        published_date: u16,
    ) -> Self {
        Book {
            id,
            title: title.to_string(),
            author: author.to_string(),
            description: description.to_string(),
            rating,
            published_date,
        }
    }
}

/// The fields of a book before the store has assigned it an id.
#[derive(Debug)]
pub struct NewBook {
    pub title: String,
    pub author: String,
    pub description: String,
    pub rating: u8,
    pub published_date: u16,
}

/// The process-wide in-memory book collection.
///
/// A single ordered list behind an [`RwLock`]. Every operation is a linear
/// search that takes the lock exactly once, so each request observes and
/// applies one atomic step. Nothing is persisted across restarts.
pub struct BookStore {
    books: RwLock<Vec<Book>>,
}

impl BookStore {
    /// Creates an empty store.
    pub fn new() -> Self {
        BookStore {
            books: RwLock::new(Vec::new()),
        }
    }

    /// Creates a store holding the startup catalog.
    pub fn seeded() -> Self {
        let books = vec![
            Book::new(1, "Computer Science", "John Doe", "This is a book about computer science", 5, 2021),
            Book::new(2, "Mathematics", "Jane Doe", "This is a book about mathematics", 4, 2020),
            Book::new(3, "Physics", "John Smith", "This is a book about physics", 3, 2019),
            Book::new(4, "Chemistry", "Jane Smith", "This is a book about chemistry", 2, 2018),
            Book::new(5, "Biology", "John Doe", "This is a book about biology", 1, 2017),
            Book::new(6, "History", "Jane Doe", "This is a book about history", 5, 2016),
            Book::new(7, "Geography", "John Smith", "This is a book about geography", 4, 2015),
            Book::new(8, "Economics", "Jane Smith", "This is a book about economics", 3, 2014),
            Book::new(9, "Politics", "John Doe", "This is a book about politics", 2, 2013),
            Book::new(10, "Philosophy", "Jane Doe", "This is a book about philosophy", 1, 2012),
        ];

        BookStore {
            books: RwLock::new(books),
        }
    }

    /// Returns the full collection.
    pub fn all(&self) -> Vec<Book> {
        self.read().clone()
    }

    /// Returns the books with exactly the given rating.
    pub fn find_by_rating(&self, rating: u8) -> Vec<Book> {
        self.read()
            .iter()
            .filter(|book| book.rating == rating)
            .cloned()
            .collect()
    }

    /// Returns the books with exactly the given publish date.
    pub fn find_by_published_date(&self, published_date: u16) -> Vec<Book> {
        self.read()
            .iter()
            .filter(|book| book.published_date == published_date)
            .cloned()
            .collect()
    }

    /// Returns the book with the given id.
    pub fn find_by_id(&self, id: u64) -> Option<Book> {
        self.read().iter().find(|book| book.id == id).cloned()
    }

    /// Assigns the next id (max existing id + 1, or 1 on an empty list),
    /// appends the book and returns the full collection.
    pub fn create(&self, new_book: NewBook) -> Vec<Book> {
        let mut books = self.write();

        let id = books
            .iter()
            .map(|book| book.id)
            .max()
            .map_or(1, |max| max + 1);

        books.push(Book {
            id,
            title: new_book.title,
            author: new_book.author,
            description: new_book.description,
            rating: new_book.rating,
            published_date: new_book.published_date,
        });

        books.clone()
    }

    /// Overwrites every field except the id and returns the updated book,
    /// or `None` if the id is absent. An absent id leaves the collection
    /// untouched.
    pub fn update(&self, id: u64, changes: NewBook) -> Option<Book> {
        let mut books = self.write();

        let book = books.iter_mut().find(|book| book.id == id)?;

        book.title = changes.title;
        book.author = changes.author;
        book.description = changes.description;
        book.rating = changes.rating;
        book.published_date = changes.published_date;

        Some(book.clone())
    }

    /// Removes the book with the given id. Returns whether it existed.
    pub fn delete(&self, id: u64) -> bool {
        let mut books = self.write();

        match books.iter().position(|book| book.id == id) {
            Some(index) => {
                books.remove(index);
                true
            }
            None => false,
        }
    }

    fn read(&self) -> RwLockReadGuard<'_, Vec<Book>> {
        self.books.read().expect("Books lock poisoned")
    }

    fn write(&self) -> RwLockWriteGuard<'_, Vec<Book>> {
        self.books.write().expect("Books lock poisoned")
    }
}

impl Default for BookStore {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn new_book(title: &str) -> NewBook {
        NewBook {
            title: title.to_string(),
            author: "Author Name".to_string(),
            description: "A Book Description".to_string(),
            rating: 5,
            published_date: 2021,
        }
    }

    #[test]
    fn create_on_empty_store_assigns_id_one() {
        let store = BookStore::new();

        let books = store.create(new_book("A Book Title"));

        assert_eq!(books.len(), 1);
        assert_eq!(books[0].id, 1);
    }

    #[test]
    fn create_assigns_max_id_plus_one() {
        let store = BookStore::seeded();

        let books = store.create(new_book("A Book Title"));

        assert_eq!(books.len(), 11);
        assert_eq!(books.last().map(|book| book.id), Some(11));
    }

    #[test]
    fn create_after_deleting_the_highest_id_reuses_it() {
        let store = BookStore::seeded();

        assert!(store.delete(10));
        let books = store.create(new_book("A Book Title"));

        assert_eq!(books.last().map(|book| book.id), Some(10));
    }

    #[test]
    fn find_by_id_returns_the_matching_book() {
        let store = BookStore::seeded();

        let book = store.find_by_id(3).expect("Book 3 must exist");

        assert_eq!(book.title, "Physics");
        assert_eq!(book.author, "John Smith");
    }

    #[test]
    fn find_by_id_returns_none_for_missing_id() {
        let store = BookStore::seeded();

        assert!(store.find_by_id(999).is_none());
    }

    #[test]
    fn find_by_rating_returns_exactly_the_matching_subset() {
        let store = BookStore::seeded();

        let books = store.find_by_rating(5);

        assert_eq!(books.len(), 2);
        assert!(books.iter().all(|book| book.rating == 5));
        assert_eq!(
            books.iter().map(|book| book.id).collect::<Vec<_>>(),
            vec![1, 6]
        );
    }

    #[test]
    fn find_by_published_date_returns_exactly_the_matching_subset() {
        let store = BookStore::seeded();

        let books = store.find_by_published_date(2015);

        assert_eq!(books.len(), 1);
        assert_eq!(books[0].id, 7);
    }

    #[test]
    fn update_overwrites_every_field_except_the_id() {
        let store = BookStore::seeded();

        let changes = NewBook {
            title: "Applied Physics".to_string(),
            author: "Jane Smith".to_string(),
            description: "This is a book about applied physics".to_string(),
            rating: 4,
            published_date: 2049,
        };

        let book = store.update(3, changes).expect("Book 3 must exist");

        assert_eq!(book.id, 3);
        assert_eq!(book.title, "Applied Physics");
        assert_eq!(book.author, "Jane Smith");
        assert_eq!(book.description, "This is a book about applied physics");
        assert_eq!(book.rating, 4);
        assert_eq!(book.published_date, 2049);
    }

    #[test]
    fn update_with_missing_id_leaves_the_collection_unchanged() {
        let store = BookStore::seeded();

        assert!(store.update(999, new_book("A Book Title")).is_none());

        let books = store.all();
        assert_eq!(books.len(), 10);
        assert_eq!(books[0].title, "Computer Science");
        assert_eq!(books[9].title, "Philosophy");
    }

    #[test]
    fn delete_removes_only_the_matching_book() {
        let store = BookStore::seeded();

        assert!(store.delete(5));

        let books = store.all();
        assert_eq!(books.len(), 9);
        assert!(books.iter().all(|book| book.id != 5));
    }

    #[test]
    fn delete_with_missing_id_returns_false() {
        let store = BookStore::seeded();

        assert!(!store.delete(999));
        assert_eq!(store.all().len(), 10);
    }

    #[test]
    fn seeded_store_holds_the_ten_book_catalog() {
        let store = BookStore::seeded();

        let books = store.all();

        assert_eq!(books.len(), 10);
        assert_eq!(books[0].id, 1);
        assert_eq!(books[0].title, "Computer Science");
        assert_eq!(books[9].id, 10);
        assert_eq!(books[9].published_date, 2012);
    }
}
