// Paginated search: walks the catalog's `next` cursor one page at a time
// until a book matches or the pages run out. The page source is a trait
// so tests can drive the loop from in-memory fixtures instead of the
// live API.

use crate::api::FetchError;
use crate::model::{Book, Page};

/// Anything that can produce a decoded page for a URL. `ApiClient` is the
/// real implementation.
pub trait PageSource {
    fn fetch_page(&self, url: &str) -> Result<Page, FetchError>;
}

/// How a search ended. Running out of pages without a match is a defined
/// outcome, distinct from a fetch or decode failure mid-search.
#[derive(Debug)]
pub enum SearchOutcome {
    Found(Book),
    Exhausted,
    Failed(FetchError),
}

/// Scan pages starting at `start_url` for the first book whose title
/// equals `title` and that lists an author named `author` (both exact,
/// case-sensitive). A failure on any page ends the search immediately;
/// later pages are never attempted. Page count is unbounded, limited only
/// by how deep the API paginates.
pub fn find_book(
    source: &impl PageSource,
    start_url: &str,
    title: &str,
    author: &str,
) -> SearchOutcome {
    let mut url = start_url.to_string();
    loop {
        let page = match source.fetch_page(&url) {
            Ok(page) => page,
            Err(err) => return SearchOutcome::Failed(err),
        };
        if let Some(book) = page.results.into_iter().find(|book| {
            book.title == title && book.authors.iter().any(|person| person.name == author)
        }) {
            return SearchOutcome::Found(book);
        }
        match page.next {
            Some(next) => {
                println!("Not found on current page, searching {next}");
                url = next;
            }
            None => return SearchOutcome::Exhausted,
        }
    }
}
