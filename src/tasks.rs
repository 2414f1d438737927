// Page transforms: the pure functions each menu task applies to a freshly
// fetched page. Each takes the page by value and hands back the
// transformed page; nothing is shared across menu iterations.

use chrono::Datelike;

use crate::model::Page;

/// Sort the page's books ascending by id. Ids are unique in practice but
/// the sort is stable anyway so the output is deterministic.
pub fn sort_by_id(mut page: Page) -> Page {
    page.results.sort_by_key(|book| book.id);
    page
}

/// Upper-case every subject string on every book. Order and lengths are
/// preserved and no other field is touched.
pub fn uppercase_subjects(mut page: Page) -> Page {
    for book in &mut page.results {
        for subject in &mut book.subjects {
            *subject = subject.to_uppercase();
        }
    }
    page
}

/// Keep only books where at least one author existed within the last
/// `threshold_years`, judged against the current calendar year.
pub fn filter_by_author_age(page: Page, threshold_years: i32) -> Page {
    filter_by_author_age_in(page, threshold_years, chrono::Local::now().year())
}

/// Core of the age filter with the clock injected. An author counts if
/// their reference year (death year over birth year, see
/// `Person::reference_year`) is within the threshold; an author with
/// neither year can never qualify a book.
pub fn filter_by_author_age_in(mut page: Page, threshold_years: i32, current_year: i32) -> Page {
    page.results.retain(|book| {
        book.authors.iter().any(|author| {
            author
                .reference_year()
                .is_some_and(|year| current_year - year < threshold_years)
        })
    });
    page
}
