// UI layer: provides a simple interactive menu using `dialoguer`.
// Each menu action fetches its own page, transforms it, prints it and
// hands control back to the loop; no page survives across iterations.

use anyhow::Result;
use dialoguer::Select;
use indicatif::{ProgressBar, ProgressStyle};
use std::time::Duration;

use crate::api::{ApiClient, FetchError, BOOKS_URL};
use crate::display::{print_book, print_page, DEFAULT_MAX_ENTRIES};
use crate::model::Page;
use crate::search::{find_book, SearchOutcome};
use crate::tasks;

// Behavior values from the exercise brief.
const AGE_FILTER_THRESHOLD: i32 = 200;
const SEARCH_TITLE: &str = "Short Stories";
const SEARCH_AUTHOR: &str = "Dostoyevsky, Fyodor";

/// Main interactive menu. Receives an `ApiClient` instance and runs a
/// simple select loop until the user chooses "Exit".
///
/// Note: `Select::interact()` is keyboard-driven: you can use arrow keys
/// and Enter to choose an option.
pub fn main_menu(api: ApiClient) -> Result<()> {
    println!("Gutendex catalog explorer");
    loop {
        let items = vec![
            "Fetch from API",
            "Arrays (Sort by ID)",
            "Strings (Modify subjects to be uppercase)",
            "Dates (Filter authors older than 200 years)",
            "Find an entry (search for Short Stories by Dostoyevsky, Fyodor)",
            "Exit",
        ];
        let selection = Select::new().items(&items).default(0).interact()?;
        match selection {
            0 => run_task(&api, |page| page),
            1 => run_task(&api, tasks::sort_by_id),
            2 => run_task(&api, tasks::uppercase_subjects),
            3 => run_task(&api, |page| {
                tasks::filter_by_author_age(page, AGE_FILTER_THRESHOLD)
            }),
            4 => run_search(&api),
            5 => break,
            _ => {}
        }
    }
    Ok(())
}

/// Shared shape of menu options 1-4: fetch page 1, apply a transform,
/// display the result. A fetch failure is reported and the loop carries
/// on; it is never fatal.
fn run_task(api: &ApiClient, transform: impl FnOnce(Page) -> Page) {
    match fetch_with_spinner(api, BOOKS_URL) {
        Ok(page) => print_page(&transform(page), DEFAULT_MAX_ENTRIES),
        Err(err) => report_failure(&err),
    }
}

/// Menu option 5: walk pages from page 1 until the searched book turns
/// up or pagination ends. Both "exhausted" and "failed" surface as a
/// not-found message, the latter with its cause.
fn run_search(api: &ApiClient) {
    println!("Searching from page 1, this can take a while...");
    match find_book(api, BOOKS_URL, SEARCH_TITLE, SEARCH_AUTHOR) {
        SearchOutcome::Found(book) => {
            println!("Search Successful!");
            print_book(&book);
        }
        SearchOutcome::Exhausted => {
            println!("Search was unable to find {SEARCH_TITLE} by {SEARCH_AUTHOR}");
        }
        SearchOutcome::Failed(err) => {
            println!("Search failed: {err}");
            println!("Search was unable to find {SEARCH_TITLE} by {SEARCH_AUTHOR}");
        }
    }
}

/// Fetch a page with an indicatif spinner running while the blocking
/// request is in flight.
fn fetch_with_spinner(api: &ApiClient, url: &str) -> Result<Page, FetchError> {
    let spinner = ProgressBar::new_spinner();
    if let Ok(style) = ProgressStyle::with_template("{spinner} {msg}") {
        spinner.set_style(style);
    }
    spinner.set_message("Making HTTP request...");
    spinner.enable_steady_tick(Duration::from_millis(80));
    let result = api.fetch_page(url);
    spinner.finish_and_clear();
    result
}

fn report_failure(err: &FetchError) {
    println!("Received data was invalid, please try again ({err})");
}
