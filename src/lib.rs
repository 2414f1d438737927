// Library root
// -----------
// This crate exposes a small library surface for the CLI. The binary
// (`main.rs`) uses these modules to implement the interactive menu.
//
// Module responsibilities:
// - `api`: the blocking HTTP fetcher and the fetch+decode composition
//   that yields typed catalog pages.
// - `model`: serde structs mirroring the Gutendex page schema.
// - `tasks`: pure page transforms (sort by id, uppercase subjects,
//   author-age filter).
// - `search`: the paginated linear search over the `next` cursor.
// - `display`: terminal formatting of pages, books and people.
// - `ui`: the dialoguer menu loop dispatching to the above.
//
// Keeping this separation makes the transforms and the search loop
// testable without a network connection.
pub mod api;
pub mod display;
pub mod model;
pub mod search;
pub mod tasks;
pub mod ui;
