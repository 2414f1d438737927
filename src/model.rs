// Data model module: serde structs mirroring the Gutendex page schema
// (https://gutendex.com/). Deserialization is best-effort: list and
// string fields default to empty when absent so a partial record still
// parses instead of failing the whole page.

use serde::{Deserialize, Serialize};

/// One fetched batch of book records plus the pagination cursors the API
/// hands back. `next` is either a fully-qualified URL for the following
/// page or absent, which signals the last page.
#[derive(Serialize, Deserialize, Debug, Clone)]
pub struct Page {
    #[serde(default)]
    pub count: u32,
    pub next: Option<String>,
    pub previous: Option<String>,
    #[serde(default)]
    pub results: Vec<Book>,
}

/// A single catalog entry. Field names match the wire format exactly.
#[derive(Serialize, Deserialize, Debug, Clone)]
pub struct Book {
    pub id: u64,
    #[serde(default)]
    pub title: String,
    #[serde(default)]
    pub authors: Vec<Person>,
    #[serde(default)]
    pub translators: Vec<Person>,
    #[serde(default)]
    pub subjects: Vec<String>,
    #[serde(default)]
    pub bookshelves: Vec<String>,
    #[serde(default)]
    pub languages: Vec<String>,
    #[serde(default)]
    pub media_type: String,
    #[serde(default)]
    pub download_count: u64,
}

/// An author or translator. Either year can be missing in the catalog,
/// and years can be negative (BC), so absence must stay distinct from
/// zero.
#[derive(Serialize, Deserialize, Debug, Clone)]
pub struct Person {
    #[serde(default)]
    pub name: String,
    pub birth_year: Option<i32>,
    pub death_year: Option<i32>,
}

impl Person {
    /// The year used when judging how recently this person existed.
    /// Death year takes precedence over birth year when both are known:
    /// it is chronologically later, so it is the most recent point the
    /// person is known to have existed. A person with neither year has
    /// no reference year.
    pub fn reference_year(&self) -> Option<i32> {
        self.death_year.or(self.birth_year)
    }
}
