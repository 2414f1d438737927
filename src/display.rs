// Presentation layer: turns pages, books and people into terminal text.
// All the string building is pure so it can be tested; only the `print_*`
// functions touch stdout.

use crate::model::{Book, Page, Person};

/// How many books a page printout shows before truncating.
pub const DEFAULT_MAX_ENTRIES: usize = 5;

/// Comma-separated list, or the literal "None" for an empty sequence.
pub fn join_or_none(items: &[String]) -> String {
    if items.is_empty() {
        "None".to_string()
    } else {
        items.join(", ")
    }
}

/// People as `Name (birth-death)`, comma separated. Unknown years render
/// as `unknown`; BC years render as their magnitude suffixed with `BC`.
pub fn people_or_none(people: &[Person]) -> String {
    if people.is_empty() {
        return "None".to_string();
    }
    people
        .iter()
        .map(|person| {
            format!(
                "{} ({}-{})",
                person.name,
                format_year(person.birth_year),
                format_year(person.death_year)
            )
        })
        .collect::<Vec<_>>()
        .join(", ")
}

fn format_year(year: Option<i32>) -> String {
    match year {
        None => "unknown".to_string(),
        Some(y) if y < 0 => format!("{}BC", y.abs()),
        Some(y) => y.to_string(),
    }
}

/// One book as a multi-line terminal block.
pub fn format_book(book: &Book) -> String {
    format!(
        "{} - {}\n   Subjects: {}\n   Authors: {}\n   Translators: {}\n   Bookshelves: {}\n   Languages: {}\n   {}, {} downloads",
        book.id,
        book.title,
        join_or_none(&book.subjects),
        people_or_none(&book.authors),
        people_or_none(&book.translators),
        join_or_none(&book.bookshelves),
        join_or_none(&book.languages),
        book.media_type,
        book.download_count,
    )
}

pub fn print_book(book: &Book) {
    println!("{}", format_book(book));
}

/// Print at most `max_entries` books, then a note saying how many were
/// left out.
pub fn print_page(page: &Page, max_entries: usize) {
    let shown = max_entries.min(page.results.len());
    for book in &page.results[..shown] {
        print_book(book);
    }
    if shown < page.results.len() {
        println!("...({} remaining entries truncated)", page.results.len() - shown);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_list_renders_as_none() {
        assert_eq!(join_or_none(&[]), "None");
    }

    #[test]
    fn list_is_comma_separated() {
        assert_eq!(join_or_none(&["a".to_string(), "b".to_string()]), "a, b");
    }

    #[test]
    fn empty_people_render_as_none() {
        assert_eq!(people_or_none(&[]), "None");
    }

    #[test]
    fn person_years_cover_unknown_and_bc() {
        let people = vec![
            Person {
                name: "Dostoyevsky, Fyodor".into(),
                birth_year: Some(1821),
                death_year: Some(1881),
            },
            Person {
                name: "Euripides".into(),
                birth_year: Some(-480),
                death_year: None,
            },
        ];
        assert_eq!(
            people_or_none(&people),
            "Dostoyevsky, Fyodor (1821-1881), Euripides (480BC-unknown)"
        );
    }

    #[test]
    fn book_block_lists_every_field() {
        let book = Book {
            id: 2554,
            title: "Crime and Punishment".into(),
            authors: vec![Person {
                name: "Dostoyevsky, Fyodor".into(),
                birth_year: Some(1821),
                death_year: Some(1881),
            }],
            translators: vec![],
            subjects: vec!["Crime -- Fiction".into()],
            bookshelves: vec![],
            languages: vec!["en".into()],
            media_type: "Text".into(),
            download_count: 25000,
        };
        let block = format_book(&book);
        assert!(block.starts_with("2554 - Crime and Punishment"));
        assert!(block.contains("Subjects: Crime -- Fiction"));
        assert!(block.contains("Authors: Dostoyevsky, Fyodor (1821-1881)"));
        assert!(block.contains("Translators: None"));
        assert!(block.contains("Text, 25000 downloads"));
    }
}
