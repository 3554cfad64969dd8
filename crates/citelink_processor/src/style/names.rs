/*
SPDX-License-Identifier: MPL-2.0
SPDX-FileCopyrightText: © 2023-2026 Bruce D'Arcus
*/

//! Personal name formatting.

use citelink_core::{NameStyle, Person};

/// Format one person according to the name style.
pub fn format_name(person: &Person, style: NameStyle) -> String {
    let given = person.given();
    let von_last = person.von_last();
    match style {
        NameStyle::Plain => {
            let mut name = [given.as_str(), von_last.as_str()]
                .iter()
                .filter(|s| !s.is_empty())
                .copied()
                .collect::<Vec<_>>()
                .join(" ");
            if !person.lineage.is_empty() {
                name.push_str(", ");
                name.push_str(&person.lineage);
            }
            name
        }
        NameStyle::LastFirst => [von_last.as_str(), person.lineage.as_str(), given.as_str()]
            .iter()
            .filter(|s| !s.is_empty())
            .copied()
            .collect::<Vec<_>>()
            .join(", "),
    }
}

/// Join a name list: `A`, `A and B`, `A, B, and C`.
pub fn format_names(persons: &[Person], style: NameStyle) -> String {
    let names: Vec<String> = persons.iter().map(|p| format_name(p, style)).collect();
    match names.as_slice() {
        [] => String::new(),
        [one] => one.clone(),
        [first, second] => format!("{} and {}", first, second),
        [init @ .., last] => format!("{}, and {}", init.join(", "), last),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn einstein() -> Person {
        Person::new("Albert", "Einstein")
    }

    #[test]
    fn test_plain() {
        assert_eq!(format_name(&einstein(), NameStyle::Plain), "Albert Einstein");
    }

    #[test]
    fn test_plain_with_von_and_lineage() {
        let p = Person::parse("van der Berg, Jr, Jan Piet");
        assert_eq!(format_name(&p, NameStyle::Plain), "Jan Piet van der Berg, Jr");
        assert_eq!(
            format_name(&p, NameStyle::LastFirst),
            "van der Berg, Jr, Jan Piet"
        );
    }

    #[test]
    fn test_last_first() {
        assert_eq!(
            format_name(&einstein(), NameStyle::LastFirst),
            "Einstein, Albert"
        );
    }

    #[test]
    fn test_name_lists() {
        let a = einstein();
        let b = Person::new("Stephen", "Hawking");
        let c = Person::new("Kip", "Thorne");
        assert_eq!(format_names(&[a.clone()], NameStyle::Plain), "Albert Einstein");
        assert_eq!(
            format_names(&[a.clone(), b.clone()], NameStyle::Plain),
            "Albert Einstein and Stephen Hawking"
        );
        assert_eq!(
            format_names(&[a, b, c], NameStyle::Plain),
            "Albert Einstein, Stephen Hawking, and Kip Thorne"
        );
    }
}
