//! Built-in content tables.
//!
//! The Practical Frontend course ships with the crate so a renderer has
//! something to show without any content files.

use std::collections::BTreeMap;
use std::sync::LazyLock;

use crate::slide::Slide;
use crate::table::ContentTable;

static PRACTICAL_FRONTEND: LazyLock<ContentTable> = LazyLock::new(|| {
    ContentTable::from_validated(BTreeMap::from([
        (
            "intro".to_string(),
            vec![
                Slide::new("Welcome to Practical Frontend!"),
                Slide::new("What is this playlist about?"),
                Slide::new("Prerequisites")
                    .with_content("Some _basic_ knowledge of **JavaScript** and **React**."),
                Slide::new("How to follow along?"),
                Slide::new("Let's get started!"),
            ],
        ),
        (
            "modals".to_string(),
            vec![
                Slide::new("Modals"),
                Slide::new("Modals are used to").with_bullets([
                    "Show additional information",
                    "Ask for user input",
                    "Confirm an action",
                ]),
                Slide::new("How to create a modal?").with_bullets([
                    "Javascript's `prompt()` or `alert()` functions",
                    "HTML `<dialog>` element",
                    "Custom modal component",
                ]),
            ],
        ),
    ]))
});

/// The Practical Frontend slide table (topics `intro` and `modals`).
///
/// Built on first access and shared for the life of the process.
pub fn practical_frontend() -> &'static ContentTable {
    &PRACTICAL_FRONTEND
}
