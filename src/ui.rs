//! Terminal output helpers.
//!
//! Pure formatting functions separated from workflow logic.

pub fn display_error(message: &str) {
    eprintln!("\x1b[31mERROR:\x1b[0m {}", message); // Red color
}

pub fn display_success(message: &str) {
    println!("\x1b[32m✓\x1b[0m {}", message); // Green color
}

pub fn display_status(message: &str) {
    println!("\x1b[33m→\x1b[0m {}", message); // Yellow color
}

/// Report the dry-run result: a headline plus one canonical tag per line.
pub fn display_planned_tags(tags: &[String]) {
    println!("DRY RUN enabled - these new tags would be created:");
    for tag in tags {
        println!("{}", tag);
    }
}

pub fn display_created_tags(tags: &[String]) {
    for tag in tags {
        display_success(&format!("Created tag: {}", tag));
    }
}

pub fn display_nothing_to_do() {
    println!("Nothing to do");
}
