//! The about page: static description of the application.

use crate::constants::{APP_DESCRIPTION, APP_NAME};
use crate::mood::Mood;

/// Prints what the application does and the moods it knows about.
pub fn run() {
    println!("{} - {}", APP_NAME, APP_DESCRIPTION);
    println!();
    println!("Record one dated entry at a time with a title, free-form text,");
    println!("a mood, and comma-separated tags. Browse past entries by date");
    println!("range, mood, or tag; search them by text; or view a month");
    println!("calendar of the days you wrote on.");
    println!();
    println!("Moods:");
    for mood in Mood::ALL {
        println!("  {}", mood.label());
    }
}
