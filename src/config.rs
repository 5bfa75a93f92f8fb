//! Support for library configuration options

use std::sync::{Arc, Mutex};
use once_cell::sync::Lazy;

/// The tag given to tasks whose tag is blank (example: a task created from a dialog where the user
/// left the tag field empty).
/// Feel free to override it when initing this library.
pub static DEFAULT_TAG: Lazy<Arc<Mutex<String>>> = Lazy::new(|| Arc::new(Mutex::new("No tag".to_string())));

/// The `(title, tag)` pairs of the sample tasks that seed the collection when the remote source
/// answers with an empty list: one due today, one due tomorrow, one due on the coming Friday.
pub(crate) const SAMPLE_TASKS: [(&str, &str); 3] = [
    ("Finish Wireframes", "Today · High"),
    ("Prepare API Endpoints", "Tomorrow · Medium"),
    ("Team Review – Calendar Flow", "Fri · Low"),
];

pub(crate) fn default_tag() -> String {
    DEFAULT_TAG.lock().unwrap().clone()
}
