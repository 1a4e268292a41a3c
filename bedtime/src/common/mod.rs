mod editor_utils;
mod note_files;
mod prompt;

pub use editor_utils::{open_file_in_editor, resolve_editor};
pub use note_files::{TodaysNote, create_note, note_tree_path, todays_note};
pub use prompt::{CreateAnswer, ask_to_create};
