//! Index page rendering for the Trevarn brand site.
//!
//! Turns an ordered page list into the complete English or French landing
//! page. Rendering is pure string assembly and never touches the filesystem.

pub mod index;
pub mod strings;
pub mod style;

pub use index::{escape_html, render_index};
pub use strings::Strings;
