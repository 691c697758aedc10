//! Domain types.

mod format;
mod listing;
mod slug;
mod source;
mod variable;

pub use format::Format;
pub use listing::Listing;
pub use slug::ProjectSlug;
pub use source::Source;
pub use variable::Variable;
