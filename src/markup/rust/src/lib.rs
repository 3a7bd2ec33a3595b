/* src/markup/rust/src/lib.rs */

mod bilingual;
mod class;
mod escape;
mod localize;

pub use bilingual::{Bilingual, bilingual};
pub use class::ClassList;
pub use escape::escape_html;
pub use localize::localize;
