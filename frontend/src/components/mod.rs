pub mod copy_button;
pub mod hero;
pub mod nav;
pub mod reveal;
pub mod section_title;

pub use copy_button::CopyButton;
pub use hero::Hero;
pub use nav::Nav;
pub use reveal::{Reveal, RevealVariant};
pub use section_title::SectionTitle;
