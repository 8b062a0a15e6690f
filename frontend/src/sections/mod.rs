mod about;
mod features;
mod footer;
mod team;

pub use about::About;
pub use features::Features;
pub use footer::Footer;
pub use team::Team;
