pub mod components;
pub mod config;
pub mod content;
pub mod hooks;
pub mod icons;
pub mod motion;
pub mod sections;

pub mod pages {
    pub mod landing;
}

pub use pages::landing::Landing;
