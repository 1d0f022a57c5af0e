//! Page components for the FolderZen site

mod home;

pub use home::HomePage;
