pub mod capability;
pub mod data_path;
pub mod setup;
pub mod theme;

mod chrome;

pub use chrome::Chrome;
