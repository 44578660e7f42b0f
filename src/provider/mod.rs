// ABOUTME: Platform providers building the domain table per OS family
// ABOUTME: Re-exports the XDG, Windows, and generic implementations

pub mod factory;
pub mod generic;
pub mod windows;
pub mod xdg;

// Re-export selection entry points
pub use factory::{detect, provider_for};

// Re-export provider implementations for convenient access
pub use generic::GenericProvider;
pub use windows::{RegistryFolders, WindowsProvider};
pub use xdg::{XdgProvider, XdgUserDirTool};
