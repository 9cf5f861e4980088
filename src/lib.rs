// Design Patterns Showcase
// Factory Method, Composite and Strategy, each as a small self-contained module.

pub mod config;
pub mod demo;
pub mod encryption;
pub mod error;
pub mod file_system;
pub mod logging;
pub mod role_factory;

pub use config::DemoConfig;
pub use encryption::{
    Base64Encryption, EncryptionStrategy, Encryptor, ReverseEncryption, StrategyKind,
    XorEncryption,
};
pub use error::{ConfigError, DemoError, EncryptionError};
pub use file_system::{DirectoryNode, FileNode, FileSystemNode};
pub use role_factory::{Role, RoleCreator, RoleKind};
