// The demonstration scenario: which roles to create, which tree to list and
// which strategies to try. It ships embedded in the binary as TOML.

use serde::Deserialize;

use crate::encryption::StrategyKind;
use crate::error::ConfigError;
use crate::file_system::{DirectoryNode, FileNode, FileSystemNode};
use crate::role_factory::RoleKind;

const EMBEDDED: &str = include_str!("demo.toml");

#[derive(Debug, Clone, Deserialize)]
pub struct DemoConfig {
    pub roles: Vec<RoleKind>,
    pub file_system: FileSystemSection,
    #[serde(default)]
    pub encryption: EncryptionSection,
}

#[derive(Debug, Clone, Deserialize)]
pub struct FileSystemSection {
    #[serde(default = "default_start_depth")]
    pub start_depth: usize,
    pub root: NodeSpec,
}

fn default_start_depth() -> usize {
    1
}

/// A node with a `children` key is a directory, even if the list is empty.
#[derive(Debug, Clone, Deserialize)]
pub struct NodeSpec {
    pub name: String,
    #[serde(default)]
    pub children: Option<Vec<NodeSpec>>,
}

impl NodeSpec {
    pub fn build(&self) -> Box<dyn FileSystemNode> {
        match &self.children {
            None => Box::new(FileNode::new(self.name.as_str())),
            Some(children) => {
                let mut dir = DirectoryNode::new(self.name.as_str());
                for child in children {
                    dir.add_boxed(child.build());
                }
                Box::new(dir)
            }
        }
    }

    fn validate(&self, parent: &str) -> Result<(), ConfigError> {
        let path = if parent.is_empty() {
            self.name.clone()
        } else {
            format!("{parent}/{}", self.name)
        };
        if self.name.trim().is_empty() {
            return Err(ConfigError::EmptyName { path });
        }
        for child in self.children.iter().flatten() {
            child.validate(&path)?;
        }
        Ok(())
    }
}

#[derive(Debug, Clone, Deserialize)]
pub struct EncryptionSection {
    pub sample: String,
    pub strategies: Vec<StrategyKind>,
}

impl Default for EncryptionSection {
    fn default() -> Self {
        Self {
            sample: "Hello, World!".to_string(),
            strategies: vec![StrategyKind::Base64, StrategyKind::Xor, StrategyKind::Reverse],
        }
    }
}

impl DemoConfig {
    /// The scenario compiled into the binary.
    pub fn embedded() -> Result<Self, ConfigError> {
        Self::from_toml_str(EMBEDDED)
    }

    pub fn from_toml_str(content: &str) -> Result<Self, ConfigError> {
        let config: DemoConfig = toml::from_str(content)?;
        config.validate()?;
        tracing::debug!(
            roles = config.roles.len(),
            strategies = config.encryption.strategies.len(),
            "demo scenario loaded"
        );
        Ok(config)
    }

    fn validate(&self) -> Result<(), ConfigError> {
        if self.roles.is_empty() {
            return Err(ConfigError::NoRoles);
        }
        self.file_system.root.validate("")
    }

    pub fn build_tree(&self) -> Box<dyn FileSystemNode> {
        self.file_system.root.build()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::file_system::render;

    #[test]
    fn test_embedded_scenario_parses() {
        let config = DemoConfig::embedded().unwrap();
        assert_eq!(config.roles, RoleKind::ALL.to_vec());
        assert_eq!(config.file_system.start_depth, 1);
        assert_eq!(config.encryption.sample, "Hello, World!");
        assert_eq!(
            config.encryption.strategies,
            [StrategyKind::Base64, StrategyKind::Xor, StrategyKind::Reverse]
        );
    }

    #[test]
    fn test_embedded_tree_shape() {
        let config = DemoConfig::embedded().unwrap();
        let listing = render(config.build_tree().as_ref(), config.file_system.start_depth).unwrap();
        assert!(listing.starts_with("-Root\n---Documents\n"));
        assert!(listing.ends_with("---README.txt\n"));
    }

    #[test]
    fn test_children_key_marks_directory() {
        let config = DemoConfig::from_toml_str(
            r#"
roles = ["guest"]

[file_system.root]
name = "top"
children = [{ name = "empty", children = [] }, { name = "file" }]
"#,
        )
        .unwrap();
        let listing = render(config.build_tree().as_ref(), config.file_system.start_depth).unwrap();
        assert_eq!(listing, "-top\n---empty\n---file\n");
    }

    #[test]
    fn test_encryption_section_defaults() {
        let config = DemoConfig::from_toml_str(
            r#"
roles = ["admin"]

[file_system.root]
name = "f"
"#,
        )
        .unwrap();
        assert_eq!(config.encryption.strategies.len(), 3);
    }

    #[test]
    fn test_empty_roles_rejected() {
        let err = DemoConfig::from_toml_str(
            r#"
roles = []

[file_system.root]
name = "f"
"#,
        )
        .unwrap_err();
        assert!(matches!(err, ConfigError::NoRoles));
    }

    #[test]
    fn test_empty_node_name_rejected() {
        let err = DemoConfig::from_toml_str(
            r#"
roles = ["admin"]

[file_system.root]
name = "Root"
children = [{ name = "Docs", children = [{ name = " " }] }]
"#,
        )
        .unwrap_err();
        match err {
            ConfigError::EmptyName { path } => assert_eq!(path, "Root/Docs/ "),
            other => panic!("unexpected error: {other}"),
        }
    }

    #[test]
    fn test_unknown_role_is_parse_error() {
        let err = DemoConfig::from_toml_str(
            r#"
roles = ["superuser"]

[file_system.root]
name = "f"
"#,
        )
        .unwrap_err();
        assert!(matches!(err, ConfigError::Parse(_)));
    }
}
