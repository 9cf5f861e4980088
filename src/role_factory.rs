// Factory Method: each creator decides which concrete role it builds.

use std::io::{self, Write};

use serde::Deserialize;

// ============================================================================
// Roles
// ============================================================================

pub trait Role {
    /// The fixed line this role introduces itself with.
    fn description(&self) -> &'static str;

    fn display_role(&self, out: &mut dyn Write) -> io::Result<()> {
        writeln!(out, "{}", self.description())
    }
}

#[derive(Debug, Clone, Copy, Default)]
pub struct Admin;
impl Role for Admin {
    fn description(&self) -> &'static str {
        "I am an Administrator."
    }
}

#[derive(Debug, Clone, Copy, Default)]
pub struct Guest;
impl Role for Guest {
    fn description(&self) -> &'static str {
        "I am a Guest."
    }
}

#[derive(Debug, Clone, Copy, Default)]
pub struct Manager;
impl Role for Manager {
    fn description(&self) -> &'static str {
        "I am a Manager."
    }
}

// ============================================================================
// Creators
// ============================================================================

pub trait RoleCreator {
    fn create_role(&self) -> Box<dyn Role>;
}

#[derive(Debug, Clone, Copy, Default)]
pub struct AdminCreator;
impl RoleCreator for AdminCreator {
    fn create_role(&self) -> Box<dyn Role> {
        tracing::debug!(role = "admin", "creating role");
        Box::new(Admin)
    }
}

#[derive(Debug, Clone, Copy, Default)]
pub struct GuestCreator;
impl RoleCreator for GuestCreator {
    fn create_role(&self) -> Box<dyn Role> {
        tracing::debug!(role = "guest", "creating role");
        Box::new(Guest)
    }
}

#[derive(Debug, Clone, Copy, Default)]
pub struct ManagerCreator;
impl RoleCreator for ManagerCreator {
    fn create_role(&self) -> Box<dyn Role> {
        tracing::debug!(role = "manager", "creating role");
        Box::new(Manager)
    }
}

// ============================================================================
// Creator selection by name
// ============================================================================

/// Names a creator in the demo scenario.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum RoleKind {
    Admin,
    Guest,
    Manager,
}

impl RoleKind {
    pub const ALL: [RoleKind; 3] = [RoleKind::Admin, RoleKind::Guest, RoleKind::Manager];

    pub fn creator(self) -> Box<dyn RoleCreator> {
        match self {
            RoleKind::Admin => Box::new(AdminCreator),
            RoleKind::Guest => Box::new(GuestCreator),
            RoleKind::Manager => Box::new(ManagerCreator),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn displayed(creator: &dyn RoleCreator) -> String {
        let mut out = Vec::new();
        creator.create_role().display_role(&mut out).unwrap();
        String::from_utf8(out).unwrap()
    }

    #[test]
    fn test_admin_creator_builds_administrator() {
        assert_eq!(displayed(&AdminCreator), "I am an Administrator.\n");
    }

    #[test]
    fn test_guest_creator_builds_guest() {
        assert_eq!(displayed(&GuestCreator), "I am a Guest.\n");
    }

    #[test]
    fn test_manager_creator_builds_manager() {
        assert_eq!(displayed(&ManagerCreator), "I am a Manager.\n");
    }

    #[test]
    fn test_kind_selects_matching_creator() {
        let lines: Vec<&str> = RoleKind::ALL
            .iter()
            .map(|kind| kind.creator().create_role().description())
            .collect();
        assert_eq!(
            lines,
            ["I am an Administrator.", "I am a Guest.", "I am a Manager."]
        );
    }

    #[test]
    fn test_kind_deserializes_lowercase() {
        #[derive(Deserialize)]
        struct Holder {
            roles: Vec<RoleKind>,
        }
        let holder: Holder = toml::from_str(r#"roles = ["manager", "admin"]"#).unwrap();
        assert_eq!(holder.roles, vec![RoleKind::Manager, RoleKind::Admin]);
    }
}
