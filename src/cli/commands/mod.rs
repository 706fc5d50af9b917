pub mod budget;
pub mod config;
pub mod expense;
pub mod system;

use crate::cli::registry::{CommandEntry, CommandRegistry};

const ROOT_COMMAND_ORDER: &[&str] = &[
    "budget", "add", "remove", "list", "status", "snapshot", "reset", "config", "help", "version",
    "exit",
];

pub(crate) fn all_entries() -> Vec<CommandEntry> {
    let mut commands = Vec::new();
    commands.extend(budget::definitions());
    commands.extend(expense::definitions());
    commands.extend(config::definitions());
    commands.extend(system::definitions());
    commands
}

pub(crate) fn register_all(registry: &mut CommandRegistry) {
    let mut entries = all_entries();
    entries.sort_by_key(|entry| {
        ROOT_COMMAND_ORDER
            .iter()
            .position(|name| entry.name.eq_ignore_ascii_case(name))
            .unwrap_or(ROOT_COMMAND_ORDER.len())
    });
    for entry in entries {
        registry.register(entry);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn registry_follows_root_order() {
        let mut registry = CommandRegistry::new();
        register_all(&mut registry);
        let names: Vec<&str> = registry.names().collect();
        assert_eq!(names, ROOT_COMMAND_ORDER);
    }
}
