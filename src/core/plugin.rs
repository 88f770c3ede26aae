use regex::{Regex, RegexBuilder};

pub const ADD_HELP: &str = "addservice <categoria>|<id>|<pregunta>|<precio>|<stock>|<descripcion>";
pub const DELETE_HELP: &str = "deleteservice <categoria>|<id>";
pub const OWNER_TAG: &str = "owner";

/// What the host bot needs to register a plugin: help lines, tags and the
/// matcher for bare command names.
#[derive(Debug, Clone)]
pub struct PluginDescriptor {
    pub help: Vec<String>,
    pub tags: Vec<String>,
    command: Regex,
}

impl PluginDescriptor {
    pub fn service_commands() -> Self {
        let command = RegexBuilder::new(r"^(addservice|deleteservice)$")
            .case_insensitive(true)
            .build()
            .expect("static command pattern compiles");

        Self {
            help: vec![ADD_HELP.to_string(), DELETE_HELP.to_string()],
            tags: vec![OWNER_TAG.to_string()],
            command,
        }
    }

    /// `name` is the command word without prefix, e.g. `AddService`.
    pub fn matches(&self, name: &str) -> bool {
        self.command.is_match(name)
    }

    pub fn command_pattern(&self) -> &str {
        self.command.as_str()
    }

    pub fn is_owner_only(&self) -> bool {
        self.tags.iter().any(|t| t == OWNER_TAG)
    }
}

impl Default for PluginDescriptor {
    fn default() -> Self {
        Self::service_commands()
    }
}
