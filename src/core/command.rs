use crate::core::plugin::{PluginDescriptor, ADD_HELP, DELETE_HELP};
use crate::domain::model::Service;
use crate::utils::error::{CatalogError, Result};
use crate::utils::validation::parse_non_negative_int;

const ADD_EXAMPLE: &str = "addservice PERFILES TIKTOK|tiktok1|Perfil tiktok Extra|65 MX|10|El plan tiktok te permite tener un perfil seguro y personal con PIN de bloqueo dentro de una cuenta compartida.";
const DELETE_EXAMPLE: &str = "deleteservice PERFILES TIKTOK|tiktok1";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CommandKind {
    AddService,
    DeleteService,
}

impl CommandKind {
    pub fn from_keyword(keyword: &str) -> Option<Self> {
        if keyword.eq_ignore_ascii_case("addservice") {
            Some(CommandKind::AddService)
        } else if keyword.eq_ignore_ascii_case("deleteservice") {
            Some(CommandKind::DeleteService)
        } else {
            None
        }
    }

    pub fn arity(self) -> usize {
        match self {
            CommandKind::AddService => 6,
            CommandKind::DeleteService => 2,
        }
    }

    /// Usage text with a worked example, written with the prefix the sender used.
    pub fn usage(self, prefix: &str) -> String {
        match self {
            CommandKind::AddService => format!(
                "{p}{}\n\nEjemplo:\n{p}{}",
                ADD_HELP,
                ADD_EXAMPLE,
                p = prefix
            ),
            CommandKind::DeleteService => format!(
                "{p}{}\n\nEjemplo: {p}{}",
                DELETE_HELP,
                DELETE_EXAMPLE,
                p = prefix
            ),
        }
    }
}

/// A message body that names one of the service commands.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Invocation<'a> {
    pub kind: CommandKind,
    pub prefix: &'a str,
    pub args: &'a str,
}

impl<'a> Invocation<'a> {
    /// Finds `<prefix><keyword>` at the start of `body`. The keyword must end
    /// at whitespace or at the end of the body.
    pub fn recognize(
        body: &'a str,
        prefixes: &'a [String],
        descriptor: &PluginDescriptor,
    ) -> Option<Self> {
        let body = body.trim_start();

        prefixes.iter().find_map(|prefix| {
            let rest = body.strip_prefix(prefix.as_str())?;
            let keyword_end = rest.find(char::is_whitespace).unwrap_or(rest.len());
            let (keyword, args) = rest.split_at(keyword_end);
            if !descriptor.matches(keyword) {
                return None;
            }
            Some(Invocation {
                kind: CommandKind::from_keyword(keyword)?,
                prefix: prefix.as_str(),
                args,
            })
        })
    }

    fn fields(&self) -> Result<Vec<&'a str>> {
        let fields: Vec<&str> = self.args.split('|').map(str::trim).collect();
        let expected = self.kind.arity();
        if fields.len() != expected {
            return Err(CatalogError::ArityError {
                usage: self.kind.usage(self.prefix),
                expected,
                actual: fields.len(),
            });
        }
        Ok(fields)
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ServiceCommand {
    Add { category: String, service: Service },
    Delete { category: String, id: String },
}

impl ServiceCommand {
    pub fn parse(invocation: &Invocation<'_>) -> Result<Self> {
        let fields = invocation.fields()?;

        match (invocation.kind, fields.as_slice()) {
            (CommandKind::AddService, [category, id, pregunta, precio, stock, descripcion]) => {
                Ok(ServiceCommand::Add {
                    category: category.to_string(),
                    service: Service::new(
                        *id,
                        *pregunta,
                        *precio,
                        parse_non_negative_int("stock", stock)?,
                        *descripcion,
                    ),
                })
            }
            (CommandKind::DeleteService, [category, id]) => Ok(ServiceCommand::Delete {
                category: category.to_string(),
                id: id.to_string(),
            }),
            (kind, _) => Err(CatalogError::ArityError {
                usage: kind.usage(invocation.prefix),
                expected: kind.arity(),
                actual: fields.len(),
            }),
        }
    }
}
