use crate::core::command::{Invocation, ServiceCommand};
use crate::core::editor::CatalogEditor;
use crate::core::plugin::PluginDescriptor;
use crate::domain::ports::{CatalogStore, ConfigProvider, Replier};
use crate::utils::error::{CatalogError, Result, GENERIC_FAILURE_REPLY};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum HandleOutcome {
    /// Not one of our commands; nothing was sent.
    Ignored,
    /// Sender is not the owner; the catalog was not touched.
    Denied,
    /// The request itself was wrong (arity, stock, duplicate, missing target).
    Rejected,
    /// The catalog was updated and saved.
    Applied,
    /// Storage failed; the sender got the generic failure reply.
    Failed,
}

/// Entry point the bot calls for every incoming message body.
pub struct ServiceCommandHandler<S: CatalogStore> {
    editor: CatalogEditor<S>,
    descriptor: PluginDescriptor,
    prefixes: Vec<String>,
}

impl<S: CatalogStore> ServiceCommandHandler<S> {
    pub fn new(store: S, prefixes: Vec<String>) -> Self {
        Self {
            editor: CatalogEditor::new(store),
            descriptor: PluginDescriptor::service_commands(),
            prefixes,
        }
    }

    pub fn from_config<C: ConfigProvider>(store: S, config: &C) -> Self {
        Self::new(store, config.command_prefixes().to_vec())
    }

    pub fn descriptor(&self) -> &PluginDescriptor {
        &self.descriptor
    }

    pub fn editor(&self) -> &CatalogEditor<S> {
        &self.editor
    }

    /// Runs one command. Only a failing `reply` is returned as an error; every
    /// other failure is answered in the chat and reported through the outcome.
    pub async fn handle(
        &self,
        msg: &dyn Replier,
        is_owner: bool,
        body: &str,
    ) -> Result<HandleOutcome> {
        let Some(invocation) = Invocation::recognize(body, &self.prefixes, &self.descriptor)
        else {
            return Ok(HandleOutcome::Ignored);
        };

        if !is_owner {
            tracing::warn!("Rejected {:?} from a non-owner sender", invocation.kind);
            msg.reply(&CatalogError::PermissionDenied.user_message())
                .await?;
            return Ok(HandleOutcome::Denied);
        }

        match self.execute(msg, &invocation).await {
            Ok(()) => Ok(HandleOutcome::Applied),
            Err(e @ CatalogError::ReplyError { .. }) => Err(e),
            Err(e) if e.is_internal() => {
                tracing::error!("❗ {:?} failed: {}", invocation.kind, e);
                msg.reply(GENERIC_FAILURE_REPLY).await?;
                Ok(HandleOutcome::Failed)
            }
            Err(e) => {
                tracing::info!("{:?} rejected: {}", invocation.kind, e);
                msg.reply(&e.user_message()).await?;
                Ok(HandleOutcome::Rejected)
            }
        }
    }

    async fn execute(&self, msg: &dyn Replier, invocation: &Invocation<'_>) -> Result<()> {
        match ServiceCommand::parse(invocation)? {
            ServiceCommand::Add { category, service } => {
                let pregunta = service.pregunta.clone();
                let outcome = self.editor.add_service(&category, service).await?;

                // Sent only once the save succeeded; a failed save leaves just the generic reply.
                if outcome.category_created {
                    msg.reply(&format!("✅ Categoría \"{}\" creada.", category))
                        .await?;
                }
                msg.reply(&format!(
                    "✅ Servicio \"{}\" añadido exitosamente a la categoría \"{}\".",
                    pregunta, category
                ))
                .await
            }
            ServiceCommand::Delete { category, id } => {
                let outcome = self.editor.delete_service(&category, &id).await?;

                // Same ordering as add: the removal notice follows a successful save.
                if outcome.category_removed {
                    msg.reply(&format!(
                        "✅ La categoría \"{}\" ha sido eliminada por estar vacía.",
                        category
                    ))
                    .await?;
                }
                msg.reply(&format!(
                    "✅ Servicio con ID \"{}\" eliminado exitosamente de la categoría \"{}\".",
                    id, category
                ))
                .await
            }
        }
    }
}
