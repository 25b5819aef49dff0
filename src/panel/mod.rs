//! The service admin panel: list container, creation form and the CRUD
//! operations that tie them to a [`CatalogApi`].

pub mod card;
pub mod dialogs;
pub mod form;
pub mod messages;
pub mod view;

pub use card::{CardAction, ImagePreview, ServiceCard};
pub use dialogs::Dialogs;
pub use form::{FieldError, FormField, ServiceFields, ServiceForm};
pub use view::ListView;

use crate::catalog::{ApiError, CatalogApi, ServicePayload};
use crate::encoding::encode_files;
use std::path::PathBuf;
use tracing::{debug, error, info, warn};

/// How a user-facing operation ended.
///
/// Failures have already been reported through [`Dialogs`] by the time this
/// is returned.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Outcome {
    /// The server accepted the change and the list was reloaded
    Done,
    /// The user declined a confirmation
    Cancelled,
    /// Validation or a file read failed before any request
    Rejected,
    /// The request failed or the server refused it
    Failed,
}

impl Outcome {
    pub fn is_done(&self) -> bool {
        matches!(self, Outcome::Done)
    }
}

pub struct AdminPanel<A: CatalogApi> {
    api: A,
    container: ListView,
    creation: ServiceForm,
}

impl<A: CatalogApi> AdminPanel<A> {
    pub fn new(api: A) -> Self {
        Self {
            api,
            container: ListView::Loading,
            creation: ServiceForm::new(),
        }
    }

    pub fn api(&self) -> &A {
        &self.api
    }

    pub fn container(&self) -> &ListView {
        &self.container
    }

    pub fn container_mut(&mut self) -> &mut ListView {
        &mut self.container
    }

    pub fn creation_form(&self) -> &ServiceForm {
        &self.creation
    }

    pub fn creation_form_mut(&mut self) -> &mut ServiceForm {
        &mut self.creation
    }

    /// Fetch the collection and replace the container with it.
    ///
    /// Never fails; a failed fetch turns into the error placeholder.
    pub async fn load_services(&mut self) {
        self.container = ListView::Loading;
        match self.api.list().await {
            Ok(services) => {
                info!("Loaded {} services", services.len());
                self.container = ListView::from_services(&services);
            }
            Err(e) => {
                error!("Failed to load services: {}", e);
                self.container = ListView::Failed;
            }
        }
    }

    /// Submit the creation form.
    pub async fn create_service(&mut self, dialogs: &mut dyn Dialogs) -> Outcome {
        let fields = match self.creation.validate() {
            Ok(fields) => fields,
            Err(e) => {
                debug!("Create rejected: {}", e);
                dialogs.alert(messages::INVALID_FIELDS);
                return Outcome::Rejected;
            }
        };

        let files = self.creation.selected_files();
        let imagens = match encode_or_alert(&files, dialogs, messages::CREATE_FAILED).await {
            Some(imagens) => imagens,
            None => return Outcome::Rejected,
        };

        let payload = fields.into_payload(imagens);
        match self.api.create(&payload).await {
            Ok(()) => {
                info!("Created service {:?}", payload.nome);
                dialogs.alert(messages::CREATED);
                self.reset_creation_form();
                self.load_services().await;
                Outcome::Done
            }
            Err(e) => {
                report_failure(&e, "create service", dialogs, messages::CREATE_FAILED);
                Outcome::Failed
            }
        }
    }

    /// Save the card bound to `id`.
    ///
    /// Existing images are whatever previews the card still shows, followed
    /// by the newly selected files.
    pub async fn update_service(&mut self, id: &str, dialogs: &mut dyn Dialogs) -> Outcome {
        let Some(card) = self.container.card(id) else {
            warn!("No card for service {}", id);
            return Outcome::Rejected;
        };

        let fields = match card.form.validate() {
            Ok(fields) => fields,
            Err(e) => {
                debug!("Update of {} rejected: {}", id, e);
                dialogs.alert(messages::INVALID_FIELDS);
                return Outcome::Rejected;
            }
        };
        let mut imagens = card.retained_sources();
        let files = card.form.selected_files();

        let added = match encode_or_alert(&files, dialogs, messages::UPDATE_FAILED).await {
            Some(added) => added,
            None => return Outcome::Rejected,
        };
        imagens.extend(added);

        let payload: ServicePayload = fields.into_payload(imagens);
        match self.api.update(id, &payload).await {
            Ok(()) => {
                info!("Updated service {} ({} images)", id, payload.imagens.len());
                dialogs.alert(messages::UPDATED);
                self.load_services().await;
                Outcome::Done
            }
            Err(e) => {
                report_failure(&e, "update service", dialogs, messages::UPDATE_FAILED);
                Outcome::Failed
            }
        }
    }

    /// Delete a service after confirmation.
    pub async fn delete_service(&mut self, id: &str, dialogs: &mut dyn Dialogs) -> Outcome {
        if !dialogs.confirm(messages::CONFIRM_DELETE) {
            debug!("Delete of {} cancelled", id);
            return Outcome::Cancelled;
        }

        match self.api.delete(id).await {
            Ok(()) => {
                info!("Deleted service {}", id);
                dialogs.alert(messages::DELETED);
                self.load_services().await;
                Outcome::Done
            }
            Err(e) => {
                report_failure(&e, "delete service", dialogs, messages::DELETE_FAILED);
                Outcome::Failed
            }
        }
    }

    /// Drop a preview from a card without contacting the server.
    pub fn remove_image(&mut self, id: &str, index: usize) -> Option<ImagePreview> {
        let removed = self.container.card_mut(id)?.remove_image(index);
        if let Some(preview) = &removed {
            debug!("Detached image {} from card {}: {}", index, id, preview.src);
        }
        removed
    }

    pub fn reset_creation_form(&mut self) {
        self.creation.reset();
    }
}

async fn encode_or_alert(
    files: &[PathBuf],
    dialogs: &mut dyn Dialogs,
    fallback: &str,
) -> Option<Vec<String>> {
    match encode_files(files).await {
        Ok(encoded) => Some(encoded),
        Err(e) => {
            error!("Failed to encode images: {}", e);
            match e.path() {
                Some(path) => dialogs.alert(&messages::unreadable_file(path)),
                None => dialogs.alert(fallback),
            }
            None
        }
    }
}

fn report_failure(err: &ApiError, what: &str, dialogs: &mut dyn Dialogs, fallback: &str) {
    error!("Failed to {}: {}", what, err);
    dialogs.alert(&err.user_message(fallback));
}
