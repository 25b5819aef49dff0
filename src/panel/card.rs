//! Editable representation of one service in the list.

use super::form::ServiceForm;
use crate::catalog::Service;

/// Thumbnail of an image already stored on the server.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ImagePreview {
    pub src: String,
}

/// Behaviour requested from a card, keyed by the service id it is bound to.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CardAction {
    Save(String),
    Delete(String),
    RemoveImage { id: String, index: usize },
}

#[derive(Debug, Clone, PartialEq)]
pub struct ServiceCard {
    id: String,
    pub form: ServiceForm,
    previews: Vec<ImagePreview>,
    selected_image: usize,
}

impl ServiceCard {
    pub fn from_service(service: &Service) -> Self {
        Self {
            id: service.id.clone(),
            form: ServiceForm::from_service(service),
            previews: service
                .imagens
                .iter()
                .map(|image| ImagePreview {
                    src: image.url().to_string(),
                })
                .collect(),
            selected_image: 0,
        }
    }

    pub fn id(&self) -> &str {
        &self.id
    }

    pub fn previews(&self) -> &[ImagePreview] {
        &self.previews
    }

    /// `false` renders the "no images" placeholder instead of a gallery.
    pub fn has_images(&self) -> bool {
        !self.previews.is_empty()
    }

    pub fn selected_image(&self) -> usize {
        self.selected_image
    }

    pub fn select_next_image(&mut self) {
        if self.selected_image + 1 < self.previews.len() {
            self.selected_image += 1;
        }
    }

    pub fn select_prev_image(&mut self) {
        self.selected_image = self.selected_image.saturating_sub(1);
    }

    /// Detach a preview. Only the view changes; the server keeps the image
    /// until the card is saved.
    pub fn remove_image(&mut self, index: usize) -> Option<ImagePreview> {
        if index >= self.previews.len() {
            return None;
        }
        let removed = self.previews.remove(index);
        if self.selected_image >= self.previews.len() {
            self.selected_image = self.previews.len().saturating_sub(1);
        }
        Some(removed)
    }

    /// Sources of the previews still attached, in display order.
    pub fn retained_sources(&self) -> Vec<String> {
        self.previews.iter().map(|p| p.src.clone()).collect()
    }

    pub fn save_action(&self) -> CardAction {
        CardAction::Save(self.id.clone())
    }

    pub fn delete_action(&self) -> CardAction {
        CardAction::Delete(self.id.clone())
    }

    /// Remove the currently selected preview, if there is one.
    pub fn remove_selected_action(&self) -> Option<CardAction> {
        self.has_images().then(|| CardAction::RemoveImage {
            id: self.id.clone(),
            index: self.selected_image,
        })
    }
}
