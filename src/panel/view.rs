use super::card::ServiceCard;
use super::messages;
use crate::catalog::Service;

/// The list container. Every load replaces it wholesale.
#[derive(Debug, Clone, Default, PartialEq)]
pub enum ListView {
    #[default]
    Loading,
    Empty,
    Failed,
    Cards(Vec<ServiceCard>),
}

impl ListView {
    /// Build the view for a fetched collection.
    pub fn from_services(services: &[Service]) -> Self {
        if services.is_empty() {
            ListView::Empty
        } else {
            ListView::Cards(services.iter().map(ServiceCard::from_service).collect())
        }
    }

    /// Text shown instead of cards, if any.
    pub fn placeholder(&self) -> Option<&'static str> {
        match self {
            ListView::Loading => Some(messages::LOADING),
            ListView::Empty => Some(messages::EMPTY_LIST),
            ListView::Failed => Some(messages::LOAD_FAILED),
            ListView::Cards(_) => None,
        }
    }

    pub fn cards(&self) -> &[ServiceCard] {
        match self {
            ListView::Cards(cards) => cards,
            _ => &[],
        }
    }

    pub fn cards_mut(&mut self) -> &mut [ServiceCard] {
        match self {
            ListView::Cards(cards) => cards,
            _ => &mut [],
        }
    }

    pub fn card(&self, id: &str) -> Option<&ServiceCard> {
        self.cards().iter().find(|card| card.id() == id)
    }

    pub fn card_mut(&mut self, id: &str) -> Option<&mut ServiceCard> {
        self.cards_mut().iter_mut().find(|card| card.id() == id)
    }
}
