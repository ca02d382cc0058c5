//! Feed state and the actions that change it.

use std::rc::Rc;

use p2p_feed::{FeedMessage, Offers, Sender};
use yew::prelude::*;

/// State behind the feed and profile panels.
#[derive(Clone, Debug, PartialEq)]
pub struct FeedState {
    /// Currently selected message id.
    pub msg_id: i64,
    /// Bumped on every selection; tags the fetch issued for it.
    pub generation: u64,
    /// A fetch for the current selection is in flight.
    pub loading: bool,
    pub message: FeedMessage,
    pub sender: Option<Sender>,
    pub offers: Offers,
}

pub enum FeedAction {
    /// User picked a message.
    Select(i64),
    /// The fetch tagged `generation` returned a message.
    Loaded {
        generation: u64,
        message: FeedMessage,
    },
    /// The fetch tagged `generation` failed.
    Failed { generation: u64 },
    /// The offers listing arrived.
    OffersLoaded(Offers),
}

impl FeedState {
    /// State before the first fetch for `msg_id` completes.
    pub fn new(msg_id: i64) -> Self {
        Self {
            msg_id,
            generation: 0,
            loading: true,
            message: FeedMessage::default(),
            sender: None,
            offers: Offers::default(),
        }
    }

    pub fn apply(&mut self, action: FeedAction) {
        match action {
            FeedAction::Select(id) => {
                if id != self.msg_id {
                    self.msg_id = id;
                    self.generation += 1;
                    self.loading = true;
                }
            }
            FeedAction::Loaded {
                generation,
                message,
            } => {
                if generation == self.generation {
                    self.sender = message.sender.clone();
                    self.message = message;
                    self.loading = false;
                }
            }
            // Prior message and sender stay on screen.
            FeedAction::Failed { generation } => {
                if generation == self.generation {
                    self.loading = false;
                }
            }
            FeedAction::OffersLoaded(offers) => self.offers = offers,
        }
    }
}

impl Reducible for FeedState {
    type Action = FeedAction;

    fn reduce(self: Rc<Self>, action: Self::Action) -> Rc<Self> {
        let mut next = (*self).clone();
        next.apply(action);
        Rc::new(next)
    }
}
