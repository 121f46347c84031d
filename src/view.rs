//! Map view: the UI-thread owner of [`MapCore`].
//!
//! SYSTEM CONTEXT
//! ==============
//! The view wires the presentation core to the store. Loads run as tasks
//! on the injected runtime and report back over a channel; the view drains
//! that channel on its own thread, so the core is only ever mutated here.

use std::sync::Arc;

use map_canvas::camera::Point;
use map_canvas::engine::{Action, MapCore};
use map_canvas::input::Button;
use map_canvas::render::{FrameStats, Surface};
use map_canvas::zone::RoomId;
use tokio::runtime::Handle;
use tokio::sync::mpsc::{self, UnboundedReceiver, UnboundedSender};
use tracing::debug;

use crate::config::ViewerConfig;
use crate::db::MapStore;
use crate::loader::{self, LoadOutcome};

#[cfg(test)]
#[path = "view_test.rs"]
mod tests;

pub struct MapView {
    core: MapCore,
    store: Arc<dyn MapStore>,
    runtime: Handle,
    room_id: RoomId,
    tx: UnboundedSender<LoadOutcome>,
    rx: UnboundedReceiver<LoadOutcome>,
    in_flight: usize,
}

impl MapView {
    /// Build a view and schedule the initial load. Returns without waiting
    /// for the load; until it lands the view has no center and draws nothing.
    #[must_use]
    pub fn new(store: Arc<dyn MapStore>, runtime: Handle, config: &ViewerConfig) -> Self {
        let mut core = MapCore::with_zoom(config.zoom);
        core.set_viewport(config.width, config.height);
        let (tx, rx) = mpsc::unbounded_channel();
        let mut view = Self { core, store, runtime, room_id: config.room_id, tx, rx, in_flight: 0 };
        view.reload();
        view
    }

    /// Schedule another load of the configured room and its zone.
    pub fn reload(&mut self) {
        self.in_flight += 1;
        loader::spawn_load(&self.runtime, Arc::clone(&self.store), self.room_id, self.tx.clone());
    }

    /// Apply every load that has already finished, without blocking.
    pub fn pump(&mut self) -> Vec<Action> {
        let mut actions = Vec::new();
        while let Ok(outcome) = self.rx.try_recv() {
            actions.extend(self.apply(outcome));
        }
        actions
    }

    /// Wait for the next load to finish and apply it. Returns immediately
    /// when nothing is in flight.
    pub async fn next_load(&mut self) -> Vec<Action> {
        if self.in_flight == 0 {
            return Vec::new();
        }
        match self.rx.recv().await {
            Some(outcome) => self.apply(outcome),
            None => Vec::new(),
        }
    }

    #[must_use]
    pub fn is_loading(&self) -> bool {
        self.in_flight > 0
    }

    pub fn on_pointer_down(&mut self, screen_pt: Point, button: Button) -> Vec<Action> {
        self.core.on_pointer_down(screen_pt, button)
    }

    pub fn render(&self, surface: &mut dyn Surface) -> FrameStats {
        self.core.render(surface)
    }

    pub fn set_viewport(&mut self, width: f64, height: f64) {
        self.core.set_viewport(width, height);
    }

    #[must_use]
    pub fn core(&self) -> &MapCore {
        &self.core
    }

    fn apply(&mut self, outcome: LoadOutcome) -> Vec<Action> {
        self.in_flight = self.in_flight.saturating_sub(1);
        match outcome {
            LoadOutcome::Loaded(snapshot) => {
                debug!(rooms = snapshot.rooms.len(), "zone snapshot applied");
                self.core.load_snapshot(snapshot.current_room, snapshot.rooms);
                vec![Action::RenderNeeded]
            }
            LoadOutcome::Failed => Vec::new(),
        }
    }
}
