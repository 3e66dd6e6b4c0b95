/// Viewport sentinel for infinite scrolling
///
/// Watches a single grid item (the last tile of the last column) and
/// reports when it first scrolls into view so the feed can request the
/// next page. The sentinel owns at most one observation at a time: the
/// previous observation is always released before a new one is installed,
/// so an orphaned watch can never fire twice for the same scroll.

/// Gating conditions supplied by the feed coordinator.
///
/// A visibility transition only counts while no fetch is in flight and the
/// service still has pages to give; this is what stops bounce-back
/// scrolling from dispatching duplicate page requests.
#[derive(Debug, Clone, Copy)]
pub struct LoadGate {
    pub is_loading: bool,
    pub has_more: bool,
}

/// A single active observation: which item is watched and whether it has
/// already been seen inside the viewport.
struct Observation {
    target: String,
    seen_visible: bool,
}

/// Watches at most one grid item and fires once when it becomes visible.
pub struct ViewportSentinel {
    observed: Option<Observation>,
}

impl ViewportSentinel {
    pub fn new() -> Self {
        ViewportSentinel { observed: None }
    }

    /// Point the sentinel at a new target.
    ///
    /// Any prior observation is released first. Watching the item that is
    /// already observed keeps its visibility state, so a tile that stays
    /// on screen does not re-fire. `None` releases the observation without
    /// installing a replacement (the slot is currently unmounted).
    pub fn watch(&mut self, target: Option<&str>) {
        match target {
            Some(id) => {
                if self.observed.as_ref().map(|obs| obs.target.as_str()) == Some(id) {
                    return;
                }
                self.observed = Some(Observation {
                    target: id.to_owned(),
                    seen_visible: false,
                });
            }
            None => self.observed = None,
        }
    }

    /// Feed a visibility reading for `target` into the sentinel.
    ///
    /// Returns `true` exactly when the watched item transitions from
    /// not-visible to visible while the gate allows another page. Readings
    /// for items other than the watched one are ignored, as are repeat
    /// readings while the item stays visible.
    pub fn notify(&mut self, target: &str, visible: bool, gate: LoadGate) -> bool {
        let Some(observation) = self.observed.as_mut() else {
            return false;
        };
        if observation.target != target {
            return false;
        }

        let was_visible = observation.seen_visible;
        observation.seen_visible = visible;

        visible && !was_visible && !gate.is_loading && gate.has_more
    }

    /// The id of the currently watched item, if any.
    pub fn watched(&self) -> Option<&str> {
        self.observed.as_ref().map(|obs| obs.target.as_str())
    }
}

impl Default for ViewportSentinel {
    fn default() -> Self {
        Self::new()
    }
}
