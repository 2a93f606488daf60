use crate::constants::REVEAL_THRESHOLD;

/// Visibility state of one reveal-on-scroll element.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum RevealState {
    #[default]
    Pending,
    Revealed,
}

impl RevealState {
    /// Feed one visibility sample. Returns `true` only on the
    /// Pending -> Revealed transition; later samples are no-ops.
    pub fn observe(&mut self, is_intersecting: bool, visible_ratio: f64, threshold: f64) -> bool {
        match self {
            RevealState::Revealed => false,
            RevealState::Pending => {
                if is_intersecting && visible_ratio >= threshold {
                    *self = RevealState::Revealed;
                    true
                } else {
                    false
                }
            }
        }
    }
}

/// Tracks every `.reveal` element by registration index.
///
/// The browser side stores the index on the element itself, so an
/// intersection entry can be mapped back without holding DOM references here.
#[derive(Clone, Debug)]
pub struct RevealTracker {
    states: Vec<RevealState>,
    threshold: f64,
}

impl Default for RevealTracker {
    fn default() -> Self {
        Self::new(REVEAL_THRESHOLD)
    }
}

impl RevealTracker {
    pub fn new(threshold: f64) -> Self {
        Self {
            states: Vec::new(),
            threshold,
        }
    }

    pub fn threshold(&self) -> f64 {
        self.threshold
    }

    /// Register a new element in the Pending state and return its index.
    pub fn register(&mut self) -> usize {
        self.states.push(RevealState::Pending);
        self.states.len() - 1
    }

    /// Returns `true` when the element at `index` has just been revealed and
    /// the caller should apply the visible class and stop observing it.
    /// Unknown indices are ignored.
    pub fn observe(&mut self, index: usize, is_intersecting: bool, visible_ratio: f64) -> bool {
        self.observe_with_reach(index, is_intersecting, visible_ratio, 1.0)
    }

    /// Like [`observe`](Self::observe) for an element whose visible ratio can
    /// never exceed `reachable_ratio`. An element that cannot reach the
    /// threshold reveals as soon as it intersects.
    pub fn observe_with_reach(
        &mut self,
        index: usize,
        is_intersecting: bool,
        visible_ratio: f64,
        reachable_ratio: f64,
    ) -> bool {
        let threshold = if reachable_ratio < self.threshold {
            0.0
        } else {
            self.threshold
        };
        match self.states.get_mut(index) {
            Some(state) => state.observe(is_intersecting, visible_ratio, threshold),
            None => false,
        }
    }

    pub fn is_revealed(&self, index: usize) -> bool {
        matches!(self.states.get(index), Some(RevealState::Revealed))
    }

    /// Number of elements still waiting to become visible.
    pub fn pending(&self) -> usize {
        self.states
            .iter()
            .filter(|s| **s == RevealState::Pending)
            .count()
    }

    pub fn len(&self) -> usize {
        self.states.len()
    }

    pub fn is_empty(&self) -> bool {
        self.states.is_empty()
    }
}

/// Largest fraction of an element that fits in the viewport at once. Unknown
/// or degenerate sizes report 1.0.
pub fn reachable_ratio(viewport_height: f64, element_height: f64) -> f64 {
    if viewport_height > 0.0 && element_height > 0.0 {
        (viewport_height / element_height).min(1.0)
    } else {
        1.0
    }
}
