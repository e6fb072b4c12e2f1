// Copyright 2025 the Canvasmap Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Pointer gesture tracker: press, move, release, escape, and the deferred
//! drag deadline.

use core::mem;

use kurbo::Point;

/// Timing thresholds for gesture disambiguation, in milliseconds.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct GestureTiming {
    /// Elapsed press time after which a press over a marker becomes a drag.
    pub min_drag_time_ms: f64,
    /// Window after the press during which movement does not disqualify a
    /// click.
    pub click_grace_time_ms: f64,
}

impl Default for GestureTiming {
    fn default() -> Self {
        Self {
            min_drag_time_ms: 300.0,
            click_grace_time_ms: 100.0,
        }
    }
}

/// Current gesture state. Exactly one phase is active at a time.
#[derive(Clone, Debug, PartialEq, Default)]
pub enum GesturePhase<K> {
    /// No pointer is down.
    #[default]
    Idle,
    /// The pointer is down and could still become a click, a drag, or a pan.
    ArmedClick {
        /// View-space press position.
        down_view: Point,
        /// Press timestamp in milliseconds.
        down_time: f64,
        /// Marker under the pointer at press time, if any. A press with no
        /// candidate pans the view when moved.
        candidate: Option<K>,
    },
    /// A marker drag is in progress.
    Dragging {
        /// The dragged marker.
        key: K,
        /// Press timestamp in milliseconds.
        down_time: f64,
    },
}

/// What the host should do with a pointer move.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum MoveDisposition<K> {
    /// No pointer is down; the move only updates hover state.
    Hover,
    /// The press is armed over a marker but the drag threshold has not
    /// elapsed; do nothing yet.
    Pending,
    /// The marker identified by the key is being dragged; emit a drag tick.
    DragTick(K),
    /// No marker is involved; pan the view by the cursor movement.
    Pan,
}

/// What the host should do with a pointer release.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum UpDisposition<K> {
    /// Nothing to resolve (no press was tracked, or the press became a pan).
    Ignored,
    /// The press never became a drag: resolve a click, against the candidate
    /// marker if one was armed, else as a map click.
    Click {
        /// Marker under the pointer at press time.
        candidate: Option<K>,
    },
    /// A drag of the marker is being released; resolve a drop or drag end.
    DragRelease(K),
}

/// Pointer gesture state machine.
///
/// Consumes pointer-down/move/up, escape, and drag-deadline events (each
/// with an explicit timestamp) and reports dispositions for the host to
/// act on. See the crate docs for the interaction contract.
#[derive(Clone, Debug, Default)]
pub struct GestureTracker<K> {
    timing: GestureTiming,
    phase: GesturePhase<K>,
    /// Set once the press outlives the grace window with any movement;
    /// a release with this unset is always a click.
    dragged: bool,
}

impl<K: Clone> GestureTracker<K> {
    /// Creates an idle tracker with the given thresholds.
    #[must_use]
    pub fn new(timing: GestureTiming) -> Self {
        Self {
            timing,
            phase: GesturePhase::Idle,
            dragged: false,
        }
    }

    /// The current phase.
    #[must_use]
    pub fn phase(&self) -> &GesturePhase<K> {
        &self.phase
    }

    /// The marker key the gesture is armed on or dragging, if any.
    #[must_use]
    pub fn candidate(&self) -> Option<&K> {
        match &self.phase {
            GesturePhase::Idle => None,
            GesturePhase::ArmedClick { candidate, .. } => candidate.as_ref(),
            GesturePhase::Dragging { key, .. } => Some(key),
        }
    }

    /// Whether the press has disqualified itself from being a click.
    #[must_use]
    pub fn dragged(&self) -> bool {
        self.dragged
    }

    /// The instant at which a stationary hold becomes a drag, while a press
    /// is armed over a marker.
    ///
    /// Hosts schedule a timer for this deadline and report it through
    /// [`Self::on_drag_deadline`]; the deadline disappears once the gesture
    /// resolves or the drag starts on its own.
    #[must_use]
    pub fn drag_deadline(&self) -> Option<f64> {
        match &self.phase {
            GesturePhase::ArmedClick {
                down_time,
                candidate: Some(_),
                ..
            } => Some(down_time + self.timing.min_drag_time_ms),
            _ => None,
        }
    }

    /// Starts tracking a press at `down_view` with the marker found under
    /// it, if any.
    ///
    /// A new press always supersedes whatever was being tracked.
    pub fn on_pointer_down(&mut self, down_view: Point, candidate: Option<K>, now_ms: f64) {
        self.phase = GesturePhase::ArmedClick {
            down_view,
            down_time: now_ms,
            candidate,
        };
        self.dragged = false;
    }

    /// Advances the gesture for a pointer move at `now_ms`.
    pub fn on_pointer_move(&mut self, now_ms: f64) -> MoveDisposition<K> {
        match &self.phase {
            GesturePhase::Idle => MoveDisposition::Hover,
            GesturePhase::ArmedClick {
                down_time,
                candidate,
                ..
            } => {
                let down_time = *down_time;
                if now_ms - down_time > self.timing.click_grace_time_ms {
                    self.dragged = true;
                }
                match candidate {
                    Some(key) => {
                        if now_ms - down_time > self.timing.min_drag_time_ms {
                            let key = key.clone();
                            self.phase = GesturePhase::Dragging {
                                key: key.clone(),
                                down_time,
                            };
                            MoveDisposition::DragTick(key)
                        } else {
                            MoveDisposition::Pending
                        }
                    }
                    None => MoveDisposition::Pan,
                }
            }
            GesturePhase::Dragging { key, .. } => {
                self.dragged = true;
                MoveDisposition::DragTick(key.clone())
            }
        }
    }

    /// Reports a drag-deadline timer firing at `now_ms`.
    ///
    /// Re-checks the current state, so a timer that outlived its gesture is
    /// a no-op. Returns the marker to tick when the hold has matured into a
    /// drag.
    pub fn on_drag_deadline(&mut self, now_ms: f64) -> Option<K> {
        match &self.phase {
            GesturePhase::ArmedClick {
                down_time,
                candidate: Some(key),
                ..
            } if now_ms - down_time >= self.timing.min_drag_time_ms => {
                let (key, down_time) = (key.clone(), *down_time);
                if now_ms - down_time > self.timing.click_grace_time_ms {
                    self.dragged = true;
                }
                self.phase = GesturePhase::Dragging {
                    key: key.clone(),
                    down_time,
                };
                Some(key)
            }
            GesturePhase::Dragging { key, down_time }
                if now_ms - down_time >= self.timing.min_drag_time_ms =>
            {
                Some(key.clone())
            }
            _ => None,
        }
    }

    /// Resolves a pointer release at `now_ms` and returns to idle.
    pub fn on_pointer_up(&mut self, now_ms: f64) -> UpDisposition<K> {
        let phase = mem::take(&mut self.phase);
        let was_dragged = mem::replace(&mut self.dragged, false);
        match phase {
            GesturePhase::Idle => UpDisposition::Ignored,
            GesturePhase::ArmedClick {
                down_time,
                candidate,
                ..
            } => {
                if !was_dragged {
                    UpDisposition::Click { candidate }
                } else if let Some(key) = candidate
                    && now_ms - down_time > self.timing.min_drag_time_ms
                {
                    UpDisposition::DragRelease(key)
                } else {
                    UpDisposition::Ignored
                }
            }
            GesturePhase::Dragging { key, down_time } => {
                if !was_dragged {
                    UpDisposition::Click {
                        candidate: Some(key),
                    }
                } else if now_ms - down_time > self.timing.min_drag_time_ms {
                    UpDisposition::DragRelease(key)
                } else {
                    UpDisposition::Ignored
                }
            }
        }
    }

    /// Abandons the gesture (escape key), returning the marker whose drag
    /// should be cancelled, if one was armed or dragging.
    pub fn on_escape(&mut self) -> Option<K> {
        self.dragged = false;
        match mem::take(&mut self.phase) {
            GesturePhase::Idle => None,
            GesturePhase::ArmedClick { candidate, .. } => candidate,
            GesturePhase::Dragging { key, .. } => Some(key),
        }
    }
}
