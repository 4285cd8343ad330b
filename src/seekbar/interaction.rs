//! Pointer interaction state machine
//!
//! `Idle -> Dragging` on pointer down, `Dragging -> Idle` on up or cancel.
//! Every event that is accepted moves the thumb straight to the pointer, there
//! is no drag threshold. A drag commits only if progress differs from the
//! snapshot taken at pointer down (exact comparison).
//!
//! Cancel finalizes the drag exactly like up. It does not roll back.

use super::geometry::SliderState;

/// Pointer lifecycle event, x in the control's local coordinates
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum PointerEvent {
    Down(f32),
    Move(f32),
    Up(f32),
    Cancel(f32),
}

impl PointerEvent {
    pub fn x(&self) -> f32 {
        match *self {
            PointerEvent::Down(x)
            | PointerEvent::Move(x)
            | PointerEvent::Up(x)
            | PointerEvent::Cancel(x) => x,
        }
    }
}

/// Interaction phase
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub enum DragPhase {
    #[default]
    Idle,
    /// Pointer is down, `start_progress` is the value before the drag began
    Dragging { start_progress: f32 },
}

/// Result of feeding one event to the state machine
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Transition {
    /// Event does not apply in the current phase, nothing changed
    Ignored,
    /// Drag started or continued, geometry was updated
    Tracking,
    /// Drag ended. `committed` holds the final value if it changed.
    Finished { committed: Option<f32> },
}

impl Transition {
    /// Whether the event was consumed by the control
    pub fn is_consumed(&self) -> bool {
        !matches!(self, Transition::Ignored)
    }

    /// Geometry changed and the control needs repainting
    pub fn needs_redraw(&self) -> bool {
        self.is_consumed()
    }

    pub fn committed(&self) -> Option<f32> {
        match *self {
            Transition::Finished { committed } => committed,
            _ => None,
        }
    }
}

impl DragPhase {
    pub fn is_dragging(&self) -> bool {
        matches!(self, DragPhase::Dragging { .. })
    }

    /// Advance the state machine, updating `state` for accepted events
    pub fn handle(&mut self, event: PointerEvent, state: &mut SliderState) -> Transition {
        let transition = match (*self, event) {
            (DragPhase::Idle, PointerEvent::Down(x)) => {
                *self = DragPhase::Dragging {
                    start_progress: state.progress(),
                };
                state.update_from_pointer(x);
                Transition::Tracking
            }
            // a second pointer going down mid-drag just moves the thumb
            (DragPhase::Dragging { .. }, PointerEvent::Down(x) | PointerEvent::Move(x)) => {
                state.update_from_pointer(x);
                Transition::Tracking
            }
            (
                DragPhase::Dragging { start_progress },
                PointerEvent::Up(x) | PointerEvent::Cancel(x),
            ) => {
                *self = DragPhase::Idle;
                state.update_from_pointer(x);

                #[allow(clippy::float_cmp)]
                let changed = state.progress() != start_progress;
                Transition::Finished {
                    committed: changed.then_some(state.progress()),
                }
            }
            (DragPhase::Idle, _) => Transition::Ignored,
        };

        tracing::trace!(?event, ?transition, progress = state.progress(), "Seek bar pointer");
        transition
    }
}
