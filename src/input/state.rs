use egui::{self, Pos2};

/// Phase of a touch interaction.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TouchPhase {
    Started,
    Moved,
    Ended,
    Cancelled,
}

impl From<egui::TouchPhase> for TouchPhase {
    fn from(phase: egui::TouchPhase) -> Self {
        match phase {
            egui::TouchPhase::Start => TouchPhase::Started,
            egui::TouchPhase::Move => TouchPhase::Moved,
            egui::TouchPhase::End => TouchPhase::Ended,
            egui::TouchPhase::Cancel => TouchPhase::Cancelled,
        }
    }
}

/// A single touch (or synthesized mouse) contact.
#[derive(Debug, Clone, Copy)]
pub struct TouchPoint {
    pub id: u64,
    pub pos: Pos2,
    pub phase: TouchPhase,
}

/// The raw pointer activity of one frame, in canvas device-space.
///
/// Mouse input is synthesized into a single touch with id 0 so the gesture
/// recognizer only has to deal with one event vocabulary.
#[derive(Debug, Clone, Default)]
pub struct PointerSnapshot {
    pub touches: Vec<TouchPoint>,
    /// Frame time in seconds, from [`crate::util::time`].
    pub time: f64,
}

impl PointerSnapshot {
    pub fn new(time: f64) -> Self {
        Self {
            touches: Vec::new(),
            time,
        }
    }

    /// Collect this frame's touch and primary-pointer events from egui.
    pub fn gather(ctx: &egui::Context, time: f64) -> Self {
        let mut snapshot = Self::new(time);

        ctx.input(|i| {
            let mut saw_touch = false;
            for event in &i.events {
                if let egui::Event::Touch { id, phase, pos, .. } = event {
                    saw_touch = true;
                    snapshot.touches.push(TouchPoint {
                        id: id.0,
                        pos: *pos,
                        phase: (*phase).into(),
                    });
                }
            }

            // Fall back to mouse events when the platform reports no touches.
            if !saw_touch {
                for event in &i.events {
                    match event {
                        egui::Event::PointerButton {
                            pos,
                            button: egui::PointerButton::Primary,
                            pressed,
                            ..
                        } => {
                            snapshot.touches.push(TouchPoint {
                                id: 0,
                                pos: *pos,
                                phase: if *pressed {
                                    TouchPhase::Started
                                } else {
                                    TouchPhase::Ended
                                },
                            });
                        }
                        egui::Event::PointerMoved(pos) if i.pointer.primary_down() => {
                            snapshot.touches.push(TouchPoint {
                                id: 0,
                                pos: *pos,
                                phase: TouchPhase::Moved,
                            });
                        }
                        _ => {}
                    }
                }
            }
        });

        snapshot
    }

    pub fn push(&mut self, id: u64, pos: Pos2, phase: TouchPhase) {
        self.touches.push(TouchPoint { id, pos, phase });
    }
}
