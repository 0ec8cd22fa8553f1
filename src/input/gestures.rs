use std::collections::HashMap;

use egui::{Pos2, Vec2};

use super::state::{PointerSnapshot, TouchPhase};

/// A recognized gesture, in canvas device-space.
#[derive(Debug, Clone, PartialEq)]
pub enum Gesture {
    /// Tap at a position. `count` is 2 for the second tap of a double tap.
    Tap { pos: Pos2, count: u8 },
    /// Two-finger pinch; `scale` is the span ratio since the sequence began.
    Pinch { scale: f32 },
    /// Two-finger drag; `translation` is the total centroid travel since the
    /// sequence began.
    Pan { translation: Vec2 },
    /// All fingers lifted after a pinch/pan sequence.
    SequenceEnded,
}

/// Thresholds for gesture recognition.
#[derive(Debug, Clone)]
pub struct GestureConfig {
    /// Maximum duration of a tap (seconds).
    pub max_tap_duration: f64,
    /// Maximum finger travel before a touch stops being a tap candidate.
    pub max_tap_movement: f32,
    /// Maximum time between taps for a double tap (seconds).
    pub multi_tap_time: f64,
    /// Maximum distance between taps for a double tap.
    pub multi_tap_slop: f32,
    /// Minimum span-ratio change before a pinch is reported.
    pub min_pinch_scale: f32,
    /// Minimum centroid travel before a pan is reported.
    pub min_pan_distance: f32,
}

impl Default for GestureConfig {
    fn default() -> Self {
        Self {
            max_tap_duration: 0.25,
            max_tap_movement: 8.0,
            multi_tap_time: 0.3,
            multi_tap_slop: 40.0,
            min_pinch_scale: 0.02,
            min_pan_distance: 4.0,
        }
    }
}

#[derive(Debug)]
struct TwoFingerStart {
    span: f32,
    centroid: Pos2,
}

#[derive(Debug)]
struct Sequence {
    start_time: f64,
    start_pos: Pos2,
    /// False once movement or a second finger has claimed the sequence,
    /// after which it can no longer end as a tap.
    tap_candidate: bool,
    two_finger: Option<TwoFingerStart>,
}

/// Translates raw touch activity into [`Gesture`]s.
///
/// Tap and pinch/pan are mutually exclusive per touch sequence: whichever
/// recognition criterion is met first (a second finger or finger travel vs.
/// a quick release) claims the sequence.
#[derive(Debug, Default)]
pub struct GestureRecognizer {
    config: GestureConfig,
    /// Fingers currently on the surface.
    touches: HashMap<u64, Pos2>,
    sequence: Option<Sequence>,
    /// A completed tap held back until the double-tap window lapses. A
    /// second tap inside the window upgrades it; otherwise it is released
    /// as a single tap on a later frame.
    pending_tap: Option<(f64, Pos2)>,
}

impl GestureRecognizer {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_config(config: GestureConfig) -> Self {
        Self {
            config,
            ..Self::default()
        }
    }

    /// Feed one frame of pointer activity; returns the gestures it completed
    /// or advanced. Pinch and pan can both fire from the same frame.
    ///
    /// Single taps are reported one double-tap window late, so a double tap
    /// never also counts as a tap at its first touch point. Callers must
    /// keep feeding frames (empty ones are fine) for held taps to release.
    pub fn update(&mut self, input: &PointerSnapshot) -> Vec<Gesture> {
        let mut gestures = Vec::new();
        self.release_pending_tap(input.time, &mut gestures);
        let mut moved = false;
        for touch in &input.touches {
            match touch.phase {
                TouchPhase::Started => self.on_started(touch.id, touch.pos, input.time),
                TouchPhase::Moved => moved |= self.on_moved(touch.id, touch.pos),
                TouchPhase::Ended => self.on_ended(touch.id, input.time, &mut gestures),
                TouchPhase::Cancelled => self.on_cancelled(touch.id, &mut gestures),
            }
        }
        // Evaluate pinch/pan once per frame, after every finger has settled,
        // so one finger moving first does not read as a centroid shift.
        if moved {
            self.evaluate_two_finger(&mut gestures);
        }
        gestures
    }

    fn on_started(&mut self, id: u64, pos: Pos2, time: f64) {
        self.touches.insert(id, pos);

        match &mut self.sequence {
            None => {
                self.sequence = Some(Sequence {
                    start_time: time,
                    start_pos: pos,
                    tap_candidate: true,
                    two_finger: None,
                });
            }
            Some(seq) => {
                // A second finger claims the sequence for pinch/pan.
                seq.tap_candidate = false;
                if self.touches.len() == 2 {
                    let (span, centroid) = Self::span_and_centroid(&self.touches);
                    seq.two_finger = Some(TwoFingerStart { span, centroid });
                }
            }
        }
    }

    /// Returns true if a tracked finger actually moved.
    fn on_moved(&mut self, id: u64, pos: Pos2) -> bool {
        // Only track fingers whose Started we saw (e.g. inside the canvas).
        match self.touches.get_mut(&id) {
            Some(tracked) => *tracked = pos,
            None => return false,
        }
        if let Some(seq) = &mut self.sequence {
            if self.touches.len() == 1
                && seq.tap_candidate
                && (pos - seq.start_pos).length() > self.config.max_tap_movement
            {
                seq.tap_candidate = false;
            }
        }
        true
    }

    fn evaluate_two_finger(&mut self, gestures: &mut Vec<Gesture>) {
        let Some(seq) = &self.sequence else {
            return;
        };
        let Some(start) = &seq.two_finger else {
            return;
        };
        if self.touches.len() != 2 {
            return;
        }
        let (span, centroid) = Self::span_and_centroid(&self.touches);

        let scale = span / start.span.max(1.0);
        if (scale - 1.0).abs() >= self.config.min_pinch_scale {
            gestures.push(Gesture::Pinch { scale });
        }

        let translation = centroid - start.centroid;
        if translation.length() >= self.config.min_pan_distance {
            gestures.push(Gesture::Pan { translation });
        }
    }

    fn on_ended(&mut self, id: u64, time: f64, gestures: &mut Vec<Gesture>) {
        let Some(pos) = self.touches.remove(&id) else {
            return;
        };
        if !self.touches.is_empty() {
            // Keep the sequence claimed until every finger is up, but stop
            // tracking the pinch once a finger lifts.
            if let Some(seq) = &mut self.sequence {
                seq.two_finger = None;
            }
            return;
        }

        if let Some(seq) = self.sequence.take() {
            if seq.tap_candidate && time - seq.start_time <= self.config.max_tap_duration {
                gestures.extend(self.finish_tap(pos, time));
            } else if !seq.tap_candidate {
                gestures.push(Gesture::SequenceEnded);
            }
        }
    }

    fn on_cancelled(&mut self, id: u64, gestures: &mut Vec<Gesture>) {
        self.touches.remove(&id);
        if self.touches.is_empty() {
            if let Some(seq) = self.sequence.take() {
                if !seq.tap_candidate {
                    gestures.push(Gesture::SequenceEnded);
                }
            }
        }
    }

    fn finish_tap(&mut self, pos: Pos2, time: f64) -> Option<Gesture> {
        let is_double = self.pending_tap.is_some_and(|(t, p)| {
            time - t <= self.config.multi_tap_time
                && (pos - p).length() <= self.config.multi_tap_slop
        });

        if is_double {
            // The held first tap is consumed; a triple tap starts a fresh
            // count.
            self.pending_tap = None;
            Some(Gesture::Tap { pos, count: 2 })
        } else {
            self.pending_tap = Some((time, pos));
            None
        }
    }

    /// Release a held tap as a single tap once no second tap can upgrade it.
    fn release_pending_tap(&mut self, now: f64, gestures: &mut Vec<Gesture>) {
        if let Some((time, pos)) = self.pending_tap {
            if now - time > self.config.multi_tap_time {
                self.pending_tap = None;
                gestures.push(Gesture::Tap { pos, count: 1 });
            }
        }
    }

    fn span_and_centroid(touches: &HashMap<u64, Pos2>) -> (f32, Pos2) {
        let points: Vec<Pos2> = touches.values().copied().collect();
        let (a, b) = (points[0], points[1]);
        ((b - a).length(), a + (b - a) / 2.0)
    }
}
