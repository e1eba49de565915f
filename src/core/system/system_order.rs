//! Central system ordering labels to make the per-frame sequence explicit.
//! Stages (all in `Update`):
//! 1. Input (pointer -> world-space taps)
//! 2. Route (hit-test taps, emit garden actions)
//! 3. Act (affordances, rain start, labels)
//! 4. Effects (rain timers and drops, label fades)
//! 5. Growth (apply completed waterings, phase bookkeeping)
//! 6. Persist (write the save slot)
use bevy::prelude::*;

#[derive(SystemSet, Debug, Hash, PartialEq, Eq, Clone, Copy)]
pub enum GardenSet {
    Input,
    Route,
    Act,
    Effects,
    Growth,
    Persist,
}
