//! Presentation commands. The session emits these as a diff; the web shell
//! applies them to the DOM. Classes are a projection of game state, never read back.

use super::board::CellId;
use crate::heat::{Heat, ParticleKind};

#[derive(Clone, Debug, PartialEq)]
pub enum Effect {
    /// Replace the visible text of a cell.
    SetText { cell: CellId, text: String },
    /// Add the `checking` class while a guess is being looked up.
    Checking { cell: CellId },
    ClearChecking { cell: CellId },
    /// Cell is frozen; add the `submitted` class.
    Submitted { cell: CellId },
    Heat { cell: CellId, heat: Heat },
    /// Short-lived decorative elements inside a cell.
    Particles {
        cell: CellId,
        kind: ParticleKind,
        count: u8,
    },
    /// "Word not found" toast.
    NotFound,
    /// Play the exit animation then remove the cell element.
    SlideOut { cell: CellId },
    /// Append a fresh empty cell at the end of the board.
    Append { cell: CellId },
    /// Mark the editable cell.
    Activate { cell: CellId },
    Won { word: String },
}

/// Effects for a freshly scored cell: drop `checking`, add the heat class,
/// spawn particles proportional to the heat.
pub fn present_heat(cell: CellId, heat: Heat) -> Vec<Effect> {
    let mut out = vec![Effect::ClearChecking { cell }, Effect::Heat { cell, heat }];
    let count = heat.particle_count();
    if count > 0 {
        out.push(Effect::Particles {
            cell,
            kind: heat.particle_kind(),
            count,
        });
    }
    out
}
