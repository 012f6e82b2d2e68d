//! Sliding window of guess cells.

use std::collections::VecDeque;

use crate::heat::Heat;

/// Stable identifier of a cell; survives the window sliding.
pub type CellId = u32;

#[derive(Clone, Debug, PartialEq)]
pub struct Cell {
    pub id: CellId,
    pub text: String,
    pub submitted: bool,
    pub heat: Option<Heat>,
}

impl Cell {
    fn new(id: CellId) -> Self {
        Self {
            id,
            text: String::new(),
            submitted: false,
            heat: None,
        }
    }

    /// Append one letter.
    pub fn push_letter(&mut self, c: char) {
        self.text.push(c);
    }

    /// Append a space unless empty or already ending in one.
    pub fn push_space(&mut self) -> bool {
        if self.text.is_empty() || self.text.ends_with(' ') {
            return false;
        }
        self.text.push(' ');
        true
    }

    pub fn backspace(&mut self) -> bool {
        self.text.pop().is_some()
    }
}

/// Result of moving past a scored cell.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Advance {
    Next { current: CellId },
    Slid { evicted: CellId, appended: CellId },
}

#[derive(Clone, Debug)]
pub struct Board {
    cells: VecDeque<Cell>,
    current: usize,
    next_id: CellId,
}

impl Board {
    pub fn new(size: usize) -> Self {
        let size = size.max(1);
        let cells = (0..size as CellId).map(Cell::new).collect();
        Self {
            cells,
            current: 0,
            next_id: size as CellId,
        }
    }

    pub fn len(&self) -> usize {
        self.cells.len()
    }

    pub fn is_empty(&self) -> bool {
        self.cells.is_empty()
    }

    pub fn cells(&self) -> impl Iterator<Item = &Cell> {
        self.cells.iter()
    }

    pub fn current_index(&self) -> usize {
        self.current
    }

    pub fn current(&self) -> &Cell {
        &self.cells[self.current]
    }

    pub fn current_mut(&mut self) -> &mut Cell {
        &mut self.cells[self.current]
    }

    pub fn cell(&self, id: CellId) -> Option<&Cell> {
        self.cells.iter().find(|c| c.id == id)
    }

    pub fn is_at_last(&self) -> bool {
        self.current + 1 == self.cells.len()
    }

    /// Step to the next slot, sliding the window when the last one is used.
    pub fn advance(&mut self) -> Advance {
        if self.is_at_last() {
            let (evicted, appended) = self.slide();
            Advance::Slid { evicted, appended }
        } else {
            self.current += 1;
            Advance::Next {
                current: self.cells[self.current].id,
            }
        }
    }

    /// Drop the oldest cell, append a fresh one and point `current` at it.
    pub fn slide(&mut self) -> (CellId, CellId) {
        let evicted = self.cells.pop_front().map(|c| c.id).unwrap_or_default();
        let id = self.next_id;
        self.next_id += 1;
        self.cells.push_back(Cell::new(id));
        self.current = self.cells.len() - 1;
        (evicted, id)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_space_collapses() {
        let mut cell = Cell::new(0);
        assert!(!cell.push_space());
        cell.push_letter('A');
        assert!(cell.push_space());
        assert!(!cell.push_space());
        assert_eq!(cell.text, "A ");
    }

    #[test]
    fn test_advance_then_slide() {
        let mut board = Board::new(3);
        assert_eq!(board.advance(), Advance::Next { current: 1 });
        assert_eq!(board.advance(), Advance::Next { current: 2 });
        assert_eq!(
            board.advance(),
            Advance::Slid {
                evicted: 0,
                appended: 3
            }
        );
        assert_eq!(board.len(), 3);
        assert_eq!(board.current_index(), 2);
        assert_eq!(board.current().id, 3);
        let ids: Vec<CellId> = board.cells().map(|c| c.id).collect();
        assert_eq!(ids, vec![1, 2, 3]);
    }

    #[test]
    fn test_single_slot_board_always_slides() {
        let mut board = Board::new(1);
        assert!(board.is_at_last());
        assert_eq!(
            board.advance(),
            Advance::Slid {
                evicted: 0,
                appended: 1
            }
        );
        assert_eq!(board.current().id, 1);
    }
}
