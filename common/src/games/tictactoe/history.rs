use super::board::Board;

/// Undo/redo over immutable board snapshots.
#[derive(Debug, Clone)]
pub struct GameHistory {
    current: Board,
    undo_stack: Vec<Board>,
    redo_stack: Vec<Board>,
}

impl GameHistory {
    pub fn new(initial: Board) -> Self {
        Self {
            current: initial,
            undo_stack: Vec::new(),
            redo_stack: Vec::new(),
        }
    }

    pub fn current(&self) -> &Board {
        &self.current
    }

    /// Makes `board` current. A new move invalidates anything that could be redone.
    pub fn push(&mut self, board: Board) {
        let previous = std::mem::replace(&mut self.current, board);
        self.undo_stack.push(previous);
        self.redo_stack.clear();
    }

    pub fn undo(&mut self) -> bool {
        match self.undo_stack.pop() {
            Some(previous) => {
                let undone = std::mem::replace(&mut self.current, previous);
                self.redo_stack.push(undone);
                true
            }
            None => false,
        }
    }

    pub fn redo(&mut self) -> bool {
        match self.redo_stack.pop() {
            Some(next) => {
                let replaced = std::mem::replace(&mut self.current, next);
                self.undo_stack.push(replaced);
                true
            }
            None => false,
        }
    }

    pub fn can_undo(&self) -> bool {
        !self.undo_stack.is_empty()
    }

    pub fn can_redo(&self) -> bool {
        !self.redo_stack.is_empty()
    }

    pub fn reset(&mut self, board: Board) {
        self.current = board;
        self.undo_stack.clear();
        self.redo_stack.clear();
    }
}
