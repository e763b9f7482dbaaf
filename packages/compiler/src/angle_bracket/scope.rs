//! Lexical Scope
//!
//! Names introduced as block params by the programs enclosing the node
//! being visited.

use smallvec::SmallVec;

#[derive(Debug, Clone, Default)]
pub struct LexicalScope {
    locals: SmallVec<[String; 8]>,
}

impl LexicalScope {
    pub fn new() -> Self {
        Self::default()
    }

    /// Bring a program's block params into scope.
    pub fn push_all(&mut self, names: &[String]) {
        self.locals.extend(names.iter().cloned());
    }

    /// Drop the `count` most recently pushed names.
    pub fn pop_n(&mut self, count: usize) {
        let len = self.locals.len().saturating_sub(count);
        self.locals.truncate(len);
    }

    pub fn contains(&self, name: &str) -> bool {
        self.locals.iter().any(|local| local == name)
    }

    pub fn len(&self) -> usize {
        self.locals.len()
    }

    pub fn is_empty(&self) -> bool {
        self.locals.is_empty()
    }
}
