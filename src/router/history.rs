use super::location::Location;

/// Browser-style session history.
///
/// `push` and `replace` are the only writes the router performs. `back` and
/// `forward` stand in for the user's navigation buttons; they move the
/// cursor and report whether an entry existed in that direction.
pub trait History {
    fn location(&self) -> Location;
    fn push(&mut self, path: &str);
    fn replace(&mut self, path: &str);
    fn back(&mut self) -> bool;
    fn forward(&mut self) -> bool;
}

/// In-process history stack with a cursor, counting writes.
#[derive(Clone, Debug)]
pub struct MemoryHistory {
    entries: Vec<Location>,
    cursor: usize,
    pushes: usize,
    replaces: usize,
}

impl MemoryHistory {
    pub fn new(initial: &str) -> Self {
        Self {
            entries: vec![Location::parse(initial)],
            cursor: 0,
            pushes: 0,
            replaces: 0,
        }
    }

    pub fn pushes(&self) -> usize {
        self.pushes
    }

    pub fn replaces(&self) -> usize {
        self.replaces
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn entries(&self) -> &[Location] {
        &self.entries
    }

    pub fn cursor(&self) -> usize {
        self.cursor
    }
}

impl Default for MemoryHistory {
    fn default() -> Self {
        Self::new("/")
    }
}

impl History for MemoryHistory {
    fn location(&self) -> Location {
        self.entries[self.cursor].clone()
    }

    fn push(&mut self, path: &str) {
        // A push discards everything ahead of the cursor.
        self.entries.truncate(self.cursor + 1);
        self.entries.push(Location::parse(path));
        self.cursor = self.entries.len() - 1;
        self.pushes += 1;
    }

    fn replace(&mut self, path: &str) {
        self.entries[self.cursor] = Location::parse(path);
        self.replaces += 1;
    }

    fn back(&mut self) -> bool {
        if self.cursor == 0 {
            return false;
        }
        self.cursor -= 1;
        true
    }

    fn forward(&mut self) -> bool {
        if self.cursor + 1 >= self.entries.len() {
            return false;
        }
        self.cursor += 1;
        true
    }
}
