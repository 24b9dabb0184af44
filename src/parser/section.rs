//! Section markers and their write cursors
//!
//! A `*<letter>` line selects the active section. Each data section keeps
//! its own next-row cursor; entering a section resets only that section's
//! cursor, the others keep counting across interleaved blocks.

/// One labeled block of the run file, selected by the letter after `*`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Section {
    Parameters, // *P
    Velocity,   // *V
    Energy,     // *W
    Position,   // *X
    Other(char), // any other letter: lines are read but produce nothing
}

impl Section {
    pub fn from_marker(letter: char) -> Self {
        match letter {
            'P' => Section::Parameters,
            'V' => Section::Velocity,
            'W' => Section::Energy,
            'X' => Section::Position,
            other => Section::Other(other),
        }
    }

    pub fn letter(&self) -> char {
        match self {
            Section::Parameters => 'P',
            Section::Velocity => 'V',
            Section::Energy => 'W',
            Section::Position => 'X',
            Section::Other(c) => *c,
        }
    }
}

/// Explicit per-section write cursors, owned by the parser.
#[derive(Debug, Default)]
pub struct SectionCursors {
    velocity: usize,
    energy: usize,
    position: usize,
}

impl SectionCursors {
    /// Called on a section marker: that section restarts at row 0.
    pub fn reset(&mut self, section: Section) {
        match section {
            Section::Velocity => self.velocity = 0,
            Section::Energy => self.energy = 0,
            Section::Position => self.position = 0,
            // Parameters and inert sections carry no cursor
            _ => {}
        }
    }

    /// Claim the next row index for a data section and advance its cursor.
    /// Returns `None` for sections that take no data rows.
    pub fn claim(&mut self, section: Section) -> Option<usize> {
        let slot = match section {
            Section::Velocity => &mut self.velocity,
            Section::Energy => &mut self.energy,
            Section::Position => &mut self.position,
            _ => return None,
        };
        let row = *slot;
        *slot += 1;
        Some(row)
    }
}
