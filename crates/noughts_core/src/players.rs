//! Player names bound to marks.

use derive_getters::Getters;
use serde::{Deserialize, Serialize};
use tracing::instrument;

use crate::{Mark, StartError};

/// The two players of a game, with names already trimmed.
#[derive(Debug, Clone, PartialEq, Eq, Getters, Serialize, Deserialize)]
pub struct Players {
    /// Name of the player holding X.
    x: String,
    /// Name of the player holding O.
    o: String,
}

impl Players {
    /// Validates and trims both names.
    ///
    /// # Errors
    ///
    /// Returns [`StartError::BlankName`] or [`StartError::BlankNames`] when
    /// a name is empty after trimming.
    #[instrument(skip(name_x, name_o))]
    pub fn new(name_x: &str, name_o: &str) -> Result<Self, StartError> {
        let x = name_x.trim();
        let o = name_o.trim();
        match (x.is_empty(), o.is_empty()) {
            (true, true) => Err(StartError::BlankNames),
            (true, false) => Err(StartError::BlankName(Mark::X)),
            (false, true) => Err(StartError::BlankName(Mark::O)),
            (false, false) => Ok(Self {
                x: x.to_string(),
                o: o.to_string(),
            }),
        }
    }

    /// Returns the name bound to `mark`.
    pub fn name(&self, mark: Mark) -> &str {
        match mark {
            Mark::X => &self.x,
            Mark::O => &self.o,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_names_are_trimmed() {
        let players = Players::new("  Alice ", "\tBob\n").unwrap();
        assert_eq!(players.x(), "Alice");
        assert_eq!(players.name(Mark::O), "Bob");
    }

    #[test]
    fn test_blank_names_rejected() {
        assert_eq!(Players::new(" ", "Bob"), Err(StartError::BlankName(Mark::X)));
        assert_eq!(Players::new("Alice", ""), Err(StartError::BlankName(Mark::O)));
        assert_eq!(Players::new("", "  "), Err(StartError::BlankNames));
    }
}
