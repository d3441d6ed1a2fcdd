//! Receiving side of board updates.

use crate::core::{BoardError, Square};

/// Something that mirrors the board by applying update lists.
///
/// A renderer implements this to stay in sync with the engine. It only ever
/// sees the writes, never the engine's board.
pub trait UpdateSink {
    /// Apply a single cell write.
    fn apply_update(&mut self, update: &Square) -> Result<(), BoardError>;

    /// Apply writes in order.
    fn apply_updates(&mut self, updates: &[Square]) -> Result<(), BoardError> {
        updates.iter().try_for_each(|u| self.apply_update(u))
    }
}

/// Collects updates without interpreting them.
impl UpdateSink for Vec<Square> {
    fn apply_update(&mut self, update: &Square) -> Result<(), BoardError> {
        self.push(*update);
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::board::BoardState;
    use crate::core::Color;

    #[test]
    fn test_vec_sink_records_in_order() {
        let mut log: Vec<Square> = Vec::new();
        let updates = [Square::new(1, 1, Color::RED), Square::new(0, 0, Color::EMPTY)];
        log.apply_updates(&updates).unwrap();
        assert_eq!(log, updates.to_vec());
    }

    #[test]
    fn test_board_sink_mirrors_board() {
        let mut mirror = BoardState::new(4, 4);
        let updates = [Square::new(1, 1, Color::RED), Square::new(2, 1, Color::RED)];
        mirror.apply_updates(&updates).unwrap();

        assert_eq!(mirror.current_color(2, 1), Ok(Color::RED));
        assert_eq!(mirror.empty_squares(), 14);
        assert!(mirror.apply_updates(&[Square::new(9, 9, Color::RED)]).is_err());
    }
}
