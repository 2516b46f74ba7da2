use chrono::{Datelike, NaiveDate};

use api::event::CalendarTile;

// the first day of the month the grid is showing, the base for stepping
// to the neighboring months
pub fn month_anchor(tiles: &[CalendarTile]) -> Option<NaiveDate> {
    tiles
        .iter()
        .find(|tile| tile.in_month)
        .and_then(|tile| tile.date.with_day(1))
}

/// Exclusive tile selection for the calendar, owned by the CalendarView
/// component.
///
/// At most one tile is selected at a time; selection is None only before
/// the synthetic activation at startup.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct TileSelection {
    selected: Option<usize>,
}

impl TileSelection {
    /// Startup selection: today's tile if the month contains it, else the
    /// first selectable tile in document order.
    pub fn initial(tiles: &[CalendarTile]) -> Self {
        let selected = tiles
            .iter()
            .position(|tile| tile.today && tile.selectable())
            .or_else(|| tiles.iter().position(|tile| tile.selectable()));

        TileSelection { selected }
    }

    pub fn selected(&self) -> Option<usize> {
        self.selected
    }

    pub fn is_selected(&self, idx: usize) -> bool {
        self.selected == Some(idx)
    }

    // replacing the index deselects the previous tile in the same transition
    pub fn select(&mut self, idx: usize) {
        self.selected = Some(idx);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn tile(date: &str, today: bool, in_month: bool) -> CalendarTile {
        CalendarTile {
            date: date.parse().unwrap(),
            today,
            in_month,
            events: Vec::new(),
        }
    }

    #[test]
    fn initial_selection_prefers_today() {
        let tiles = vec![
            tile("2024-01-01", false, true),
            tile("2024-01-02", true, true),
            tile("2024-01-03", false, true),
        ];

        assert_eq!(TileSelection::initial(&tiles).selected(), Some(1));
    }

    #[test]
    fn initial_selection_falls_back_to_first_in_month_tile() {
        let tiles = vec![
            tile("2023-12-31", false, false),
            tile("2024-01-01", false, true),
        ];

        assert_eq!(TileSelection::initial(&tiles).selected(), Some(1));
    }

    #[test]
    fn initial_selection_is_none_without_selectable_tiles() {
        assert_eq!(TileSelection::initial(&[]).selected(), None);
    }

    #[test]
    fn month_anchor_is_the_first_of_the_displayed_month() {
        let tiles = vec![
            tile("2023-12-31", false, false),
            tile("2024-01-15", false, true),
        ];

        assert_eq!(month_anchor(&tiles), Some("2024-01-01".parse().unwrap()));
        assert_eq!(month_anchor(&[]), None);
    }

    #[test]
    fn selection_is_exclusive() {
        let mut selection = TileSelection::default();

        selection.select(0);
        selection.select(4);

        assert!(selection.is_selected(4));
        assert!(!selection.is_selected(0));
    }

    #[test]
    fn reselecting_the_same_tile_is_idempotent() {
        let mut selection = TileSelection::default();

        selection.select(2);
        let before = selection;
        selection.select(2);

        assert_eq!(selection, before);
    }
}
