//! Board view state, kept current purely through engine notifications.

use std::cell::RefCell;
use std::rc::Rc;
use strictly_lines::{GameEngine, Player, Rules, Selection, SubscriptionId, Tile, Winner};
use tracing::{debug, instrument};

/// What the board widget needs to draw: marks, focus and the winning line.
///
/// A view never reads the engine's board. It starts empty and replays what
/// the engine announces, the way each on-screen tile tracks its own mark.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BoardView {
    size: usize,
    marks: Vec<Option<Player>>,
    focus: Option<Tile>,
    winner: Option<Winner>,
}

impl BoardView {
    /// Creates an empty view for the board `rules` describe.
    pub fn new(rules: Rules) -> Self {
        Self::empty(rules.size())
    }

    fn empty(size: usize) -> Self {
        Self {
            size,
            marks: vec![None; size * size],
            focus: None,
            winner: None,
        }
    }

    /// Creates a view and subscribes it to every engine notification.
    ///
    /// Returns the shared view and its subscription ids.
    #[instrument(skip(engine))]
    pub fn attach(engine: &mut GameEngine) -> (Rc<RefCell<Self>>, Vec<SubscriptionId>) {
        let view = Rc::new(RefCell::new(Self::new(engine.rules())));

        let focus = Rc::clone(&view);
        let select = Rc::clone(&view);
        let win = Rc::clone(&view);
        let reset = Rc::clone(&view);
        let ids = vec![
            engine.on_focus(move |tile| focus.borrow_mut().focus_changed(*tile)),
            engine.on_select(move |selection| select.borrow_mut().selected(selection)),
            engine.on_win(move |winner| win.borrow_mut().won(winner)),
            engine.on_reset(move |_| reset.borrow_mut().cleared()),
        ];

        debug!(subscriptions = ids.len(), "Board view attached");
        (view, ids)
    }

    fn index(&self, tile: Tile) -> Option<usize> {
        (tile.x < self.size && tile.y < self.size).then(|| tile.y * self.size + tile.x)
    }

    fn focus_changed(&mut self, tile: Tile) {
        self.focus = Some(tile);
    }

    fn selected(&mut self, selection: &Selection) {
        if let Some(i) = self.index(selection.tile) {
            self.marks[i] = Some(selection.player);
        }
    }

    fn won(&mut self, winner: &Winner) {
        self.winner = Some(winner.clone());
    }

    fn cleared(&mut self) {
        *self = Self::empty(self.size);
    }

    /// Board edge length.
    pub fn size(&self) -> usize {
        self.size
    }

    /// Mark shown on `tile`.
    pub fn mark(&self, tile: Tile) -> Option<Player> {
        self.index(tile).and_then(|i| self.marks[i])
    }

    /// Whether `tile` has keyboard focus.
    pub fn is_focused(&self, tile: Tile) -> bool {
        self.focus == Some(tile)
    }

    /// Whether `tile` belongs to the winning line.
    pub fn is_highlighted(&self, tile: Tile) -> bool {
        self.winner.as_ref().is_some_and(|w| w.contains(tile))
    }

    /// The announced winner.
    pub fn winner(&self) -> Option<&Winner> {
        self.winner.as_ref()
    }

    /// The board takes no more input once someone has won.
    pub fn is_locked(&self) -> bool {
        self.winner.is_some()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use strictly_lines::Direction;

    #[test]
    fn test_view_follows_selects() {
        let mut engine = GameEngine::new();
        let (view, _) = BoardView::attach(&mut engine);

        engine.select(1, 2);
        engine.select(3, 0);

        let view = view.borrow();
        assert_eq!(view.mark(Tile::new(1, 2)), Some(Player::X));
        assert_eq!(view.mark(Tile::new(3, 0)), Some(Player::O));
        assert_eq!(view.mark(Tile::new(0, 0)), None);
    }

    #[test]
    fn test_view_follows_focus() {
        let mut engine = GameEngine::new();
        let (view, _) = BoardView::attach(&mut engine);

        engine.move_focus(Direction::Right);
        engine.move_focus(Direction::Right);

        assert!(view.borrow().is_focused(Tile::new(1, 0)));
        assert!(!view.borrow().is_focused(Tile::new(0, 0)));
    }

    #[test]
    fn test_view_highlights_winning_line_and_locks() {
        let mut engine = GameEngine::new();
        let (view, _) = BoardView::attach(&mut engine);

        for (x, y) in [(0, 4), (0, 0), (1, 3), (1, 0), (2, 2), (2, 0), (3, 1)] {
            engine.select(x, y);
        }

        let view = view.borrow();
        assert!(view.is_locked());
        assert_eq!(view.winner().map(|w| w.player), Some(Player::X));
        for tile in [Tile::new(0, 4), Tile::new(1, 3), Tile::new(2, 2), Tile::new(3, 1)] {
            assert!(view.is_highlighted(tile));
        }
        assert!(!view.is_highlighted(Tile::new(0, 0)));
    }

    #[test]
    fn test_reset_clears_view() {
        let mut engine = GameEngine::new();
        let (view, _) = BoardView::attach(&mut engine);
        engine.move_focus(Direction::Down);
        engine.select(0, 0);

        engine.reset();

        assert_eq!(*view.borrow(), BoardView::new(Rules::default()));
    }

    #[test]
    fn test_detached_view_goes_stale() {
        let mut engine = GameEngine::new();
        let (view, ids) = BoardView::attach(&mut engine);
        for id in ids {
            assert!(engine.unsubscribe(id));
        }

        engine.select(0, 0);
        assert_eq!(view.borrow().mark(Tile::new(0, 0)), None);
    }
}
