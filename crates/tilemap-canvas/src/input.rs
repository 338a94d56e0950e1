//! Pointer clicks to grid cells.

use std::fmt;

use tilemap_core::{Point, cell_at};

/// A pointer click, relative to the displayed surface's top-left corner.
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct PointerClick {
    pub client_x: f64,
    pub client_y: f64,
}

impl PointerClick {
    #[inline]
    pub const fn new(client_x: f64, client_y: f64) -> Self {
        Self { client_x, client_y }
    }

    /// The grid cell under this click at the given display zoom. Not
    /// clamped to the grid.
    #[inline]
    pub fn cell(&self, expand_ratio: f64) -> Point {
        cell_at(self.client_x, self.client_y, expand_ratio)
    }
}

/// Receives the cell of every click. Defaults to doing nothing.
pub struct ClickHandler(Box<dyn FnMut(Point)>);

impl ClickHandler {
    pub fn new<F>(f: F) -> Self
    where
        F: FnMut(Point) + 'static,
    {
        Self(Box::new(f))
    }

    #[inline]
    pub fn emit(&mut self, cell: Point) {
        (self.0)(cell)
    }
}

impl Default for ClickHandler {
    fn default() -> Self {
        Self::new(|_| {})
    }
}

impl fmt::Debug for ClickHandler {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("ClickHandler(..)")
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::cell::RefCell;
    use std::rc::Rc;

    #[test]
    fn click_maps_through_zoom() {
        assert_eq!(PointerClick::new(165.0, 210.0).cell(2.0), Point::new(2, 2));
        assert_eq!(PointerClick::new(165.0, 210.0).cell(1.0), Point::new(4, 4));
        assert_eq!(PointerClick::new(0.0, 0.0).cell(2.0), Point::ZERO);
    }

    #[test]
    fn handler_receives_cells() {
        let seen = Rc::new(RefCell::new(Vec::new()));
        let sink = seen.clone();
        let mut handler = ClickHandler::new(move |cell| sink.borrow_mut().push(cell));
        handler.emit(Point::new(1, 2));
        handler.emit(Point::new(-1, 0));
        assert_eq!(*seen.borrow(), vec![Point::new(1, 2), Point::new(-1, 0)]);
    }

    #[test]
    fn default_handler_is_noop() {
        ClickHandler::default().emit(Point::new(3, 3));
    }
}
