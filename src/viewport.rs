//! Visibility tests used to cull pairs to the part of the buffer on screen.

use crate::position::Position;

pub fn is_at_or_after(position: Position, bound: Position) -> bool {
    position >= bound
}

pub fn is_at_or_before(position: Position, bound: Position) -> bool {
    position <= bound
}

/// True when either end of the span `start..=end` lies inside the window
/// `low..=high`, or when the window lies entirely inside the span.
pub fn range_visible(start: Position, end: Position, low: Position, high: Position) -> bool {
    let inside = |p: Position| is_at_or_after(p, low) && is_at_or_before(p, high);

    inside(start) || inside(end) || (is_at_or_before(start, low) && is_at_or_after(end, high))
}

/// The region of the buffer worth highlighting: the visible window grown by a
/// margin of lines above and below.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Window {
    pub top: Position,
    pub bottom: Position,
}

impl Window {
    pub fn new(top: Position, bottom: Position) -> Self {
        Self { top, bottom }
    }

    /// Builds the window from the editor's view: `top` is the first visible
    /// position and `size` the `(lines, columns)` on screen.
    pub fn from_viewport(top: Position, size: (usize, usize), margin: usize) -> Self {
        let bottom = Position::new(top.line + size.0, top.column + size.1);
        Self {
            top: Position::new(top.line.saturating_sub(margin).max(1), top.column),
            bottom: Position::new(bottom.line + margin, bottom.column),
        }
    }

    pub fn contains(&self, position: Position) -> bool {
        is_at_or_after(position, self.top) && is_at_or_before(position, self.bottom)
    }

    pub fn overlaps(&self, start: Position, end: Position) -> bool {
        range_visible(start, end, self.top, self.bottom)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn window() -> Window {
        Window::new(Position::new(10, 1), Position::new(20, 1))
    }

    #[test]
    fn test_bounds_are_inclusive() {
        let bound = Position::new(4, 2);
        assert!(is_at_or_after(bound, bound));
        assert!(is_at_or_before(bound, bound));
    }

    #[test]
    fn test_bounds_compare_lines_first() {
        let bound = Position::new(4, 10);
        assert!(is_at_or_after(Position::new(5, 1), bound));
        assert!(!is_at_or_after(Position::new(4, 9), bound));
        assert!(is_at_or_before(Position::new(3, 99), bound));
        assert!(!is_at_or_before(Position::new(4, 11), bound));
    }

    #[test]
    fn test_pair_before_window_is_hidden() {
        assert!(!window().overlaps(Position::new(5, 1), Position::new(6, 1)));
    }

    #[test]
    fn test_pair_after_window_is_hidden() {
        assert!(!window().overlaps(Position::new(21, 1), Position::new(30, 1)));
    }

    #[test]
    fn test_pair_inside_window_is_visible() {
        assert!(window().overlaps(Position::new(15, 1), Position::new(16, 1)));
    }

    #[test]
    fn test_window_nested_in_pair_is_visible() {
        assert!(window().overlaps(Position::new(1, 1), Position::new(100, 1)));
    }

    #[test]
    fn test_pair_straddling_an_edge_is_visible() {
        assert!(window().overlaps(Position::new(5, 1), Position::new(12, 4)));
        assert!(window().overlaps(Position::new(19, 8), Position::new(40, 1)));
    }

    #[test]
    fn test_contains() {
        assert!(window().contains(Position::new(10, 1)));
        assert!(window().contains(Position::new(20, 1)));
        assert!(!window().contains(Position::new(20, 2)));
        assert!(!window().contains(Position::new(9, 80)));
    }

    #[test]
    fn test_from_viewport_adds_margin() {
        let window = Window::from_viewport(Position::new(100, 1), (40, 120), 30);
        assert_eq!(window.top, Position::new(70, 1));
        assert_eq!(window.bottom, Position::new(170, 121));
    }

    #[test]
    fn test_from_viewport_clamps_at_first_line() {
        let window = Window::from_viewport(Position::new(5, 3), (10, 80), 30);
        assert_eq!(window.top, Position::new(1, 3));
        assert_eq!(window.bottom, Position::new(45, 83));
    }
}
