//! Focus-wrap computation for the open menu
//!
//! Pure decision function for the keyboard focus trap: given where focus
//! currently sits inside the ordered focusable list, decide whether a Tab
//! press wraps around the edge or falls through to the browser's default
//! order.

/// Compute the wrap target for a Tab press.
///
/// `position` is the index of the currently focused element within the
/// focusable list, or `None` when focus sits outside it. `backward` is the
/// Shift modifier. Returns `Some(target)` when default navigation must be
/// suppressed and focus moved to `target`; `None` means pass through.
///
/// Wrapping only happens at the edges: Shift+Tab on the first element wraps
/// to the last, Tab on the last wraps to the first. An empty list never
/// wraps.
#[must_use]
pub fn wrap_target(position: Option<usize>, len: usize, backward: bool) -> Option<usize> {
    if len == 0 {
        return None;
    }
    let position = position?;
    if backward && position == 0 {
        Some(len - 1)
    } else if !backward && position == len - 1 {
        Some(0)
    } else {
        None
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_list_never_wraps() {
        assert_eq!(wrap_target(None, 0, false), None);
        assert_eq!(wrap_target(Some(0), 0, true), None);
    }

    #[test]
    fn focus_outside_the_list_passes_through() {
        assert_eq!(wrap_target(None, 4, false), None);
        assert_eq!(wrap_target(None, 4, true), None);
    }

    #[test]
    fn shift_tab_on_first_wraps_to_last() {
        assert_eq!(wrap_target(Some(0), 4, true), Some(3));
    }

    #[test]
    fn tab_on_last_wraps_to_first() {
        assert_eq!(wrap_target(Some(3), 4, false), Some(0));
    }

    #[test]
    fn interior_positions_pass_through() {
        assert_eq!(wrap_target(Some(1), 4, false), None);
        assert_eq!(wrap_target(Some(2), 4, true), None);
        assert_eq!(wrap_target(Some(0), 4, false), None);
        assert_eq!(wrap_target(Some(3), 4, true), None);
    }

    #[test]
    fn single_element_wraps_onto_itself() {
        assert_eq!(wrap_target(Some(0), 1, false), Some(0));
        assert_eq!(wrap_target(Some(0), 1, true), Some(0));
    }
}
