/// Backing-store size for a canvas whose layout box is
/// `client_width` x `client_height` CSS pixels.
///
/// Returns `None` while the current backing store already matches. The
/// backing store tracks the displayed size exactly and is never scaled past it.
pub fn resize_target(
    client_width: i32,
    client_height: i32,
    current: (u32, u32),
) -> Option<(u32, u32)> {
    let wanted = (client_width.max(0) as u32, client_height.max(0) as u32);
    (wanted != current).then_some(wanted)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn matching_size_needs_no_resize() {
        assert_eq!(resize_target(1280, 720, (1280, 720)), None);
    }

    #[test]
    fn default_canvas_is_fitted_to_layout() {
        // Fresh canvases start at 300x150.
        assert_eq!(resize_target(1920, 1080, (300, 150)), Some((1920, 1080)));
    }

    #[test]
    fn shrinking_layout_shrinks_backing_store() {
        assert_eq!(resize_target(640, 480, (1920, 1080)), Some((640, 480)));
    }

    #[test]
    fn detached_canvas_collapses_to_zero() {
        assert_eq!(resize_target(0, 0, (300, 150)), Some((0, 0)));
        assert_eq!(resize_target(-4, 10, (0, 10)), None);
    }
}
