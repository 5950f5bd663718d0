//! Bulk visibility control over pooled render objects.
//!
//! Scene layers keep a pool of render objects and reuse them between
//! frames. When a frame needs fewer objects than the pool holds, the tail
//! of the pool is hidden rather than freed.

use log::trace;

/// Anything that can be shown or hidden by the renderer.
pub trait Visible {
    /// Current visibility flag.
    fn is_visible(&self) -> bool;

    /// Set the visibility flag.
    fn set_visible(&mut self, visible: bool);
}

/// Hide every object from `start_idx` to the end of the slice.
///
/// Returns the number of objects that were visible and are now hidden.
/// An empty slice or a `start_idx` past the end is a no-op.
///
/// # Example
/// ```
/// use drishti_view::visibility::{hide_objects, Visible};
///
/// struct Mesh { visible: bool }
///
/// impl Visible for Mesh {
///     fn is_visible(&self) -> bool { self.visible }
///     fn set_visible(&mut self, visible: bool) { self.visible = visible; }
/// }
///
/// let mut pool: Vec<Mesh> = (0..4).map(|_| Mesh { visible: true }).collect();
/// assert_eq!(hide_objects(&mut pool, 2), 2);
/// assert!(pool[1].visible);
/// assert!(!pool[3].visible);
/// ```
pub fn hide_objects<T: Visible>(objects: &mut [T], start_idx: usize) -> usize {
    set_range_visible(objects, start_idx, false)
}

/// Show every object from `start_idx` to the end of the slice.
///
/// Returns the number of objects whose visibility changed.
pub fn show_objects<T: Visible>(objects: &mut [T], start_idx: usize) -> usize {
    set_range_visible(objects, start_idx, true)
}

fn set_range_visible<T: Visible>(objects: &mut [T], start_idx: usize, visible: bool) -> usize {
    let Some(tail) = objects.get_mut(start_idx..) else {
        return 0;
    };

    let mut changed = 0;
    for object in tail.iter_mut() {
        if object.is_visible() != visible {
            changed += 1;
        }
        object.set_visible(visible);
    }

    if changed > 0 {
        trace!(
            "Set visible={} on {} of {} objects from index {}",
            visible,
            changed,
            objects.len(),
            start_idx
        );
    }
    changed
}
