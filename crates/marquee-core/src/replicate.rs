//! Repetition of strip content so the loop seam never shows a gap.

use crate::constants::{ITEM_COPIES, TEXT_COPIES, VIEWPORT_COVERAGE};

/// Children handed to a strip by its owner.
#[derive(Clone, Debug, PartialEq)]
pub enum Content<T> {
    Text(String),
    Items(Vec<T>),
}

impl<T> Content<T> {
    pub fn is_empty(&self) -> bool {
        match self {
            Content::Text(s) => s.is_empty(),
            Content::Items(items) => items.is_empty(),
        }
    }

    /// Fixed repetition count for this kind of content.
    pub fn multiplicity(&self) -> usize {
        match self {
            Content::Text(_) => TEXT_COPIES,
            Content::Items(_) => ITEM_COPIES,
        }
    }
}

/// Content laid out end to end inside the scrolling track.
#[derive(Clone, Debug, PartialEq)]
pub enum Replicated<T> {
    Text(Vec<String>),
    Items(Vec<T>),
}

impl<T> Replicated<T> {
    pub fn len(&self) -> usize {
        match self {
            Replicated::Text(copies) => copies.len(),
            Replicated::Items(items) => items.len(),
        }
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

/// Repeat `content` by its fixed multiplicity. Empty content stays empty.
///
/// For collaborators that own cloneable items (strings, view models). The
/// web front-end holds live DOM nodes instead and deep-clones a whole tile
/// `multiplicity()` times, which yields the same sequence.
pub fn replicate<T: Clone>(content: &Content<T>) -> Replicated<T> {
    replicate_n(content, content.multiplicity())
}

/// Repeat `content` exactly `copies` times.
pub fn replicate_n<T: Clone>(content: &Content<T>, copies: usize) -> Replicated<T> {
    if content.is_empty() {
        return match content {
            Content::Text(_) => Replicated::Text(Vec::new()),
            Content::Items(_) => Replicated::Items(Vec::new()),
        };
    }
    match content {
        Content::Text(text) => Replicated::Text(vec![text.clone(); copies]),
        Content::Items(items) => {
            let mut out = Vec::with_capacity(items.len() * copies);
            for _ in 0..copies {
                out.extend(items.iter().cloned());
            }
            Replicated::Items(out)
        }
    }
}

/// Smallest number of tiles spanning twice the viewport.
///
/// Returns 0 when the tile has no measurable width (nothing to repeat).
pub fn coverage_copies(tile_width: f64, viewport_width: f64) -> usize {
    if !tile_width.is_finite() || tile_width <= 0.0 {
        return 0;
    }
    let viewport = if viewport_width.is_finite() {
        viewport_width.max(0.0)
    } else {
        0.0
    };
    let needed = (VIEWPORT_COVERAGE * viewport / tile_width).ceil();
    (needed as usize).max(1)
}
