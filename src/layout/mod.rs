//! Text layout: wrapping and positioning lines on a canvas.
//!
//! Wrapping is greedy and counts characters, not pixels: words are packed onto
//! a line while the summed length of its words stays below a character budget.
//! Words are never split, so a single word longer than the budget gets a line
//! of its own. Lines are then placed at a fixed left margin, one line height
//! apart, below an optional centred title.
//!
//! # Example
//!
//! ```
//! use img_text::layout::wrap_words;
//!
//! assert_eq!(wrap_words("a b c", 3), vec!["a b", "c"]);
//! ```

mod margins;
mod text;

pub use margins::*;
pub use text::*;
