//! Paint over the logo/URL strip at the bottom of the news template.
//!
//! The template image carries a logo and URL in a band along its bottom edge.
//! This crate replaces the bottom 8% of the image height with a solid cream
//! `(248, 246, 240)` that matches the template background, then writes the
//! result both to a clean copy and back over the original.
//!
//! # Quick Start
//!
//! ```no_run
//! use std::path::Path;
//!
//! use template_logo_eraser::erase_template;
//!
//! let outcome = erase_template(
//!     Path::new("public/template-news.png"),
//!     Path::new("public/template-news-clean.png"),
//! )
//! .expect("failed to erase template");
//! println!("painted {} rows", outcome.strip_height);
//! ```
//!
//! # In-memory use
//!
//! ```
//! use image::{DynamicImage, RgbImage};
//! use template_logo_eraser::{erase_bottom_strip, FILL_COLOR};
//!
//! let img = DynamicImage::ImageRgb8(RgbImage::new(100, 800));
//! let clean = erase_bottom_strip(&img).to_rgb8();
//! assert_eq!(clean.get_pixel(0, 799).0, FILL_COLOR);
//! assert_eq!(clean.get_pixel(0, 735).0, [0, 0, 0]);
//! ```

#![deny(missing_docs)]

mod driver;
mod eraser;
pub mod error;
pub mod strip;

pub use driver::{run, tool_dir, tool_dir_for};
pub use eraser::{
    erase_template, remove_bottom_text, remove_bottom_text_from, EraseOutcome, OUTPUT_PATH,
    TEMPLATE_PATH,
};
pub use error::{Error, Result};
pub use strip::{erase_bottom_strip, strip_height, FILL_COLOR, STRIP_FRACTION};
