// SPDX-License-Identifier: MPL-2.0
//! `magnify_lens` shows a magnifying lens over an image as the pointer moves
//! across it.
//!
//! The lens follows the cursor and displays a zoomed copy of the image (or of
//! a separate high-resolution zoom image) positioned so the point under the
//! cursor sits at its center. Lens size and magnification come from a desktop
//! or mobile profile chosen by a viewport-width media query.
//!
//! The [`lens`] module holds all of the math and state and runs anywhere. On
//! `wasm32` the `web` module exposes a `Magnifier` class to JavaScript that
//! wires it to the DOM.

#![doc(html_root_url = "https://docs.rs/magnify_lens/0.1.0")]

pub mod config;
pub mod domain;
pub mod error;
pub mod inspect;
pub mod lens;

#[cfg(target_arch = "wasm32")]
pub mod web;

#[cfg(test)]
pub(crate) mod test_utils;
