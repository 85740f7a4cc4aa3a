//! bubblekit
//!
//! Chat bubble sizing and layout. Given a message view-model, a style and a
//! maximum width, bubblekit computes the bubble size and the frames of its
//! regions for text and photo messages, and memoises the expensive part so
//! that sizing the same cells again while scrolling is cheap.
//!
//! Layers, leaves first:
//!
//! - [`model`] - geometry values, view-models, errors
//! - [`measure`] - text measurement and the composer's `Measure` capability
//! - [`style`] - style traits and their config-built defaults
//! - [`layout`] - layout contexts, models, caches and the bubble composer
//! - [`bubble`] - hosting-view facing bubbles
//! - [`sizing`] - sizing passes over chat items, primary-thread rendezvous
//!
//! plus [`config`], [`logging`] and [`source`] for the `bubblekit` binary.

pub mod bubble;
pub mod config;
pub mod layout;
pub mod logging;
pub mod measure;
pub mod model;
pub mod sizing;
pub mod source;
pub mod style;
