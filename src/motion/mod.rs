//! Scroll- and frame-driven motion.
//!
//! A single [`ScrollSignal`] is published through a Yew context; every
//! decorative layer derives its own transform from it with pure [`Track`]s.
//! Frame-driven effects hold a [`FrameLoop`], which stops scheduling as soon
//! as it is dropped.

pub mod frame_loop;
pub mod layers;
pub mod scroll;
pub mod track;

pub use frame_loop::FrameLoop;
pub use layers::{HeroLayers, LayerTransform, StickerLayers};
pub use scroll::{use_scroll_signal, ScrollProvider, ScrollSignal};
pub use track::Track;
