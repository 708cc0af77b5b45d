//! Library to calculate the star rating of [osu!catch] maps.
//!
//! ## Description
//!
//! `rosu-catch` determines how hard it is to move the catcher across a map's
//! fruits and droplets. Hitobjects are provided as already decoded values;
//! parsing `.osu` files is left to other crates.
//!
//! The calculation follows [osu!lazer]'s movement skill. Hyperdashes and
//! edge-dashes are not taken into account so faster or wider patterns never
//! decrease the strain of any object. Strain peaks are still collected per
//! 750ms section, so compressing a map can merge peaks and slightly lower
//! the final rating.
//!
//! ## Usage
//!
//! ```
//! use rosu_catch::{
//!     model::hit_object::{HitObject, NestedObject},
//!     Beatmap, Difficulty,
//! };
//!
//! let map = Beatmap {
//!     cs: 4.0,
//!     hit_objects: vec![
//!         HitObject::fruit(64.0, 0.0),
//!         HitObject::juice_stream(
//!             448.0,
//!             400.0,
//!             vec![
//!                 NestedObject::fruit(448.0, 400.0),
//!                 NestedObject::tiny_droplet(400.0, 450.0),
//!                 NestedObject::droplet(352.0, 500.0),
//!                 NestedObject::fruit(256.0, 600.0),
//!             ],
//!         ),
//!         HitObject::fruit(32.0, 900.0),
//!     ],
//!     ..Beatmap::default()
//! };
//!
//! let attrs = Difficulty::new()
//!     .mods(8 + 16) // HDHR
//!     .calculate(&map)
//!     .unwrap();
//!
//! // Tiny droplets don't give combo
//! assert_eq!(attrs.max_combo(), 5);
//!
//! println!("Stars: {} | AR: {}", attrs.stars, attrs.ar);
//! ```
//!
//! ## Features
//!
//! | Flag | Description | Dependencies
//! | - | - | -
//! | `default` | No features |
//! | `tracing` | Every calculation is logged through `tracing::debug` and failing ones through `tracing::error`. | [`tracing`]
//! | `async_tokio` | Adds `Difficulty::calculate_tokio` to run the calculation on tokio's blocking thread pool. | [`tokio`]
//! | `async_std` | Adds `Difficulty::calculate_async_std` to run the calculation on async-std's blocking thread pool. | [`async-std`]
//!
//! [osu!catch]: https://osu.ppy.sh/wiki/Game_mode/osu!catch
//! [osu!lazer]: https://github.com/ppy/osu
//! [`tracing`]: https://docs.rs/tracing
//! [`tokio`]: https://docs.rs/tokio
//! [`async-std`]: https://docs.rs/async-std

#![deny(rustdoc::broken_intra_doc_links)]
#![warn(clippy::missing_const_for_fn, clippy::pedantic)]
#![allow(
    clippy::missing_errors_doc,
    clippy::module_name_repetitions,
    clippy::must_use_candidate,
    clippy::match_same_arms,
    clippy::cast_possible_truncation,
    clippy::cast_precision_loss,
    clippy::cast_sign_loss,
    clippy::explicit_iter_loop,
    clippy::similar_names
)]

#[doc(inline)]
pub use self::{
    catch::{CatchDifficultyAttributes, CatchStrains},
    difficulty::{config::DifficultyConfig, Difficulty, DifficultyError},
    model::{beatmap::Beatmap, mode::GameMode, mods::GameMods},
};

/// Types for osu!catch calculations.
pub mod catch;

/// Difficulty calculation and its configuration.
pub mod difficulty;

/// Types used in and around this crate.
pub mod model;

mod util;
