//! # huebound-sampler — bounded-region random colors
//!
//! Samples visually pleasing colors by walking HSB space one component
//! at a time, each step constrained by the previous one:
//!
//! ```text
//! SampleRequest (hue selector, luminosity, seed, count, format)
//!     │
//!     ▼
//! hue.rs:        selector → closed degree interval → hue draw
//!     │
//!     ▼
//! dictionary.rs: hue → color family → saturation range
//!     │
//!     ▼
//! sampler.rs:    saturation draw, then brightness draw under the
//!                family's lower-bounds envelope
//!     │
//!     ▼
//! huebound-color: Hsb → hex / rgb / hsl views
//! ```
//!
//! # Determinism
//!
//! A seeded request is a pure function of its inputs: the random state
//! lives in a [`Sampler`] owned by the call, never in a global, and the
//! [`Dictionary`] is an immutable `static`. Any number of threads may
//! generate concurrently with different seeds.
//!
//! ```
//! use huebound_sampler::{generate, ColorFamily, SampleRequest};
//!
//! let request = SampleRequest::new().with_hue(ColorFamily::Red).with_seed(42);
//! let color = generate(&request).unwrap();
//! assert_eq!(color.to_string(), "#f94f25");
//! ```

// Whole-degree and whole-percent values move between f64 and integers.
#![allow(clippy::cast_precision_loss)]
#![allow(clippy::cast_possible_truncation)]
// Seeded draws must match the reference arithmetic bit for bit; no fma.
#![allow(clippy::suboptimal_flops)]
#![allow(clippy::module_name_repetitions)]

pub mod dictionary;
pub mod error;
pub mod generate;
pub mod hue;
pub mod random;
pub mod request;
pub mod sampler;
pub mod seed;

pub use dictionary::{ColorDefinition, ColorFamily, Dictionary};
pub use error::{Error, Result};
pub use generate::{generate, generate_with, Output};
pub use hue::HueSelector;
pub use request::{Luminosity, SampleRequest};
pub use sampler::Sampler;
pub use seed::Seed;

pub use huebound_color::{ColorFormat, FormattedColor, Hsb, Hsl, Rgb};
