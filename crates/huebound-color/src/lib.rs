// SPDX-License-Identifier: MIT
//
// huebound-color — the color model behind huebound.
//
// Every sampled color lives in HSB space. The other representations a
// caller can ask for (RGB, HSL, hex, with or without alpha) are pure
// views computed from that triple at the very end of a request.
//
//   Hsb ──► Rgb ──► "#rrggbb" / "rgb(..)" / "rgba(..)"
//    │
//    └────► Hsl ──► "hsl(..)" / "hsla(..)"
//
// RGB quantisation truncates rather than rounds; seeded palettes are
// pinned to that.

pub mod format;
pub mod hsb;

pub use format::{ColorFormat, FormattedColor};
pub use hsb::{Hsb, Hsl, Rgb};
