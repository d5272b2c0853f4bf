//! # Face Index
//!
//! Gallery crate on top of [`face_index_core`]: command-line argument
//! handling and the text report printed by the `face_gallery` binary.
//!
//! ## Modules
//!
//! - `cli`: Flag parsing onto a [`GalleryConfig`]
//! - `report`: Path-data listing of a face walk

#![deny(missing_docs)]
#![deny(unsafe_code)]
#![deny(clippy::all)]
#![warn(clippy::pedantic)]

pub mod cli;
pub mod report;

pub use face_index_core as core;

pub use cli::{parse_args, CliCommand};
pub use face_index_core::{FaceError, FaceResult, GalleryConfig};
pub use report::render_walk;
