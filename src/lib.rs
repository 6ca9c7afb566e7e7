// -- Lint policy ---------------------------------------------------------
// This is the single source of truth for crate-wide lints.

// Broad lint groups
#![deny(clippy::all)]
#![deny(clippy::pedantic)]
#![deny(clippy::nursery)]
// Documentation
#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]
#![deny(rustdoc::private_intra_doc_links)]
#![deny(rustdoc::bare_urls)]
// No panicking in library code
#![deny(clippy::unwrap_used)]
#![deny(clippy::expect_used)]
#![deny(clippy::panic)]
#![deny(clippy::todo)]
#![deny(clippy::unimplemented)]
// No debug/print artifacts
#![deny(clippy::dbg_macro)]
#![deny(clippy::print_stdout)]
#![deny(clippy::print_stderr)]
// Import hygiene
#![deny(clippy::wildcard_imports)]
// Complexity limits (thresholds in clippy.toml)
#![deny(clippy::cognitive_complexity)]
#![deny(clippy::too_many_lines)]
#![deny(clippy::excessive_nesting)]
// Clone / pass-by-value hygiene
#![deny(clippy::needless_pass_by_value)]
#![deny(clippy::implicit_clone)]
// String hygiene
#![deny(clippy::inefficient_to_string)]
#![deny(clippy::redundant_closure_for_method_calls)]
#![deny(clippy::manual_string_new)]
#![deny(clippy::str_to_string)]
// Cargo lints (warn, not deny since cargo lints can be noisy)
#![warn(clippy::cargo)]
// Unused / redundant code
#![deny(unused_results)]
#![deny(unused_qualifications)]
// Cast hygiene
#![deny(trivial_casts)]
#![deny(trivial_numeric_casts)]
// Graphics math: casts between index/float types are intentional
#![allow(clippy::cast_precision_loss)]
#![allow(clippy::cast_possible_truncation)]
#![allow(clippy::cast_sign_loss)]
#![allow(clippy::float_cmp)]
#![allow(clippy::suboptimal_flops)]

//! Geometry ingestion core for molecular visualization.
//!
//! Turns raw textual structure/mesh formats into flat, renderer-ready
//! geometry buffers. The pipeline is: fixed-column structural text →
//! [`formats::pdb`] → atom list → { [`structure::normalize`],
//! [`structure::bond_inference`], [`structure::backbone`] } →
//! [`geometry::assemble`] → render buffers. Independently,
//! [`formats::obj`] decodes a generic polygon-mesh text format into the
//! same [`geometry::MeshBuffer`] shape.
//!
//! # Key entry points
//!
//! - [`structure::load_molecule`] - run the full molecular load pipeline
//! - [`geometry::assemble`] - turn a loaded molecule into render buffers
//! - [`geometry::primitives`] - parametric sphere/cylinder/cube/plane meshes
//! - [`formats::obj::parse_mesh`] - polygon-mesh text → [`geometry::MeshBuffer`]
//! - [`options::Options`] - runtime configuration with TOML presets
//!
//! # Scope
//!
//! Everything here is a synchronous, single-threaded, pure-data transform.
//! Text acquisition (file/network fetch), GPU buffer upload, shading, and
//! camera math belong to the caller; this crate receives already-retrieved
//! text and hands back owned buffers.

pub mod element;
pub mod error;
pub mod formats;
pub mod geometry;
pub mod options;
pub mod structure;

pub use element::Element;
pub use error::MolgeomError;
pub use geometry::MeshBuffer;
pub use structure::{Atom, Bond, Molecule};
