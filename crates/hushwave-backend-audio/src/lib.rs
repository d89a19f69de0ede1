//! Hushwave Audio Backend
//!
//! Procedural ambient background synthesis: a validated [`Recipe`] and a
//! duration go in, a mono 16-bit 44.1 kHz WAV file and its provenance
//! [`Proof`] come out.
//!
//! # Overview
//!
//! Each sample is the sum of three layers:
//!
//! - **Noise bed** - white noise through a one-pole low-pass
//! - **Sub drone** - sine in the 35-70 Hz range with slow pitch drift
//! - **Pulses** - sparse random clicks at a fraction of an event per second
//!
//! shaped by two slow level modulators, a power-curve fade envelope and a
//! tanh soft clipper. The finished buffer is RMS-normalized once, then
//! encoded and hashed.
//!
//! # Determinism
//!
//! Given the same recipe, duration, and seed, output is byte-identical. When
//! no seed is supplied, each call draws a fresh one from the OS, so repeated
//! renders differ. All mutable state (PRNG, filter, buffer) is
//! owned by a single call, so concurrent renders need no locking.
//!
//! # Example
//!
//! ```
//! use hushwave_backend_audio::generate;
//! use hushwave_spec::{Category, SynthesisRequest};
//!
//! let request = SynthesisRequest::new(1.5, Category::Calm.default_recipe()).with_seed(7);
//! let result = generate(&request);
//!
//! assert_eq!(result.wav.len(), 44 + 2 * 66_150);
//! assert_eq!(result.proof.content_hash.len(), 64);
//! ```
//!
//! # Crate Structure
//!
//! - [`generate()`] - Main entry point
//! - [`rng`] - Call-scoped PCG32 noise source
//! - [`filter`] - One-pole low-pass
//! - [`oscillator`] - Slow modulators
//! - [`envelope`] - Fade-in/fade-out
//! - [`synthesis`] - Layered synthesizer
//! - [`mixer`] - Soft clip and loudness normalization
//! - [`wav`] - Canonical WAV writer and reader
//! - [`proof`] - Content hashing and proof assembly
//!
//! [`Recipe`]: hushwave_spec::Recipe
//! [`Proof`]: hushwave_spec::Proof

pub mod envelope;
pub mod error;
pub mod filter;
pub mod generate;
pub mod mixer;
pub mod oscillator;
pub mod proof;
pub mod rng;
pub mod synthesis;
pub mod wav;

// Re-export main types at crate root
pub use error::{AudioError, AudioResult};
pub use generate::{generate, generate_samples, GenerateResult, RenderStats, WavArtifact};
pub use proof::{assemble_proof, assemble_proof_at, content_hash, verify_proof};
pub use wav::{WavInfo, WavWriter};
