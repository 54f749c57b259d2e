// Quill: stylometric fingerprinting and literary author matching
//
// This is the library root. Each module corresponds to a major subsystem:
// the pure matching core (dna), the author catalog (db), and the
// presentation layers around them.

pub mod config;
pub mod db;
pub mod dna;
pub mod output;

#[cfg(feature = "web")]
pub mod web;
