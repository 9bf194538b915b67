// cvmatch: ATS keyword optimizer
//
// This is the library root. Keyword extraction and scoring live in
// `keywords`; the remaining modules cover lead capture, admin statistics,
// configuration and presentation.

pub mod admin;
pub mod config;
pub mod keywords;
pub mod leads;
pub mod output;

#[cfg(feature = "web")]
pub mod web;
