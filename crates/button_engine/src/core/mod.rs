//! Core engine types shared by the library and its front ends

pub mod config;
