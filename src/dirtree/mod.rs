//! Main module for dirtree library functionality

pub mod ast;
pub mod config;
pub mod date;
pub mod decoding;
pub mod formats;
pub mod lexer;
pub mod model;
pub mod parser;
pub mod processor;
pub mod reconstruct;

#[cfg(test)]
pub mod testing;
