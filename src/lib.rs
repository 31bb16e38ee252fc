//! pH試験紙カラー解析ツール

pub mod analyzer;
pub mod cli;
pub mod config;
pub mod error;
pub mod scanner;
