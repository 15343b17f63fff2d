//! CardioRisk CLI
//!
//! 予測APIへの手入力・一括アップロードをターミナルから行う

pub mod cli;
pub mod client;
pub mod config;
pub mod error;
pub mod export;
pub mod prompt;
pub mod render;
pub mod session;
