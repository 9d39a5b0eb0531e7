// src/core.rs
pub mod checklist;
pub mod enumerate;
pub mod ignore;
pub mod init;
pub mod lint;
