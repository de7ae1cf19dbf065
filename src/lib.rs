//! SuperCopy binary support: command line, bootstrap and the terminal shell.

pub mod bootstrap;
pub mod cli;
pub mod shell;
