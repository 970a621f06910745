pub mod config;
pub mod create;
pub mod export;
pub mod gencsv;
pub mod init;
pub mod save;
pub mod send;
pub mod update;
