pub mod julia_cli;
