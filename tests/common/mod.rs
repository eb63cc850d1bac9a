pub mod synthetic_file;
