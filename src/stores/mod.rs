pub mod user_directory;
