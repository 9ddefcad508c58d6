pub mod blog;
pub mod detail;
pub mod help;
pub mod main_menu;
pub mod settings;
pub mod work;
