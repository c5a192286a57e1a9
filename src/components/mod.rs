pub mod save_button;
