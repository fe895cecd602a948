pub mod match_settings;
