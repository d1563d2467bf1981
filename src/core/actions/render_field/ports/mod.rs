pub mod escape_algorithm;
