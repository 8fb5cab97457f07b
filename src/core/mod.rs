pub mod alphabet;
pub mod decoder;
pub mod letter;
pub mod string;
pub mod unicode;
