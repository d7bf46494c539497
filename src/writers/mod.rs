/*!
# Writers module
Contains the logic for writing the outputs of the compare command.
*/
/// Text and JSON forms of the final comparison summary
pub mod summary;
