//! Useful character extensions.
pub trait CharExt {
    /// Characters that may appear anywhere in a word (identifier or keyword).
    fn is_word(&self) -> bool;

    /// Characters that may start a word.
    fn is_word_start(&self) -> bool;
}
impl CharExt for char {
    fn is_word(&self) -> bool {
        self.is_ascii_alphanumeric() || *self == '_'
    }

    fn is_word_start(&self) -> bool {
        self.is_ascii_alphabetic() || *self == '_'
    }
}
