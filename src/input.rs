pub fn filter_letter(raw: &str) -> Option<char>
{
    raw.chars()
        .find(|ch| ch.is_alphabetic())
        .map(|ch| ch.to_lowercase().next().unwrap_or(ch))
}

/// A one-letter-at-a-time text field.
///
/// Every change is reduced to at most one letter and the buffer is emptied
/// straight away, so pasting "ab" yields `a` and drops `b`.
#[derive(Debug, Default)]
pub struct LetterEntry
{
    buffer: String,
    focused: bool,
}

impl LetterEntry
{
    pub fn focus(&mut self)
    {
        self.focused = true;
    }

    pub fn blur(&mut self)
    {
        self.focused = false;
    }

    pub fn is_focused(&self) -> bool
    {
        self.focused
    }

    pub fn buffer(&self) -> &str
    {
        &self.buffer
    }

    pub fn change(&mut self, raw: &str) -> Option<char>
    {
        self.buffer.push_str(raw);
        let letter = filter_letter(&self.buffer);
        self.buffer.clear();
        self.focused = true;
        letter
    }
}

#[cfg(test)]
mod tests
{
    use super::*;

    #[test]
    fn keeps_only_first_letter()
    {
        assert_eq!(filter_letter("ab"), Some('a'));
        assert_eq!(filter_letter("12 Qx"), Some('q'));
        assert_eq!(filter_letter("!? 3"), None);
        assert_eq!(filter_letter(""), None);
    }

    #[test]
    fn change_clears_buffer_and_refocuses()
    {
        let mut entry = LetterEntry::default();
        entry.blur();
        assert_eq!(entry.change("ab"), Some('a'));
        assert!(entry.buffer().is_empty());
        assert!(entry.is_focused());

        assert_eq!(entry.change("7"), None);
        assert!(entry.buffer().is_empty());
    }
}
