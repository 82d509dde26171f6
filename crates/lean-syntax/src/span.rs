use std::fmt;

/// A byte span in the input source.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct InputSpan {
    pub start: u32,
    pub end: u32,
}

impl InputSpan {
    pub fn new(start: u32, end: u32) -> Self {
        Self { start, end }
    }

    pub fn len(&self) -> u32 {
        self.end.saturating_sub(self.start)
    }

    pub fn is_empty(&self) -> bool {
        self.end <= self.start
    }

    /// Resolve the span against the source text it was produced from.
    pub fn as_str<'a>(&self, input: &'a str) -> &'a str {
        &input[self.start as usize..self.end as usize]
    }
}

impl fmt::Display for InputSpan {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}..{}", self.start, self.end)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn resolves_against_input() {
        let input = "theorem foo";
        let span = InputSpan::new(8, 11);
        assert_eq!(span.as_str(input), "foo");
        assert_eq!(span.len(), 3);
    }
}
