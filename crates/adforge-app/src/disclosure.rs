//! State of one collapsible section.

/// Open/closed flag owned by a single disclosure instance.
///
/// Carries no business data; two instances never share state.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Disclosure {
    is_open: bool,
}

impl Disclosure {
    pub fn new(default_open: bool) -> Self {
        Self {
            is_open: default_open,
        }
    }

    pub fn is_open(&self) -> bool {
        self.is_open
    }

    pub fn toggle(&mut self) {
        self.is_open = !self.is_open;
    }
}
