//! Selection controls for the signup industry/profession fields.

#[cfg(test)]
#[path = "options_test.rs"]
mod options_test;

pub const PLACEHOLDER_LABEL: &str = "Select one";

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct SelectEntry {
    pub label: String,
    pub value: String,
    pub disabled: bool,
    pub selected: bool,
}

impl SelectEntry {
    fn placeholder() -> Self {
        Self {
            label: PLACEHOLDER_LABEL.to_owned(),
            value: String::new(),
            disabled: true,
            selected: true,
        }
    }

    fn choice(item: &str) -> Self {
        Self {
            label: item.to_owned(),
            value: item.to_owned(),
            disabled: false,
            selected: false,
        }
    }
}

/// A `<select>` model: a disabled placeholder followed by catalog entries.
///
/// At most one entry is selected; while the placeholder is selected the
/// control has no value and contributes nothing to a submission.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct SelectControl {
    entries: Vec<SelectEntry>,
}

impl Default for SelectControl {
    fn default() -> Self {
        Self {
            entries: vec![SelectEntry::placeholder()],
        }
    }
}

impl SelectControl {
    pub fn with_catalog(catalog: &[&str]) -> Self {
        let mut control = Self::default();
        populate(&mut control, catalog);
        control
    }

    pub fn entries(&self) -> &[SelectEntry] {
        &self.entries
    }

    /// Selected value, or `None` while the placeholder is showing.
    pub fn value(&self) -> Option<&str> {
        self.entries
            .iter()
            .find(|e| e.selected && !e.disabled)
            .map(|e| e.value.as_str())
    }

    /// Select the enabled entry whose value is `value`.
    ///
    /// Returns `false` and leaves the control untouched when no such entry
    /// exists (including the placeholder's empty value).
    pub fn select(&mut self, value: &str) -> bool {
        let Some(index) = self
            .entries
            .iter()
            .position(|e| !e.disabled && e.value == value)
        else {
            return false;
        };
        for (i, entry) in self.entries.iter_mut().enumerate() {
            entry.selected = i == index;
        }
        true
    }
}

/// Replace every entry in `control` with the placeholder plus `catalog`.
pub fn populate(control: &mut SelectControl, catalog: &[&str]) {
    control.entries.clear();
    control.entries.reserve(catalog.len() + 1);
    control.entries.push(SelectEntry::placeholder());
    control
        .entries
        .extend(catalog.iter().map(|item| SelectEntry::choice(item)));
}
