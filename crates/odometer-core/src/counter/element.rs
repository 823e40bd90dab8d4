use std::fmt;

/// One visual digit cell.
///
/// Its position is fixed when the element is created; the displayed value is
/// the last digit rendered into it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DigitElement {
    /// 1-based position tag (`digit-<position>`)
    position: usize,
    /// Last rendered digit (0-9)
    value: u8,
    /// Number of times this element has been rendered
    renders: usize,
}

impl DigitElement {
    /// Create the element for `position` and render an initial `0`
    pub(crate) fn new(position: usize) -> Self {
        let mut el = Self {
            position,
            value: 0,
            renders: 0,
        };
        el.render(0);
        el
    }

    #[inline]
    pub fn position(&self) -> usize {
        self.position
    }

    /// Last rendered digit
    #[inline]
    pub fn value(&self) -> u8 {
        self.value
    }

    /// Displayed character
    #[inline]
    pub fn text(&self) -> char {
        char::from(b'0' + self.value)
    }

    #[inline]
    pub fn renders(&self) -> usize {
        self.renders
    }

    /// Full class string, e.g. `digit digit-2 value-7`
    pub fn class_name(&self) -> String {
        format!("digit digit-{} value-{}", self.position, self.value)
    }

    pub fn has_class(&self, class: &str) -> bool {
        match class {
            "digit" => true,
            _ => {
                if let Some(pos) = class.strip_prefix("digit-") {
                    pos.parse::<usize>().map_or(false, |p| p == self.position)
                } else if let Some(val) = class.strip_prefix("value-") {
                    val.parse::<u8>().map_or(false, |v| v == self.value)
                } else {
                    false
                }
            }
        }
    }

    /// Unconditionally render `value` (text and value tag)
    pub(crate) fn render(&mut self, value: u8) {
        debug_assert!(value <= 9);
        self.value = value.min(9);
        self.renders += 1;
    }
}

impl fmt::Display for DigitElement {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.text())
    }
}
