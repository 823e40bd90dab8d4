use std::ops::Index;

use tracing::debug;

use super::element::DigitElement;

/// Ordered, append-only collection of digit elements (left to right).
#[derive(Debug, Clone, Default)]
pub struct DigitRegistry {
    elements: Vec<DigitElement>,
}

impl DigitRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.elements.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.elements.is_empty()
    }

    pub fn get(&self, index: usize) -> Option<&DigitElement> {
        self.elements.get(index)
    }

    pub fn iter(&self) -> std::slice::Iter<'_, DigitElement> {
        self.elements.iter()
    }

    /// Make sure at least `n` elements exist. Never removes any.
    pub fn ensure(&mut self, n: usize) {
        if self.elements.len() >= n {
            return;
        }
        debug!("Growing digit registry from {} to {}", self.elements.len(), n);
        while self.elements.len() < n {
            let position = self.elements.len() + 1;
            self.elements.push(DigitElement::new(position));
        }
    }

    /// Render `value` into the element at `index` unless it already shows it.
    ///
    /// Returns true when the element was mutated. Out-of-range indices are
    /// ignored; callers grow the registry first.
    pub fn update_digit_at(&mut self, index: usize, value: u8) -> bool {
        match self.elements.get_mut(index) {
            Some(el) if el.value() != value => {
                el.render(value);
                true
            }
            _ => false,
        }
    }

    /// Total renders across every element
    pub fn mutations(&self) -> usize {
        self.elements.iter().map(DigitElement::renders).sum()
    }
}

impl Index<usize> for DigitRegistry {
    type Output = DigitElement;

    fn index(&self, index: usize) -> &Self::Output {
        &self.elements[index]
    }
}

impl<'a> IntoIterator for &'a DigitRegistry {
    type Item = &'a DigitElement;
    type IntoIter = std::slice::Iter<'a, DigitElement>;

    fn into_iter(self) -> Self::IntoIter {
        self.elements.iter()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_ensure_appends_positions() {
        let mut registry = DigitRegistry::new();
        registry.ensure(3);
        let positions: Vec<usize> = registry.iter().map(|e| e.position()).collect();
        assert_eq!(positions, vec![1, 2, 3]);
    }

    #[test]
    fn test_ensure_never_shrinks() {
        let mut registry = DigitRegistry::new();
        registry.ensure(4);
        registry.ensure(1);
        assert_eq!(registry.len(), 4);
    }

    #[test]
    fn test_update_same_value_is_noop() {
        let mut registry = DigitRegistry::new();
        registry.ensure(2);
        let before = registry.mutations();

        assert!(!registry.update_digit_at(0, 0));
        assert_eq!(registry.mutations(), before);

        assert!(registry.update_digit_at(0, 4));
        assert_eq!(registry.mutations(), before + 1);
        assert_eq!(registry[0].text(), '4');
    }

    #[test]
    fn test_update_out_of_range_is_ignored() {
        let mut registry = DigitRegistry::new();
        registry.ensure(1);
        assert!(!registry.update_digit_at(5, 3));
        assert_eq!(registry.len(), 1);
    }
}
