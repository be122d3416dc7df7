use crate::config::PaletteOverflow;
use crate::error::{ChartError, Result};
use std::collections::HashMap;

/// Category -> color mapping, assigned by position in first-seen order.
#[derive(Clone, Debug, PartialEq)]
pub struct ColorScale {
    entries: Vec<(String, String)>,
    index: HashMap<String, usize>,
    /// Set when categories outnumber the palette and colors wrap around.
    pub wrapped: bool,
}

impl ColorScale {
    pub fn new(categories: &[String], palette: &[String], overflow: PaletteOverflow) -> Result<Self> {
        let n = categories.len();
        if palette.is_empty() && n > 0 {
            return Err(ChartError::PaletteExhausted { categories: n, palette: 0 });
        }
        let wrapped = n > palette.len();
        if wrapped && overflow == PaletteOverflow::Fail {
            return Err(ChartError::PaletteExhausted {
                categories: n,
                palette: palette.len(),
            });
        }
        let mut entries = Vec::with_capacity(n);
        let mut index = HashMap::with_capacity(n);
        for (i, cat) in categories.iter().enumerate() {
            if index.contains_key(cat) {
                continue;
            }
            index.insert(cat.clone(), entries.len());
            entries.push((cat.clone(), palette[i % palette.len()].clone()));
        }
        Ok(Self { entries, index, wrapped })
    }

    pub fn color_of(&self, category: &str) -> Option<&str> {
        self.index.get(category).map(|&i| self.entries[i].1.as_str())
    }

    /// `(category, color)` pairs in assignment order.
    pub fn entries(&self) -> &[(String, String)] {
        &self.entries
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn strings(v: &[&str]) -> Vec<String> {
        v.iter().map(|s| s.to_string()).collect()
    }

    #[test]
    fn test_positional_assignment() {
        let scale = ColorScale::new(
            &strings(&["Wii", "DS", "X360"]),
            &strings(&["red", "green", "blue", "gold"]),
            PaletteOverflow::Fail,
        )
        .unwrap();
        assert_eq!(scale.color_of("Wii"), Some("red"));
        assert_eq!(scale.color_of("DS"), Some("green"));
        assert_eq!(scale.color_of("X360"), Some("blue"));
        assert_eq!(scale.color_of("PS4"), None);
        assert_eq!(scale.len(), 3);
        assert!(!scale.wrapped);
    }

    #[test]
    fn test_overflow_fail() {
        let res = ColorScale::new(&strings(&["a", "b", "c"]), &strings(&["red", "green"]), PaletteOverflow::Fail);
        assert!(matches!(
            res,
            Err(ChartError::PaletteExhausted { categories: 3, palette: 2 })
        ));
    }

    #[test]
    fn test_overflow_cycle() {
        let scale =
            ColorScale::new(&strings(&["a", "b", "c"]), &strings(&["red", "green"]), PaletteOverflow::Cycle).unwrap();
        assert!(scale.wrapped);
        assert_eq!(scale.color_of("c"), Some("red"));
    }

    #[test]
    fn test_empty_palette_rejected() {
        let res = ColorScale::new(&strings(&["a"]), &[], PaletteOverflow::Cycle);
        assert!(res.is_err());
    }
}
