// Filter settings edited from the filter panel.

/// Defaults apply no constraint at all.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct FilterSettings {
    pub available: bool,
    pub min_price: f64,
    pub max_price: f64,
    pub min_quantity: f64,
    pub max_quantity: f64,
}

impl Default for FilterSettings {
    fn default() -> Self {
        Self {
            available: false,
            min_price: 0.0,
            max_price: f64::INFINITY,
            min_quantity: 0.0,
            max_quantity: f64::INFINITY,
        }
    }
}

/// One field change coming from a filter control.
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum FilterEdit {
    ToggleAvailable,
    MinPrice(f64),
    MaxPrice(f64),
    MinQuantity(f64),
    MaxQuantity(f64),
}

/// Entry of the "applied filters" summary.
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum AppliedFilter {
    OnlyAvailable,
    MinPrice(f64),
    MaxPrice(f64),
    MinQuantity(f64),
    MaxQuantity(f64),
}

impl AppliedFilter {
    pub fn label(&self) -> String {
        match self {
            AppliedFilter::OnlyAvailable => "Only available".to_string(),
            AppliedFilter::MinPrice(v) => format!("Min price: ${}", v),
            AppliedFilter::MaxPrice(v) => format!("Max price: ${}", v),
            AppliedFilter::MinQuantity(v) => format!("Min quantity: {}", v),
            AppliedFilter::MaxQuantity(v) => format!("Max quantity: {}", v),
        }
    }
}

impl FilterSettings {
    pub fn cleared() -> Self {
        Self::default()
    }

    /// New settings equal to `self` with one field replaced. NaN or
    /// infinite bounds that would exclude everything fall back to the open
    /// bound for that field.
    pub fn with(self, edit: FilterEdit) -> Self {
        match edit {
            FilterEdit::ToggleAvailable => Self {
                available: !self.available,
                ..self
            },
            FilterEdit::MinPrice(v) => Self {
                min_price: open_min(v),
                ..self
            },
            FilterEdit::MaxPrice(v) => Self {
                max_price: open_max(v),
                ..self
            },
            FilterEdit::MinQuantity(v) => Self {
                min_quantity: open_min(v),
                ..self
            },
            FilterEdit::MaxQuantity(v) => Self {
                max_quantity: open_max(v),
                ..self
            },
        }
    }

    pub fn applied(&self) -> Vec<AppliedFilter> {
        let mut out = Vec::new();
        if self.available {
            out.push(AppliedFilter::OnlyAvailable);
        }
        if self.min_price > 0.0 {
            out.push(AppliedFilter::MinPrice(self.min_price));
        }
        if self.max_price < f64::INFINITY {
            out.push(AppliedFilter::MaxPrice(self.max_price));
        }
        if self.min_quantity > 0.0 {
            out.push(AppliedFilter::MinQuantity(self.min_quantity));
        }
        if self.max_quantity < f64::INFINITY {
            out.push(AppliedFilter::MaxQuantity(self.max_quantity));
        }
        out
    }
}

// A lower bound must be finite; +inf would hide every product.
fn open_min(v: f64) -> f64 {
    if v.is_finite() { v } else { 0.0 }
}

fn open_max(v: f64) -> f64 {
    if v.is_nan() || v == f64::NEG_INFINITY { f64::INFINITY } else { v }
}

/// Parse a lower bound typed into a numeric field; blank or invalid text
/// means no bound.
pub fn parse_min_bound(text: &str) -> f64 {
    open_min(parse_number(text).unwrap_or(f64::NAN))
}

/// Parse an upper bound typed into a numeric field; blank or invalid text
/// means no bound.
pub fn parse_max_bound(text: &str) -> f64 {
    open_max(parse_number(text).unwrap_or(f64::NAN))
}

fn parse_number(text: &str) -> Option<f64> {
    let trimmed = text.trim();
    if trimmed.is_empty() {
        return None;
    }
    // `f64::from_str` also accepts "inf" and overflowing exponents
    trimmed.parse::<f64>().ok().filter(|v| v.is_finite())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_applies_nothing() {
        let f = FilterSettings::default();
        assert!(!f.available);
        assert_eq!(f.min_price, 0.0);
        assert_eq!(f.max_price, f64::INFINITY);
        assert_eq!(f.min_quantity, 0.0);
        assert_eq!(f.max_quantity, f64::INFINITY);
        assert!(f.applied().is_empty());
    }

    #[test]
    fn edit_changes_only_its_field() {
        let base = FilterSettings::default().with(FilterEdit::MinPrice(10.0));
        let next = base.with(FilterEdit::MaxQuantity(5.0));
        assert_eq!(next.min_price, 10.0);
        assert_eq!(next.max_quantity, 5.0);
        assert_eq!(next.max_price, base.max_price);
        assert_eq!(next.min_quantity, base.min_quantity);
        assert_eq!(next.available, base.available);
    }

    #[test]
    fn toggle_available_flips() {
        let f = FilterSettings::default().with(FilterEdit::ToggleAvailable);
        assert!(f.available);
        assert!(!f.with(FilterEdit::ToggleAvailable).available);
    }

    #[test]
    fn clearing_restores_defaults_from_any_state() {
        let dirty = FilterSettings::default()
            .with(FilterEdit::ToggleAvailable)
            .with(FilterEdit::MinPrice(3.0))
            .with(FilterEdit::MaxPrice(9.0))
            .with(FilterEdit::MinQuantity(1.0))
            .with(FilterEdit::MaxQuantity(2.0));
        assert_ne!(dirty, FilterSettings::default());
        assert_eq!(FilterSettings::cleared(), FilterSettings::default());
    }

    #[test]
    fn nan_edits_become_open_bounds() {
        let f = FilterSettings::default()
            .with(FilterEdit::MinPrice(5.0))
            .with(FilterEdit::MinPrice(f64::NAN))
            .with(FilterEdit::MaxPrice(f64::NAN))
            .with(FilterEdit::MinQuantity(f64::NAN))
            .with(FilterEdit::MaxQuantity(f64::NAN));
        assert_eq!(f, FilterSettings::default());
    }

    #[test]
    fn bound_parsing() {
        assert_eq!(parse_min_bound(""), 0.0);
        assert_eq!(parse_min_bound("abc"), 0.0);
        assert_eq!(parse_min_bound(" 12.5 "), 12.5);
        assert_eq!(parse_max_bound(""), f64::INFINITY);
        assert_eq!(parse_max_bound("NaN"), f64::INFINITY);
        assert_eq!(parse_max_bound("40"), 40.0);
    }

    #[test]
    fn non_finite_text_is_no_bound() {
        for text in ["inf", "infinity", "1e999", "-inf"] {
            assert_eq!(parse_min_bound(text), 0.0, "min {text}");
            assert_eq!(parse_max_bound(text), f64::INFINITY, "max {text}");
        }
    }

    #[test]
    fn infinite_edits_become_open_bounds() {
        let f = FilterSettings::default()
            .with(FilterEdit::MinPrice(f64::INFINITY))
            .with(FilterEdit::MinQuantity(f64::NEG_INFINITY))
            .with(FilterEdit::MaxPrice(f64::NEG_INFINITY))
            .with(FilterEdit::MaxQuantity(f64::INFINITY));
        assert_eq!(f, FilterSettings::default());
    }

    #[test]
    fn applied_summary_lists_active_constraints() {
        let f = FilterSettings::default()
            .with(FilterEdit::ToggleAvailable)
            .with(FilterEdit::MaxPrice(100.0))
            .with(FilterEdit::MinQuantity(2.0));
        let labels: Vec<String> = f.applied().iter().map(|a| a.label()).collect();
        assert_eq!(
            labels,
            vec!["Only available", "Max price: $100", "Min quantity: 2"]
        );
    }
}
