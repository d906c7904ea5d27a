// Sort key/direction chosen in the sort controls.

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum SortKey {
    Price,
    Quantity,
    Available,
}

impl SortKey {
    pub const ALL: [SortKey; 3] = [SortKey::Price, SortKey::Quantity, SortKey::Available];

    /// Maps a `<select>` value; the empty placeholder means no sorting.
    pub fn from_option_value(value: &str) -> Option<SortKey> {
        match value {
            "price" => Some(SortKey::Price),
            "quantity" => Some(SortKey::Quantity),
            "available" => Some(SortKey::Available),
            _ => None,
        }
    }

    pub fn option_value(self) -> &'static str {
        match self {
            SortKey::Price => "price",
            SortKey::Quantity => "quantity",
            SortKey::Available => "available",
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            SortKey::Price => "Price",
            SortKey::Quantity => "Quantity",
            SortKey::Available => "Availability",
        }
    }
}

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum SortDirection {
    #[default]
    Asc,
    Desc,
}

impl SortDirection {
    pub fn toggled(self) -> Self {
        match self {
            SortDirection::Asc => SortDirection::Desc,
            SortDirection::Desc => SortDirection::Asc,
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            SortDirection::Asc => "Ascending",
            SortDirection::Desc => "Descending",
        }
    }
}

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct SortSpec {
    pub key: Option<SortKey>,
    pub direction: SortDirection,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn option_values_map_back() {
        for key in SortKey::ALL {
            assert_eq!(SortKey::from_option_value(key.option_value()), Some(key));
        }
        assert_eq!(SortKey::from_option_value(""), None);
        assert_eq!(SortKey::from_option_value("name"), None);
    }

    #[test]
    fn default_is_unsorted_ascending() {
        let spec = SortSpec::default();
        assert_eq!(spec.key, None);
        assert_eq!(spec.direction, SortDirection::Asc);
        assert_eq!(spec.direction.toggled(), SortDirection::Desc);
        assert_eq!(spec.direction.toggled().toggled(), SortDirection::Asc);
    }
}
