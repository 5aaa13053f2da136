//! Frontend Models
//!
//! Data read out of the catalog markup.

/// Product details shown in the modal, read from a clicked card
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ProductSummary {
    pub name: String,
    pub image_src: Option<String>,
    /// Price label exactly as displayed on the card
    pub price: Option<String>,
}

impl ProductSummary {
    /// Build from raw card text, dropping blank parts
    pub fn from_parts(name: Option<String>, image_src: Option<String>, price: Option<String>) -> Self {
        fn non_blank(value: Option<String>) -> Option<String> {
            value.map(|v| v.trim().to_string()).filter(|v| !v.is_empty())
        }

        Self {
            name: non_blank(name).unwrap_or_default(),
            image_src: non_blank(image_src),
            price: non_blank(price),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_from_parts_trims_and_drops_blanks() {
        let summary = ProductSummary::from_parts(
            Some("\n  Acer Nitro V15  ".to_string()),
            Some(String::new()),
            Some(" R$ 4.799,00 ".to_string()),
        );

        assert_eq!(summary.name, "Acer Nitro V15");
        assert_eq!(summary.image_src, None);
        assert_eq!(summary.price.as_deref(), Some("R$ 4.799,00"));
    }

    #[test]
    fn test_from_parts_missing_everything() {
        assert_eq!(ProductSummary::from_parts(None, None, None), ProductSummary::default());
    }
}
