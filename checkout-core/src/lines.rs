//! Checkout and order line items and their summary presentation.
//!
//! Lines arrive from the commerce API in two shapes: live checkout lines with
//! nested variant/product data, and order lines that were flattened when the
//! order was placed. Both deserialize into [`Line`], discriminated by the
//! GraphQL `__typename` field.

use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum MediaType {
    Image,
    Video,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Media {
    pub url: String,
    #[serde(default)]
    pub alt: Option<String>,
    #[serde(rename = "type")]
    pub media_type: MediaType,
}

impl Media {
    #[must_use]
    pub const fn is_image(&self) -> bool {
        matches!(self.media_type, MediaType::Image)
    }
}

/// Image reference used for line thumbnails.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Image {
    pub url: String,
    #[serde(default)]
    pub alt: Option<String>,
}

impl From<&Media> for Image {
    fn from(media: &Media) -> Self {
        Self {
            url: media.url.clone(),
            alt: media.alt.clone(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct Translation {
    #[serde(default)]
    pub name: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Money {
    pub amount: f64,
    pub currency: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TaxedMoney {
    pub gross: Money,
}

#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AttributeValue {
    #[serde(default)]
    pub name: Option<String>,
    #[serde(default)]
    pub date_time: Option<String>,
    #[serde(default)]
    pub translation: Option<Translation>,
}

#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct SelectedAttribute {
    #[serde(default)]
    pub values: Vec<AttributeValue>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Product {
    pub name: String,
    #[serde(default)]
    pub translation: Option<Translation>,
    #[serde(default)]
    pub media: Option<Vec<Media>>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CheckoutVariant {
    pub id: String,
    pub name: String,
    #[serde(default)]
    pub translation: Option<Translation>,
    #[serde(default)]
    pub media: Option<Vec<Media>>,
    #[serde(default)]
    pub attributes: Vec<SelectedAttribute>,
    pub product: Product,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CheckoutLine {
    pub id: String,
    pub quantity: u32,
    #[serde(default)]
    pub total_price: Option<TaxedMoney>,
    pub variant: CheckoutVariant,
}

/// Variant data still attached to an order line, when the API returns it.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct OrderVariant {
    #[serde(default)]
    pub attributes: Vec<SelectedAttribute>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct OrderLine {
    pub id: String,
    pub quantity: u32,
    pub variant_name: String,
    pub product_name: String,
    #[serde(default)]
    pub thumbnail: Option<Image>,
    #[serde(default)]
    pub total_price: Option<TaxedMoney>,
    #[serde(default)]
    pub variant: Option<OrderVariant>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "__typename")]
pub enum Line {
    CheckoutLine(CheckoutLine),
    OrderLine(OrderLine),
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LineKind {
    Checkout,
    Order,
}

/// Uniform name/thumbnail triple shown in the summary.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SummaryLineProps {
    pub variant_name: String,
    pub product_name: String,
    pub product_image: Option<Image>,
}

impl Line {
    #[must_use]
    pub const fn kind(&self) -> LineKind {
        match self {
            Self::CheckoutLine(_) => LineKind::Checkout,
            Self::OrderLine(_) => LineKind::Order,
        }
    }

    #[must_use]
    pub const fn is_checkout_line(&self) -> bool {
        matches!(self.kind(), LineKind::Checkout)
    }

    #[must_use]
    pub fn id(&self) -> &str {
        match self {
            Self::CheckoutLine(line) => &line.id,
            Self::OrderLine(line) => &line.id,
        }
    }

    #[must_use]
    pub const fn quantity(&self) -> u32 {
        match self {
            Self::CheckoutLine(line) => line.quantity,
            Self::OrderLine(line) => line.quantity,
        }
    }

    #[must_use]
    pub const fn total_price(&self) -> Option<&Money> {
        let taxed = match self {
            Self::CheckoutLine(line) => line.total_price.as_ref(),
            Self::OrderLine(line) => line.total_price.as_ref(),
        };
        match taxed {
            Some(taxed) => Some(&taxed.gross),
            None => None,
        }
    }

    fn attributes(&self) -> &[SelectedAttribute] {
        match self {
            Self::CheckoutLine(line) => &line.variant.attributes,
            Self::OrderLine(line) => line
                .variant
                .as_ref()
                .map_or(&[][..], |variant| variant.attributes.as_slice()),
        }
    }
}

fn translated_or<'a>(translation: Option<&'a Translation>, base: &'a str) -> &'a str {
    translation
        .and_then(|t| t.name.as_deref())
        .filter(|name| !name.is_empty())
        .unwrap_or(base)
}

fn first_image(media: Option<&Vec<Media>>) -> Option<&Media> {
    media.and_then(|items| items.iter().find(|m| m.is_image()))
}

/// First image on the variant, else the first image on its product.
#[must_use]
pub fn thumbnail_from_checkout_line(line: &CheckoutLine) -> Option<Image> {
    first_image(line.variant.media.as_ref())
        .or_else(|| first_image(line.variant.product.media.as_ref()))
        .map(Image::from)
}

#[must_use]
pub fn summary_line_props(line: &Line) -> SummaryLineProps {
    match line {
        Line::CheckoutLine(line) => SummaryLineProps {
            variant_name: translated_or(line.variant.translation.as_ref(), &line.variant.name)
                .to_string(),
            product_name: translated_or(
                line.variant.product.translation.as_ref(),
                &line.variant.product.name,
            )
            .to_string(),
            product_image: thumbnail_from_checkout_line(line),
        },
        Line::OrderLine(line) => SummaryLineProps {
            variant_name: line.variant_name.clone(),
            product_name: line.product_name.clone(),
            product_image: line.thumbnail.clone(),
        },
    }
}

// Only the raw name is shown. Translated names and `date_time` values are
// deserialized but unused until the summary decides how to present them.
fn attribute_value_label(value: &AttributeValue) -> Option<&str> {
    value.name.as_deref().filter(|name| !name.is_empty())
}

/// Comma-joined attribute value names, in stored order.
#[must_use]
pub fn line_attributes_text(line: &Line) -> String {
    line.attributes()
        .iter()
        .flat_map(|attribute| attribute.values.iter())
        .filter_map(attribute_value_label)
        .collect::<Vec<_>>()
        .join(", ")
}

#[cfg(test)]
mod tests {
    use super::*;

    fn media(url: &str, media_type: MediaType) -> Media {
        Media {
            url: url.to_string(),
            alt: None,
            media_type,
        }
    }

    fn checkout_line(variant_media: Option<Vec<Media>>, product_media: Option<Vec<Media>>) -> Line {
        Line::CheckoutLine(CheckoutLine {
            id: "l1".into(),
            quantity: 1,
            total_price: None,
            variant: CheckoutVariant {
                id: "v1".into(),
                name: "Red Shirt".into(),
                translation: None,
                media: variant_media,
                attributes: Vec::new(),
                product: Product {
                    name: "Shirt".into(),
                    translation: None,
                    media: product_media,
                },
            },
        })
    }

    #[test]
    fn variant_image_wins_over_product_image() {
        let line = checkout_line(
            Some(vec![media("v-video", MediaType::Video), media("v-img", MediaType::Image)]),
            Some(vec![media("p-img", MediaType::Image)]),
        );
        let props = summary_line_props(&line);
        assert_eq!(props.product_image.map(|i| i.url).as_deref(), Some("v-img"));
    }

    #[test]
    fn no_image_anywhere_yields_none() {
        let line = checkout_line(Some(vec![media("v", MediaType::Video)]), None);
        assert!(summary_line_props(&line).product_image.is_none());
    }

    #[test]
    fn empty_translation_falls_back_to_base_name() {
        let mut line = checkout_line(None, None);
        if let Line::CheckoutLine(inner) = &mut line {
            inner.variant.translation = Some(Translation {
                name: Some(String::new()),
            });
        }
        assert_eq!(summary_line_props(&line).variant_name, "Red Shirt");
    }

    #[test]
    fn attribute_values_without_names_are_skipped() {
        let mut line = checkout_line(None, None);
        if let Line::CheckoutLine(inner) = &mut line {
            inner.variant.attributes = vec![SelectedAttribute {
                values: vec![
                    AttributeValue {
                        name: None,
                        date_time: Some("2024-01-01T00:00:00Z".into()),
                        translation: None,
                    },
                    AttributeValue {
                        name: Some("Blue".into()),
                        ..AttributeValue::default()
                    },
                ],
            }];
        }
        assert_eq!(line_attributes_text(&line), "Blue");
    }

    #[test]
    fn kind_distinguishes_shapes() {
        assert_eq!(checkout_line(None, None).kind(), LineKind::Checkout);
        let order = Line::OrderLine(OrderLine {
            id: "o1".into(),
            quantity: 2,
            variant_name: "X".into(),
            product_name: "Y".into(),
            thumbnail: None,
            total_price: None,
            variant: None,
        });
        assert!(!order.is_checkout_line());
        assert_eq!(order.quantity(), 2);
        assert_eq!(line_attributes_text(&order), "");
    }
}
