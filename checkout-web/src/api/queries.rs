//! GraphQL documents sent by the storefront views.

/// Checkout for the stored token, scoped to a sales channel.
pub const CHECKOUT_QUERY: &str = r"
query Checkout($id: ID!, $channel: String!, $languageCode: LanguageCodeEnum!) {
  checkout(id: $id, channel: $channel) {
    id
    email
    lines { __typename ...SummaryLine }
    subtotalPrice { gross { amount currency } }
    shippingPrice { gross { amount currency } }
    totalPrice { gross { amount currency } }
  }
}

fragment SummaryLine on CheckoutLine {
  id
  quantity
  totalPrice { gross { amount currency } }
  variant {
    id
    name
    translation(languageCode: $languageCode) { name }
    media { url alt type }
    attributes { values { name dateTime translation(languageCode: $languageCode) { name } } }
    product {
      name
      translation(languageCode: $languageCode) { name }
      media { url alt type }
    }
  }
}
";

pub const ORDER_QUERY: &str = r"
query Order($id: ID!, $languageCode: LanguageCodeEnum!) {
  order(id: $id) {
    id
    number
    created
    status
    userEmail
    lines { __typename ...OrderSummaryLine }
    subtotal { gross { amount currency } }
    shippingPrice { gross { amount currency } }
    total { gross { amount currency } }
  }
}

fragment OrderSummaryLine on OrderLine {
  id
  quantity
  variantName
  productName
  thumbnail { url alt }
  totalPrice { gross { amount currency } }
  variant { attributes { values { name dateTime } } }
}
";
