use crate::value_objects::{FieldValue, Price, PriceRange};
use serde::Serialize;
use serde_json::{Map, Value};

/// One open liquidity range reported by the vault.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Position {
    /// 1-based position in the reported list.
    pub index: usize,
    pub lower_price: Option<Price>,
    pub upper_price: Option<Price>,
    pub amount0: FieldValue,
    pub amount1: FieldValue,
}

impl Position {
    pub fn from_json(index: usize, value: &Value) -> Self {
        let range = value.get("range");
        let bound = |key: &str| range.and_then(|r| r.get(key)).and_then(Price::from_json);

        Self {
            index,
            lower_price: bound("lowerPrice"),
            upper_price: bound("upperPrice"),
            amount0: FieldValue::lookup_in(value, "amount0"),
            amount1: FieldValue::lookup_in(value, "amount1"),
        }
    }

    pub fn label(&self) -> String {
        format!("Position {}", self.index)
    }

    /// The price range, when both bounds were reported.
    pub fn range(&self) -> Option<PriceRange> {
        Some(PriceRange::new(self.lower_price?, self.upper_price?))
    }
}

/// The `liquidityPositions` section.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct LiquidityPositions {
    /// `None` when the `positions` leaf is absent or not a list.
    pub positions: Option<Vec<Position>>,
}

impl LiquidityPositions {
    pub fn from_section(section: &Map<String, Value>) -> Self {
        let positions = section.get("positions").and_then(Value::as_array).map(|list| {
            list.iter()
                .enumerate()
                .map(|(i, value)| Position::from_json(i + 1, value))
                .collect()
        });
        Self { positions }
    }

    pub fn len(&self) -> usize {
        self.positions.as_ref().map_or(0, Vec::len)
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rust_decimal_macros::dec;
    use serde_json::json;

    #[test]
    fn test_position_from_json() {
        let position = Position::from_json(
            1,
            &json!({"range": {"lowerPrice": 1.234, "upperPrice": 2.345}, "amount0": 10, "amount1": 5}),
        );

        assert_eq!(position.label(), "Position 1");
        let range = position.range().unwrap();
        assert_eq!(range.lower_price.value, dec!(1.234));
        assert_eq!(range.upper_price.value, dec!(2.345));
        assert_eq!(position.amount0.to_string(), "10");
        assert_eq!(position.amount1.to_string(), "5");
    }

    #[test]
    fn test_position_missing_leaves() {
        let position = Position::from_json(3, &json!({"range": {"lowerPrice": 1.0}}));

        assert!(position.lower_price.is_some());
        assert!(position.upper_price.is_none());
        assert!(position.range().is_none());
        assert!(position.amount0.is_missing());
        assert!(position.amount1.is_missing());

        let bare = Position::from_json(4, &json!("not an object"));
        assert!(bare.range().is_none());
    }

    #[test]
    fn test_section_keeps_order_and_numbering() {
        let section = json!({"positions": [
            {"range": {"lowerPrice": 1, "upperPrice": 2}, "amount0": 1, "amount1": 2},
            {"range": {"lowerPrice": 3, "upperPrice": 4}, "amount0": 3, "amount1": 4}
        ]});
        let positions = LiquidityPositions::from_section(section.as_object().unwrap());

        assert_eq!(positions.len(), 2);
        let list = positions.positions.unwrap();
        assert_eq!(list[0].index, 1);
        assert_eq!(list[1].index, 2);
        assert_eq!(list[1].lower_price, Some(Price::new(dec!(3))));
    }

    #[test]
    fn test_section_without_positions_list() {
        let missing = LiquidityPositions::from_section(&Map::new());
        assert!(missing.positions.is_none());
        assert!(missing.is_empty());

        let wrong_type = json!({"positions": {"a": 1}});
        let wrong = LiquidityPositions::from_section(wrong_type.as_object().unwrap());
        assert!(wrong.positions.is_none());
    }
}
